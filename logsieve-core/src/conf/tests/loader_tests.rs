use crate::conf::{CONFIG_FILE_NAME, ConfigError, load_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn parses_full_config_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsieve.hcl");

    fs::write(
        &path,
        r#"
input {
  path      = "logs/*.log"
  max_lines = 500
}

parser {
  actor_prefix = "uid="
}

filter {
  level      = "ERROR"
  start_time = "2024-01-01 00:00:00"
}

summary {
  enabled = true
}

export {
  csv = "report.csv"
}

store {
  location = "jsonl://logs.jsonl"
}
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.input.path.as_deref(), Some("logs/*.log"));
    assert_eq!(cfg.input.max_lines, Some(500));
    assert_eq!(cfg.parser.actor_prefix, "uid=");
    assert_eq!(cfg.filter.level.as_deref(), Some("ERROR"));
    assert_eq!(cfg.filter.end_time, None);
    assert!(cfg.summary.enabled);
    assert_eq!(cfg.export.csv, Some(PathBuf::from("report.csv")));
    assert_eq!(cfg.store.location.as_deref(), Some("jsonl://logs.jsonl"));
}

#[test]
fn empty_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsieve.hcl");
    fs::write(&path, "").unwrap();

    let cfg = load_config(&path).unwrap();

    assert_eq!(cfg.parser.actor_prefix, "UserID:");
    assert!(!cfg.summary.enabled);
    assert!(cfg.input.path.is_none());
}

#[test]
fn directory_resolves_to_default_file_name() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "input {\n  path = \"app.log\"\n}\n",
    )
    .unwrap();

    let cfg = load_config(dir.path()).unwrap();

    assert_eq!(cfg.input.path.as_deref(), Some("app.log"));
}

#[test]
fn unknown_field_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsieve.hcl");
    fs::write(&path, "filter {\n  severity = \"ERROR\"\n}\n").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("nope.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("nope.hcl"));
}
