use crate::conf::types::{LogsieveConfig, RunOverrides};
use crate::conf::{ConfigError, validate_config};
use crate::store::StoreLocation;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn with_input() -> LogsieveConfig {
    let mut cfg = LogsieveConfig::default();
    cfg.input.path = Some("app.log".to_string());
    cfg
}

#[test]
fn minimal_config_is_valid() {
    let settings = validate_config(&with_input()).unwrap();

    assert_eq!(settings.input, "app.log");
    assert_eq!(settings.actor_prefix, "UserID:");
    assert!(settings.criteria.is_unconstrained());
    assert!(!settings.summarize);
    assert_eq!(settings.store, None);
}

#[test]
fn missing_input_is_reported() {
    let err = validate_config(&LogsieveConfig::default()).unwrap_err();

    assert!(matches!(err, ConfigError::MissingInput));
}

#[test]
fn bad_filter_bound_is_reported() {
    let mut cfg = with_input();
    cfg.filter.end_time = Some("2024-01-01".to_string());

    let err = validate_config(&cfg).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidFilter { .. }));
    assert!(err.to_string().contains("end_time"));
}

#[test]
fn all_problems_are_reported_together() {
    let mut cfg = LogsieveConfig::default();
    cfg.input.max_lines = Some(0);
    cfg.parser.actor_prefix = String::new();
    cfg.store.location = Some("mongodb://localhost:27017/".to_string());

    let err = validate_config(&cfg).unwrap_err();

    match err {
        ConfigError::Validation { errors } => {
            assert_eq!(errors.len(), 4);
            assert!(matches!(errors[0], ConfigError::MissingInput));
            assert!(matches!(errors[1], ConfigError::ZeroLineCap));
            assert!(matches!(errors[2], ConfigError::EmptyActorPrefix));
            assert!(matches!(errors[3], ConfigError::InvalidStore { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn prefix_with_whitespace_is_rejected() {
    let mut cfg = with_input();
    cfg.parser.actor_prefix = "User ID:".to_string();

    assert!(matches!(
        validate_config(&cfg).unwrap_err(),
        ConfigError::ActorPrefixWhitespace { .. }
    ));
}

#[test]
fn overrides_replace_file_values() {
    let mut cfg = with_input();
    cfg.filter.level = Some("INFO".to_string());
    cfg.export.csv = Some(PathBuf::from("file.csv"));

    cfg.apply_overrides(RunOverrides {
        input: Some("other.log".to_string()),
        level: Some("ERROR".to_string()),
        summarize: true,
        store: Some("jsonl://out.jsonl".to_string()),
        ..RunOverrides::default()
    });
    let settings = validate_config(&cfg).unwrap();

    assert_eq!(settings.input, "other.log");
    assert_eq!(
        settings.criteria.level.as_ref().map(|l| l.as_str()),
        Some("ERROR")
    );
    assert!(settings.summarize);
    assert_eq!(settings.csv, Some(PathBuf::from("file.csv")));
    assert_eq!(
        settings.store,
        Some(StoreLocation::Jsonl(PathBuf::from("out.jsonl")))
    );
}
