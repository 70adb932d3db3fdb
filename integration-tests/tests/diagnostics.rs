use integration_tests::harness::{TestWorkspace, captured_events, init_test_tracing};
use logsieve_core::filter::Criteria;
use logsieve_core::parse::LineParser;
use logsieve_core::pipeline::{CollectedDiagnostics, Pipeline, Tee, TracingDiagnostics};
use pretty_assertions::assert_eq;

#[test]
fn rejected_lines_are_emitted_as_warn_events() {
    // Arrange
    init_test_tracing();
    let ws = TestWorkspace::new();
    let input = ws.write(
        "noisy.log",
        "2024-05-05 12:00:00 INFO UserID:7 ok\n\
         diagnostics-probe-7f3a not a log line\n\
         2024-13-01 12:00:00 INFO UserID:7 diagnostics-probe-7f3b\n",
    );

    let mut tracing_diag = TracingDiagnostics;
    let mut collected = CollectedDiagnostics::default();

    // Act
    let result = Pipeline::new(LineParser::default(), Criteria::default())
        .run_inputs(
            &input.to_string_lossy(),
            &mut Tee(&mut tracing_diag, &mut collected),
        )
        .unwrap();

    // Assert
    assert_eq!(result.rejected, 2);
    assert_eq!(collected.rejections.len(), 2);

    let events: Vec<_> = captured_events()
        .into_iter()
        .filter(|e| e.level == tracing::Level::WARN)
        .filter(|e| e.field("line").is_some_and(|l| l.contains("diagnostics-probe-7f3")))
        .collect();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].field("message"), Some("skipping rejected line"));
    assert_eq!(events[0].field("reason"), Some("malformed line"));
    assert_eq!(events[0].field("line_no"), Some("2"));
    assert_eq!(events[1].field("reason"), Some("invalid timestamp"));
    assert_eq!(events[1].field("line_no"), Some("3"));
}

#[test]
fn invalid_utf8_line_is_rejected_without_failing_the_run() {
    // Arrange
    let ws = TestWorkspace::new();
    let path = ws.path("binary.log");
    let mut bytes = b"2024-05-05 12:00:00 INFO UserID:1 fine\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    bytes.extend_from_slice(b"2024-05-05 12:00:01 INFO UserID:2 also fine\n");
    std::fs::write(&path, bytes).unwrap();

    // Act
    let (result, diagnostics) = ws.run(&path, Criteria::default());

    // Assert
    assert_eq!(result.records.len(), 2);
    assert_eq!(diagnostics.rejections.len(), 1);
    assert_eq!(diagnostics.rejections[0].line_no, 2);
}

#[test]
fn line_cap_stops_reading_and_marks_truncation() {
    // Arrange
    let ws = TestWorkspace::new();
    let input = ws.fixture("mixed.log");

    // Act
    let result = Pipeline::new(LineParser::default(), Criteria::default())
        .with_max_lines(Some(3))
        .run_inputs(&input.to_string_lossy(), &mut CollectedDiagnostics::default())
        .unwrap();

    // Assert
    assert_eq!(result.lines_read, 3);
    assert_eq!(result.records.len(), 3);
    assert!(result.truncated);
}
