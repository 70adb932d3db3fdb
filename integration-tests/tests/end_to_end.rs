use integration_tests::harness::TestWorkspace;
use logsieve_core::filter::Criteria;
use logsieve_core::parse::RejectReason;
use logsieve_core::record::{Level, parse_timestamp};
use logsieve_core::summary::render_summary;
use pretty_assertions::assert_eq;

#[test]
fn error_filter_keeps_only_the_error_record() {
    // Arrange
    let ws = TestWorkspace::new();
    let input = ws.fixture("sample.log");
    let criteria = Criteria::new().with_level(Level::parse("ERROR").unwrap());

    // Act
    let (result, diagnostics) = ws.run(&input, criteria);

    // Assert
    assert_eq!(result.lines_read, 3);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].actor_id().as_str(), "2");
    assert_eq!(result.records[0].message(), "disk failure");

    assert_eq!(diagnostics.rejections.len(), 1);
    assert_eq!(diagnostics.rejections[0].reason, RejectReason::MalformedLine);
    assert_eq!(diagnostics.rejections[0].line_no, 2);
}

#[test]
fn unfiltered_run_summarizes_every_kept_record() {
    // Arrange
    let ws = TestWorkspace::new();
    let input = ws.fixture("sample.log");

    // Act
    let (result, _) = ws.run(&input, Criteria::default());

    // Assert
    let summary = result.summary.expect("summary for non-empty batch");
    assert_eq!(summary.total, 2);
    assert_eq!(summary.span.start, parse_timestamp("2024-01-01 10:00:00").unwrap());
    assert_eq!(summary.span.end, parse_timestamp("2024-01-01 11:00:00").unwrap());
    assert_eq!(summary.level_counts.get("INFO"), 1);
    assert_eq!(summary.level_counts.get("ERROR"), 1);
    assert_eq!(summary.most_active_actor.actor_id.as_str(), "1");
}

#[test]
fn mixed_input_tallies_levels_case_insensitively() {
    // Arrange
    let ws = TestWorkspace::new();
    let input = ws.fixture("mixed.log");

    // Act
    let (result, diagnostics) = ws.run(&input, Criteria::default());

    // Assert
    assert_eq!(result.lines_read, 10);
    assert_eq!(result.records.len(), 8);

    let reasons: Vec<_> = diagnostics.rejections.iter().map(|r| (r.line_no, r.reason)).collect();
    assert_eq!(
        reasons,
        vec![
            (6, RejectReason::InvalidTimestamp),
            (8, RejectReason::MalformedLine),
        ]
    );

    let summary = result.summary.unwrap();
    let levels: Vec<_> = summary.level_counts.iter().collect();
    assert_eq!(
        levels,
        vec![("INFO", 3), ("DEBUG", 1), ("WARN", 2), ("ERROR", 1), ("AUDIT", 1)]
    );
    assert_eq!(summary.actor_count, 3);
}

#[test]
fn most_active_tie_goes_to_first_seen_actor() {
    // Arrange
    let ws = TestWorkspace::new();
    let input = ws.fixture("mixed.log");

    // Act
    let (result, _) = ws.run(&input, Criteria::default());

    // Assert
    let most_active = result.summary.unwrap().most_active_actor;
    assert_eq!(most_active.actor_id.as_str(), "101");
    assert_eq!(most_active.count, 3);
}

#[test]
fn actor_marker_inside_message_does_not_move_the_split() {
    // Arrange
    let ws = TestWorkspace::new();
    let input = ws.fixture("mixed.log");
    let criteria = Criteria::from_strs(None, Some("2024-03-01 08:06:45"), Some("2024-03-01 08:06:45"))
        .unwrap();

    // Act
    let (result, _) = ws.run(&input, criteria);

    // Assert
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].actor_id().as_str(), "202");
    assert_eq!(
        result.records[0].message(),
        "retrying request UserID:999 mentioned in message"
    );
}

#[test]
fn time_window_is_inclusive_on_both_ends() {
    // Arrange
    let ws = TestWorkspace::new();
    let input = ws.fixture("mixed.log");
    let criteria = Criteria::from_strs(None, Some("2024-03-01 08:01:10"), Some("2024-03-01 08:03:30"))
        .unwrap();

    // Act
    let (result, _) = ws.run(&input, criteria);

    // Assert
    let actors: Vec<_> = result.records.iter().map(|r| r.actor_id().as_str()).collect();
    assert_eq!(actors, vec!["202", "303", "202"]);
}

#[test]
fn filter_that_matches_nothing_reports_no_summary() {
    // Arrange
    let ws = TestWorkspace::new();
    let input = ws.fixture("sample.log");
    let criteria = Criteria::from_strs(Some("FATAL"), None, None).unwrap();

    // Act
    let (result, _) = ws.run(&input, criteria);

    // Assert
    assert!(result.records.is_empty());
    assert!(result.summary.is_none());
    assert_eq!(
        render_summary(result.summary.as_ref()).trim_end(),
        "No logs available for summary."
    );
}

#[test]
fn glob_reads_matching_files_as_one_batch_in_name_order() {
    // Arrange
    let ws = TestWorkspace::new();
    ws.write("b.log", "2024-01-02 09:00:00 INFO UserID:b second file\n");
    ws.write("a.log", "2024-01-01 09:00:00 INFO UserID:a first file\n");
    ws.write("notes.txt", "2024-01-03 09:00:00 INFO UserID:c not a log\n");
    let pattern = ws.root().join("*.log");

    // Act
    let (result, _) = ws.run(&pattern, Criteria::default());

    // Assert
    let actors: Vec<_> = result.records.iter().map(|r| r.actor_id().as_str()).collect();
    assert_eq!(actors, vec!["a", "b"]);
    assert_eq!(result.summary.unwrap().total, 2);
}
