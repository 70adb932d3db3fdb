use crate::parse::{LineParser, RejectReason, parse_line};
use crate::record::parse_timestamp;
use pretty_assertions::assert_eq;

#[test]
fn parses_well_formed_line() {
    // Act
    let record = parse_line("2024-01-01 10:00:00 INFO UserID:1 login success").unwrap();

    // Assert
    assert_eq!(
        record.timestamp(),
        parse_timestamp("2024-01-01 10:00:00").unwrap()
    );
    assert_eq!(record.level().as_str(), "INFO");
    assert_eq!(record.actor_id().as_str(), "1");
    assert_eq!(record.message(), "login success");
}

#[test]
fn message_keeps_inner_spacing_and_markers() {
    let record =
        parse_line("2024-01-01 10:00:00 WARN UserID:7 retry  in 5s: UserID:8 still waiting")
            .unwrap();

    assert_eq!(record.actor_id().as_str(), "7");
    assert_eq!(record.message(), "retry  in 5s: UserID:8 still waiting");
}

#[test]
fn reparsing_is_deterministic() {
    let line = "2024-03-05 08:09:10 DEBUG UserID:abc-9 cache warmed";

    assert_eq!(parse_line(line).unwrap(), parse_line(line).unwrap());
}

#[test]
fn preserves_level_case() {
    let record = parse_line("2024-01-01 10:00:00 error UserID:3 boom").unwrap();

    assert_eq!(record.level().as_str(), "error");
    assert_eq!(record.level().canonical(), "ERROR");
}

#[test]
fn surrounding_whitespace_and_carriage_return_are_trimmed() {
    let record = parse_line("  2024-01-01 10:00:00 INFO UserID:1 done \r").unwrap();

    assert_eq!(record.message(), "done");
}

#[test]
fn structural_mismatches_are_malformed() {
    let lines = [
        "",
        "malformed line with no marker",
        "2024-01-01 10:00:00 INFO 1 missing marker",
        "2024-01-01 10:00:00 INFO UserID:1",
        "2024-01-01 10:00:00 INFO UserID:1    ",
        "2024-01-01 10:00:00 INFO UserID: empty actor",
        "UserID:1 marker first",
        "INFO UserID:1 no timestamp",
        "2024-01-01 10:00:00 IN-FO UserID:1 bad level token",
        "2024-01-01 10:00:00 INFO extra UserID:1 stray token before marker",
        "2024-01-01 10:00:00 INFO WARN UserID:1 two level tokens",
        "2024-01-01 10:00:00 +0000 INFO UserID:1 zone suffix",
    ];

    for line in lines {
        assert_eq!(
            parse_line(line).unwrap_err(),
            RejectReason::MalformedLine,
            "{line:?}"
        );
    }
}

#[test]
fn bad_first_token_is_invalid_timestamp() {
    let lines = [
        "2024-13-45 10:00:00 INFO UserID:1 bad month",
        "2024-01-01 25:00:00 INFO UserID:1 bad hour",
        "yesterday INFO UserID:1 words",
        "2024-01-01T10:00:00 INFO UserID:1 iso form",
        "2024-01-01 INFO UserID:1 date only",
    ];

    for line in lines {
        assert_eq!(
            parse_line(line).unwrap_err(),
            RejectReason::InvalidTimestamp,
            "{line:?}"
        );
    }
}

#[test]
fn custom_actor_prefix() {
    let parser = LineParser::new("uid=");

    let record = parser
        .parse("2024-01-01 10:00:00 INFO uid=55 custom marker")
        .unwrap();
    assert_eq!(record.actor_id().as_str(), "55");

    assert_eq!(
        parser
            .parse("2024-01-01 10:00:00 INFO UserID:55 default marker")
            .unwrap_err(),
        RejectReason::MalformedLine
    );
}

#[test]
fn empty_prefix_never_matches() {
    let parser = LineParser::new("");

    assert_eq!(
        parser
            .parse("2024-01-01 10:00:00 INFO UserID:1 anything")
            .unwrap_err(),
        RejectReason::MalformedLine
    );
}

#[test]
fn long_message_is_kept_whole() {
    let message = "word ".repeat(10_000);
    let line = format!("2024-01-01 10:00:00 INFO UserID:1 {message}");

    let record = parse_line(&line).unwrap();

    assert_eq!(record.message(), message.trim_end());
}
