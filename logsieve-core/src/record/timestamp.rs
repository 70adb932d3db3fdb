use chrono::NaiveDateTime;

/// Textual timestamp format shared by log lines, query bounds and exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rendering used by the query surface.
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const TIMESTAMP_LEN: usize = 19;

/// Parse a timestamp in the fixed `YYYY-MM-DD HH:MM:SS` format.
///
/// The shape is checked byte by byte before chrono validates the calendar
/// values, so unpadded fields such as `2024-1-1 1:0:0` are rejected.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimestampError> {
    if !has_canonical_shape(s) {
        return Err(TimestampError::Shape);
    }

    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(TimestampError::Calendar)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_iso_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(ISO_TIMESTAMP_FORMAT).to_string()
}

fn has_canonical_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != TIMESTAMP_LEN {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("expected the form YYYY-MM-DD HH:MM:SS")]
    Shape,

    #[error("{0}")]
    Calendar(#[source] chrono::ParseError),
}
