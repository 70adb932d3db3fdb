use serde::Serialize;
use thiserror::Error;

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("malformed line")]
    MalformedLine,

    #[error("invalid timestamp")]
    InvalidTimestamp,
}

/// A rejected line, as handed to the diagnostics channel.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Rejection {
    pub reason: RejectReason,
    /// 1-based position in the input, 0 when parsed outside a pipeline run.
    pub line_no: usize,
    pub line: String,
}

impl Rejection {
    pub fn new(reason: RejectReason, line_no: usize, line: impl Into<String>) -> Self {
        Self {
            reason,
            line_no,
            line: line.into(),
        }
    }
}
