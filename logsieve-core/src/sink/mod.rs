//! Downstream consumers of a kept batch.
//!
//! Every sink runs independently: a failing sink is reported as a
//! [`SinkStatus::Failed`] entry and never stops or undoes the others.

mod csv_export;
mod error;
mod store_sink;

pub use csv_export::*;
pub use error::*;
pub use store_sink::*;

use crate::record::Record;
use serde::Serialize;

pub trait RecordSink {
    /// Short label used in run results and logs.
    fn name(&self) -> String;

    fn write(&mut self, records: &[Record]) -> Result<SinkOutcome, SinkError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOutcome {
    Written(usize),
    /// Nothing to do for an empty batch.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SinkStatus {
    Written { sink: String, records: usize },
    Skipped { sink: String },
    Failed { sink: String, error: String },
}

impl SinkStatus {
    pub fn sink(&self) -> &str {
        match self {
            Self::Written { sink, .. } | Self::Skipped { sink } | Self::Failed { sink, .. } => sink,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
