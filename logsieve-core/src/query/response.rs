use crate::record::{Record, format_iso_timestamp};
use serde::Serialize;

/// One record as rendered to query clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    pub timestamp: String,
    pub log_level: String,
    pub user_id: String,
    pub message: String,
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        Self {
            timestamp: format_iso_timestamp(&record.timestamp()),
            log_level: record.level().as_str().to_owned(),
            user_id: record.actor_id().as_str().to_owned(),
            message: record.message().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResponse {
    pub logs: Vec<RecordView>,
}

impl QueryResponse {
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            logs: records.iter().map(RecordView::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
