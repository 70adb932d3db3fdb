use crate::record::{Record, format_timestamp};
use crate::sink::{RecordSink, SinkError, SinkOutcome};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADER: [&str; 4] = ["timestamp", "log_level", "user_id", "message"];

/// Tabular export: header row, then one row per record.
///
/// The destination directory must already exist.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for CsvSink {
    fn name(&self) -> String {
        format!("csv:{}", self.path.display())
    }

    fn write(&mut self, records: &[Record]) -> Result<SinkOutcome, SinkError> {
        if records.is_empty() {
            info!(path = %self.path.display(), "no logs to write to CSV");
            return Ok(SinkOutcome::Skipped);
        }

        let mut wtr =
            csv::Writer::from_path(&self.path).map_err(|e| SinkError::csv(&self.path, e))?;

        wtr.write_record(CSV_HEADER)
            .map_err(|e| SinkError::csv(&self.path, e))?;

        for record in records {
            wtr.write_record([
                format_timestamp(&record.timestamp()).as_str(),
                record.level().as_str(),
                record.actor_id().as_str(),
                record.message(),
            ])
            .map_err(|e| SinkError::csv(&self.path, e))?;
        }

        wtr.flush().map_err(|e| SinkError::Flush {
            path: self.path.clone(),
            source: e,
        })?;

        info!(path = %self.path.display(), rows = records.len(), "CSV report saved");
        Ok(SinkOutcome::Written(records.len()))
    }
}
