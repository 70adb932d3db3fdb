use crate::filter::Criteria;
use crate::record::Record;
use crate::store::{RecordStore, StoreError};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only document file, one JSON object per line.
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonlStore {
    fn describe(&self) -> String {
        format!("jsonl://{}", self.path.display())
    }

    fn insert_many(&self, records: &[Record]) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;

        let mut out = BufWriter::new(file);
        for record in records {
            let doc = serde_json::to_string(record).map_err(StoreError::Encode)?;
            writeln!(out, "{doc}").map_err(|e| StoreError::io(&self.path, e))?;
        }

        let file = out
            .into_inner()
            .map_err(|e| StoreError::io(&self.path, e.into_error()))?;
        file.sync_all().map_err(|e| StoreError::io(&self.path, e))?;

        Ok(records.len())
    }

    fn find(&self, criteria: &Criteria) -> Result<Vec<Record>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            // Nothing has been persisted yet.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let mut found = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| StoreError::io(&self.path, e))?;
            if line.trim().is_empty() {
                continue;
            }

            let record: Record =
                serde_json::from_str(&line).map_err(|e| StoreError::Decode {
                    path: self.path.clone(),
                    line: idx + 1,
                    source: e,
                })?;

            if criteria.matches(&record) {
                found.push(record);
            }
        }

        Ok(found)
    }
}
