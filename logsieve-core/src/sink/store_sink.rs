use crate::record::Record;
use crate::sink::{RecordSink, SinkError, SinkOutcome};
use crate::store::RecordStore;
use tracing::info;

/// Persists the batch into a [`RecordStore`], one document per record.
pub struct StoreSink {
    store: Box<dyn RecordStore>,
}

impl StoreSink {
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self { store }
    }
}

impl RecordSink for StoreSink {
    fn name(&self) -> String {
        format!("store:{}", self.store.describe())
    }

    fn write(&mut self, records: &[Record]) -> Result<SinkOutcome, SinkError> {
        if records.is_empty() {
            info!(store = %self.store.describe(), "no logs to insert");
            return Ok(SinkOutcome::Skipped);
        }

        let inserted = self.store.insert_many(records)?;
        info!(store = %self.store.describe(), inserted, "logs inserted");
        Ok(SinkOutcome::Written(inserted))
    }
}
