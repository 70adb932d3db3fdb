use crate::filter::Criteria;
use crate::record::Record;
use crate::store::{RecordStore, StoreError};
use std::sync::{Arc, Mutex};

/// Process-local store. Clones share the same documents.
#[derive(Clone, Default)]
pub struct MemoryStore {
    docs: Arc<Mutex<Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn describe(&self) -> String {
        "memory:".to_string()
    }

    fn insert_many(&self, records: &[Record]) -> Result<usize, StoreError> {
        let mut docs = self.docs.lock().unwrap_or_else(|e| e.into_inner());
        docs.extend_from_slice(records);
        Ok(records.len())
    }

    fn find(&self, criteria: &Criteria) -> Result<Vec<Record>, StoreError> {
        let docs = self.docs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(docs.iter().filter(|r| criteria.matches(r)).cloned().collect())
    }
}
