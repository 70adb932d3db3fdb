//! Persistence for kept records and the read side used by queries.
//!
//! Stores are addressed by a connection descriptor:
//!
//! - `memory:` process-local, mostly for tests
//! - `jsonl://<path>` or a bare path: append-only JSON-lines documents

mod error;
mod jsonl;
mod location;
mod memory;

pub use error::*;
pub use jsonl::*;
pub use location::*;
pub use memory::*;

use crate::filter::Criteria;
use crate::record::Record;

pub trait RecordStore: Send + Sync {
    fn describe(&self) -> String;

    /// Stores each record as an independent document. Zero records is a no-op.
    fn insert_many(&self, records: &[Record]) -> Result<usize, StoreError>;

    /// Stored records matching `criteria`, in insertion order.
    fn find(&self, criteria: &Criteria) -> Result<Vec<Record>, StoreError>;
}
