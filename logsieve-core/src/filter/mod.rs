mod criteria;
mod error;

pub use criteria::*;
pub use error::*;

use crate::record::Record;

/// Whether `record` satisfies every constraint present in `criteria`.
pub fn keep(record: &Record, criteria: &Criteria) -> bool {
    criteria.matches(record)
}

/// Order-preserving filter over a batch.
pub fn apply<'a, I>(records: I, criteria: &'a Criteria) -> impl Iterator<Item = &'a Record>
where
    I: IntoIterator<Item = &'a Record>,
    I::IntoIter: 'a,
{
    records.into_iter().filter(move |r| keep(r, criteria))
}
