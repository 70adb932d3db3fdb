//! Read side over persisted records.
//!
//! Parameters arrive as text (from an HTTP route, a CLI, a UI form), are
//! validated into [`Criteria`] up front, and only then run against a
//! [`RecordStore`]. A malformed bound is a client error and no lookup happens.

mod response;

pub use response::*;

use crate::filter::{Criteria, QueryError};
use crate::store::{RecordStore, StoreError};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Raw query parameters, named as the external route exposes them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub log_level: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl QueryParams {
    pub fn to_criteria(&self) -> Result<Criteria, QueryError> {
        Criteria::from_strs(
            self.log_level.as_deref(),
            self.start_time.as_deref(),
            self.end_time.as_deref(),
        )
    }
}

#[derive(Debug, Error)]
pub enum QueryFailure {
    /// The caller sent something unusable.
    #[error(transparent)]
    Client(#[from] QueryError),

    /// The store could not answer.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn execute(store: &dyn RecordStore, params: &QueryParams) -> Result<QueryResponse, QueryFailure> {
    let criteria = params.to_criteria()?;
    debug!(?criteria, store = %store.describe(), "running query");

    let records = store.find(&criteria)?;
    Ok(QueryResponse::from_records(&records))
}
