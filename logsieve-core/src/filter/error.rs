use crate::record::TimestampError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid {field} '{value}': {source} (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidBound {
        field: &'static str,
        value: String,
        #[source]
        source: TimestampError,
    },

    #[error("invalid level '{value}': levels are letters, digits or '_'")]
    InvalidLevel { value: String },
}

impl QueryError {
    pub fn invalid_bound(field: &'static str, value: &str, source: TimestampError) -> Self {
        Self::InvalidBound {
            field,
            value: value.to_owned(),
            source,
        }
    }
}
