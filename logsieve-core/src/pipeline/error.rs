use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run before any sink is touched.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no input file matches '{pattern}'")]
    NoInput { pattern: String },

    #[error("failed to open input {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input {input}: {source}")]
    ReadInput {
        input: String,
        #[source]
        source: std::io::Error,
    },
}
