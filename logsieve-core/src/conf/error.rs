use crate::filter::QueryError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Top-level
    //-------------------------------------------------------------------------
    #[error("configuration validation failed ({} errors)", .errors.len())]
    Validation {
        #[related]
        errors: Vec<ConfigError>,
    },

    //-------------------------------------------------------------------------
    // Input
    //-------------------------------------------------------------------------
    #[error("no input given")]
    MissingInput,

    #[error("input.max_lines must be greater than zero")]
    ZeroLineCap,

    //-------------------------------------------------------------------------
    // Parser
    //-------------------------------------------------------------------------
    #[error("parser.actor_prefix must not be empty")]
    EmptyActorPrefix,

    #[error("parser.actor_prefix '{prefix}' must not contain whitespace")]
    ActorPrefixWhitespace { prefix: String },

    //-------------------------------------------------------------------------
    // Filter
    //-------------------------------------------------------------------------
    #[error("invalid filter: {source}")]
    InvalidFilter {
        #[source]
        source: QueryError,
    },

    //-------------------------------------------------------------------------
    // Sinks
    //-------------------------------------------------------------------------
    #[error("invalid store location '{descriptor}'")]
    InvalidStore { descriptor: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
