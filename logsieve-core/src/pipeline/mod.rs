//! Batch Processing Pipeline
//!
//! Reads text lines, turns them into records, keeps the ones that match the
//! active criteria, and hands the kept batch to the summary and to sinks.
//!
//! The overall data processing architecture is:
//!
//! input lines
//! LineParser::parse ──(rejection)──▶ Diagnostics
//! Record
//! Criteria::matches
//! kept batch
//! summarize / RecordSink::write
//! RunResult
//!
//! Sinks only run after the whole input has been read, so a fatal input
//! error leaves every sink untouched. One bad line never fails a run.

mod diagnostics;
mod error;
mod input;
mod run;
mod run_id;

pub use diagnostics::*;
pub use error::*;
pub use input::*;
pub use run::*;
pub use run_id::*;
