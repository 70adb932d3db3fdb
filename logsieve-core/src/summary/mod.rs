//! Batch summarization
//!
//! Reduces a batch of records into a [`Summary`]:
//!
//! - the time span (earliest and latest timestamp),
//! - how many records carry each level, for every level actually seen,
//! - the most active actor.
//!
//! The data flow is:
//!
//! records
//! SummaryAggregator::push
//! SummaryAggregator::finish
//! Summary
//! render_summary
//!
//! An empty batch has no summary at all (`None`), which callers must keep
//! apart from a summary whose counts happen to be small.

mod aggregator;
mod render;
mod types;

pub use aggregator::*;
pub use render::*;
pub use types::*;
