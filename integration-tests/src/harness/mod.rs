pub mod tracing;
pub mod workspace;

pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
pub use workspace::TestWorkspace;
