mod actor;
mod level;
mod log_record;
mod timestamp;

pub use actor::*;
pub use level::*;
pub use log_record::*;
pub use timestamp::*;
