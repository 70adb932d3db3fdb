pub mod cli;
pub mod conf;
pub mod filter;
pub mod logging;
pub mod parse;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod sink;
pub mod store;
pub mod summary;
