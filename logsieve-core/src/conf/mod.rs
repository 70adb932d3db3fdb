mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;
mod validation;

pub use error::*;
pub use loader::*;
pub use types::LogsieveConfig;
pub use validation::*;
