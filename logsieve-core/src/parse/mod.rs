mod error;
mod parser;
#[cfg(test)]
mod tests;

pub use error::*;
pub use parser::*;
