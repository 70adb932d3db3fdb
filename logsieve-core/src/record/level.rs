use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Severity or category token of a record.
///
/// The vocabulary is open: any token made of ASCII alphanumerics or `_` is a
/// level. The token is kept exactly as received; comparisons and tallies go
/// through [`Level::canonical`], which is the ASCII-uppercased token.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(String);

impl Level {
    /// Returns `None` when the token is outside the lexical pattern.
    pub fn parse(token: &str) -> Option<Self> {
        Self::is_valid_token(token).then(|| Level(token.to_owned()))
    }

    pub fn is_valid_token(token: &str) -> bool {
        !token.is_empty()
            && token
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    }

    /// The token as it appeared in the input.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn canonical(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    /// Case-insensitive comparison against another level.
    pub fn matches(&self, other: &Level) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
