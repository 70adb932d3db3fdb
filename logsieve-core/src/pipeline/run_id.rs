use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifies one pipeline run in logs and results.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RunId(pub String);

impl Default for RunId {
    fn default() -> Self {
        RunId(Uuid::new_v4().to_string())
    }
}

impl Display for RunId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
