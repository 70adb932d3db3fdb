use crate::store::{JsonlStore, MemoryStore, RecordStore, StoreError};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

const MEMORY_SCHEME: &str = "memory:";
const JSONL_SCHEME: &str = "jsonl://";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum StoreLocation {
    Memory,
    Jsonl(PathBuf),
}

impl StoreLocation {
    pub fn open(&self) -> Box<dyn RecordStore> {
        match self {
            Self::Memory => Box::new(MemoryStore::new()),
            Self::Jsonl(path) => Box::new(JsonlStore::new(path.clone())),
        }
    }
}

impl FromStr for StoreLocation {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || StoreError::InvalidLocation {
            descriptor: s.to_owned(),
        };

        if s == MEMORY_SCHEME {
            return Ok(Self::Memory);
        }

        let path = s.strip_prefix(JSONL_SCHEME).unwrap_or(s);

        // Any other scheme is a store we cannot reach.
        if path.is_empty() || path.contains("://") {
            return Err(invalid());
        }

        Ok(Self::Jsonl(PathBuf::from(path)))
    }
}

impl Display for StoreLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str(MEMORY_SCHEME),
            Self::Jsonl(path) => write!(f, "{JSONL_SCHEME}{}", path.display()),
        }
    }
}
