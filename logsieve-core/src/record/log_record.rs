use crate::record::{ActorId, Level};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One structured log entry.
///
/// All four fields are always present; a line either yields a whole record or
/// none. Records have no identity beyond their values, so duplicate lines give
/// equal records.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(with = "timestamp_text")]
    timestamp: NaiveDateTime,
    #[serde(rename = "log_level")]
    level: Level,
    #[serde(rename = "user_id")]
    actor_id: ActorId,
    message: String,
}

impl Record {
    pub fn new(
        timestamp: NaiveDateTime,
        level: Level,
        actor_id: ActorId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level,
            actor_id,
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn actor_id(&self) -> &ActorId {
        &self.actor_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Stored documents carry the timestamp in the canonical text format.
mod timestamp_text {
    use crate::record::{format_timestamp, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw).map_err(|e| D::Error::custom(format!("timestamp '{raw}': {e}")))
    }
}
