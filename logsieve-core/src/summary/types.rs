use crate::record::{ActorId, format_timestamp};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    #[serde(serialize_with = "canonical_timestamp")]
    pub start: NaiveDateTime,
    #[serde(serialize_with = "canonical_timestamp")]
    pub end: NaiveDateTime,
}

/// Tally of canonical level tokens in first-observed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    entries: Vec<(String, u64)>,
    /// Canonical level -> position in `entries`.
    index: HashMap<String, usize>,
}

impl LevelCounts {
    pub(crate) fn increment(&mut self, canonical: String) {
        match self.index.get(&canonical) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(canonical.clone(), self.entries.len());
                self.entries.push((canonical, 1));
            }
        }
    }

    /// Count for a level token, matched case-insensitively.
    pub fn get(&self, level: &str) -> u64 {
        self.index
            .get(&level.to_ascii_uppercase())
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LevelCounts {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_map(self.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorActivity {
    pub actor_id: ActorId,
    pub count: u64,
}

/// Aggregate statistics over a non-empty batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: u64,
    pub span: TimeSpan,
    pub level_counts: LevelCounts,
    pub most_active_actor: ActorActivity,
    pub actor_count: usize,
}

fn canonical_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_timestamp(ts))
}
