use crate::filter::QueryError;
use crate::record::{Level, Record, parse_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::warn;

/// Optional level / time-range predicate.
///
/// Each constraint is its own field; setting the upper bound never depends on
/// the lower bound having been set, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub level: Option<Level>,
    /// Inclusive lower bound.
    pub since: Option<NaiveDateTime>,
    /// Inclusive upper bound.
    pub until: Option<NaiveDateTime>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_since(mut self, since: NaiveDateTime) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: NaiveDateTime) -> Self {
        self.until = Some(until);
        self
    }

    /// Build criteria from user-supplied text.
    ///
    /// Empty strings count as absent. A malformed bound fails the whole call,
    /// so no partially-constrained criteria ever escape.
    pub fn from_strs(
        level: Option<&str>,
        since: Option<&str>,
        until: Option<&str>,
    ) -> Result<Self, QueryError> {
        let level = non_empty(level)
            .map(|raw| {
                Level::parse(raw).ok_or_else(|| QueryError::InvalidLevel {
                    value: raw.to_owned(),
                })
            })
            .transpose()?;

        let since = parse_bound("start_time", since)?;
        let until = parse_bound("end_time", until)?;

        let criteria = Self {
            level,
            since,
            until,
        };

        if criteria.is_inverted() {
            warn!(
                since = ?criteria.since,
                until = ?criteria.until,
                "time range is inverted and will match nothing"
            );
        }

        Ok(criteria)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.level.is_none() && self.since.is_none() && self.until.is_none()
    }

    pub fn is_inverted(&self) -> bool {
        matches!((self.since, self.until), (Some(s), Some(u)) if s > u)
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.level_matches(record) && self.since_matches(record) && self.until_matches(record)
    }

    fn level_matches(&self, record: &Record) -> bool {
        self.level
            .as_ref()
            .is_none_or(|level| level.matches(record.level()))
    }

    fn since_matches(&self, record: &Record) -> bool {
        self.since.is_none_or(|since| record.timestamp() >= since)
    }

    fn until_matches(&self, record: &Record) -> bool {
        self.until.is_none_or(|until| record.timestamp() <= until)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bound(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDateTime>, QueryError> {
    non_empty(raw)
        .map(|raw| parse_timestamp(raw).map_err(|e| QueryError::invalid_bound(field, raw, e)))
        .transpose()
}
