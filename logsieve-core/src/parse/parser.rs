use crate::parse::RejectReason;
use crate::record::{ActorId, Level, Record, parse_timestamp};

pub const DEFAULT_ACTOR_PREFIX: &str = "UserID:";

/// Tokens allowed before the actor marker: date, time, level.
const MAX_LEADING_TOKENS: usize = 3;

/// Turns raw text lines into [`Record`]s.
///
/// Expected shape:
///
/// ```text
/// 2024-01-01 10:00:00 INFO UserID:42 free text message, spaces allowed
/// ^ timestamp         ^    ^ actor   ^ message (never split)
///                     level
/// ```
///
/// The actor marker anchors the split: the token right before it is the
/// level, everything before the level is the timestamp, and everything after
/// it is the message. Structural problems are reported before the timestamp
/// is looked at.
#[derive(Debug, Clone)]
pub struct LineParser {
    actor_prefix: String,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(DEFAULT_ACTOR_PREFIX)
    }
}

impl LineParser {
    pub fn new(actor_prefix: impl Into<String>) -> Self {
        Self {
            actor_prefix: actor_prefix.into(),
        }
    }

    pub fn actor_prefix(&self) -> &str {
        &self.actor_prefix
    }

    pub fn parse(&self, line: &str) -> Result<Record, RejectReason> {
        let line = line.trim();
        let fields = self.split(line).ok_or(RejectReason::MalformedLine)?;

        let level = Level::parse(fields.level).ok_or(RejectReason::MalformedLine)?;
        let timestamp =
            parse_timestamp(fields.timestamp).map_err(|_| RejectReason::InvalidTimestamp)?;

        Ok(Record::new(
            timestamp,
            level,
            ActorId::from(fields.actor),
            fields.message,
        ))
    }

    fn split<'a>(&self, line: &'a str) -> Option<RawFields<'a>> {
        // An empty prefix would match every token.
        if self.actor_prefix.is_empty() {
            return None;
        }

        let mut level: Option<(usize, &str)> = None;
        let mut leading = 0;

        for (start, token) in tokens(line) {
            if let Some(actor) = token.strip_prefix(self.actor_prefix.as_str()) {
                let (level_start, level) = level?;

                // Date, time and level at most; anything extra is structural.
                if leading > MAX_LEADING_TOKENS {
                    return None;
                }

                let timestamp = line[..level_start].trim_end();
                let message = line[start + token.len()..].trim();

                if actor.is_empty() || timestamp.is_empty() || message.is_empty() {
                    return None;
                }

                return Some(RawFields {
                    timestamp,
                    level,
                    actor,
                    message,
                });
            }
            level = Some((start, token));
            leading += 1;
        }

        None
    }
}

/// Parse with the default `UserID:` actor marker.
pub fn parse_line(line: &str) -> Result<Record, RejectReason> {
    LineParser::default().parse(line)
}

struct RawFields<'a> {
    timestamp: &'a str,
    level: &'a str,
    actor: &'a str,
    message: &'a str,
}

/// Whitespace-separated tokens with their byte offsets, produced lazily.
fn tokens(line: &str) -> Tokens<'_> {
    Tokens { line, pos: 0 }
}

struct Tokens<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.line[self.pos..];
        let start = self.pos + (rest.len() - rest.trim_start().len());
        if start == self.line.len() {
            return None;
        }

        let len = self.line[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.line.len() - start);
        self.pos = start + len;

        Some((start, &self.line[start..self.pos]))
    }
}
