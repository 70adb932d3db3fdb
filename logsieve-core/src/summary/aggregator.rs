use crate::record::{ActorId, Record};
use crate::summary::{ActorActivity, LevelCounts, Summary, TimeSpan};
use std::collections::HashMap;

struct ActorTally {
    count: u64,
    first_seen: usize,
}

/// Single-pass reducer behind [`summarize`].
///
/// Memory is proportional to distinct levels plus distinct actors.
#[derive(Default)]
pub struct SummaryAggregator {
    total: u64,
    span: Option<TimeSpan>,
    levels: LevelCounts,
    actors: HashMap<ActorId, ActorTally>,
}

impl SummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &Record) {
        let ts = record.timestamp();
        self.span = Some(match self.span {
            None => TimeSpan { start: ts, end: ts },
            Some(span) => TimeSpan {
                start: span.start.min(ts),
                end: span.end.max(ts),
            },
        });

        self.levels.increment(record.level().canonical());

        let next_index = self.actors.len();
        self.actors
            .entry(record.actor_id().clone())
            .or_insert(ActorTally {
                count: 0,
                first_seen: next_index,
            })
            .count += 1;

        self.total += 1;
    }

    /// `None` when nothing was pushed.
    pub fn finish(self) -> Option<Summary> {
        let span = self.span?;
        let actor_count = self.actors.len();

        // Highest count wins; among equals, the actor seen first in the input.
        let (actor_id, tally) = self
            .actors
            .into_iter()
            .min_by_key(|(_, t)| (std::cmp::Reverse(t.count), t.first_seen))?;

        Some(Summary {
            total: self.total,
            span,
            level_counts: self.levels,
            most_active_actor: ActorActivity {
                actor_id,
                count: tally.count,
            },
            actor_count,
        })
    }
}

pub fn summarize<'a, I>(records: I) -> Option<Summary>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut agg = SummaryAggregator::new();
    for record in records {
        agg.push(record);
    }
    agg.finish()
}
