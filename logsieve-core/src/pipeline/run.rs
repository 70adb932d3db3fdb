use crate::filter::Criteria;
use crate::parse::{LineParser, Rejection};
use crate::pipeline::{Diagnostics, PipelineError, RunId, discover_inputs};
use crate::record::Record;
use crate::sink::{RecordSink, SinkOutcome, SinkStatus};
use crate::summary::{Summary, summarize};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::{debug, error, info, info_span};

/// Outcome of one batch run.
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub run_id: RunId,
    pub lines_read: usize,
    pub rejected: usize,
    /// Kept records in input order.
    pub records: Vec<Record>,
    pub summary: Option<Summary>,
    pub sinks: Vec<SinkStatus>,
    /// Reading stopped at the line cap with input left over.
    pub truncated: bool,
}

impl RunResult {
    pub fn all_sinks_failed(&self) -> bool {
        !self.sinks.is_empty() && self.sinks.iter().all(SinkStatus::is_failed)
    }
}

pub struct Pipeline {
    parser: LineParser,
    criteria: Criteria,
    max_lines: Option<usize>,
    summarize: bool,
    sinks: Vec<Box<dyn RecordSink>>,
}

#[derive(Default)]
struct Batch {
    lines_read: usize,
    rejected: usize,
    records: Vec<Record>,
    truncated: bool,
}

impl Pipeline {
    pub fn new(parser: LineParser, criteria: Criteria) -> Self {
        Self {
            parser,
            criteria,
            max_lines: None,
            summarize: false,
            sinks: Vec::new(),
        }
    }

    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_summary(mut self, enabled: bool) -> Self {
        self.summarize = enabled;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn RecordSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Run over a single already-open reader.
    pub fn run<R: BufRead>(
        &mut self,
        reader: R,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<RunResult, PipelineError> {
        let run_id = RunId::default();
        let span = info_span!("pipeline", run_id = %run_id);
        let _enter = span.enter();

        let mut batch = Batch::default();
        self.ingest(reader, "<reader>", &mut batch, diagnostics)?;
        Ok(self.finalize(run_id, batch))
    }

    /// Run over every file an input pattern resolves to, as one batch.
    pub fn run_inputs(
        &mut self,
        pattern: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<RunResult, PipelineError> {
        let run_id = RunId::default();
        let span = info_span!("pipeline", run_id = %run_id);
        let _enter = span.enter();

        let paths = discover_inputs(pattern)?;
        let mut batch = Batch::default();

        for path in &paths {
            if batch.truncated {
                break;
            }

            let file = File::open(path).map_err(|e| PipelineError::OpenInput {
                path: path.clone(),
                source: e,
            })?;

            let label = path.display().to_string();
            let _input = info_span!("input", path = %label).entered();
            self.ingest(BufReader::new(file), &label, &mut batch, diagnostics)?;
        }

        Ok(self.finalize(run_id, batch))
    }

    fn ingest<R: BufRead>(
        &self,
        reader: R,
        label: &str,
        batch: &mut Batch,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<(), PipelineError> {
        for (idx, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|e| PipelineError::ReadInput {
                input: label.to_string(),
                source: e,
            })?;

            if self.max_lines.is_some_and(|cap| batch.lines_read >= cap) {
                batch.truncated = true;
                break;
            }
            batch.lines_read += 1;

            // Undecodable bytes are replaced and the line parsed like any other.
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches('\r');

            match self.parser.parse(line) {
                Ok(record) => {
                    if self.criteria.matches(&record) {
                        batch.records.push(record);
                    }
                }
                Err(reason) => {
                    batch.rejected += 1;
                    diagnostics.rejected(Rejection::new(reason, idx + 1, line));
                }
            }
        }

        Ok(())
    }

    fn finalize(&mut self, run_id: RunId, batch: Batch) -> RunResult {
        info!(
            lines_read = batch.lines_read,
            rejected = batch.rejected,
            kept = batch.records.len(),
            truncated = batch.truncated,
            "input exhausted"
        );

        if batch.records.is_empty() {
            info!("no logs available after applying filters");
        }

        let summary = if self.summarize {
            summarize(&batch.records)
        } else {
            None
        };

        let sinks = self
            .sinks
            .iter_mut()
            .map(|sink| deliver(sink.as_mut(), &batch.records))
            .collect();

        RunResult {
            run_id,
            lines_read: batch.lines_read,
            rejected: batch.rejected,
            records: batch.records,
            summary,
            sinks,
            truncated: batch.truncated,
        }
    }
}

fn deliver(sink: &mut dyn RecordSink, records: &[Record]) -> SinkStatus {
    let name = sink.name();

    match sink.write(records) {
        Ok(SinkOutcome::Written(n)) => {
            debug!(sink = %name, records = n, "sink done");
            SinkStatus::Written {
                sink: name,
                records: n,
            }
        }
        Ok(SinkOutcome::Skipped) => SinkStatus::Skipped { sink: name },
        Err(e) => {
            error!(sink = %name, error = %e, "sink failed");
            SinkStatus::Failed {
                sink: name,
                error: e.to_string(),
            }
        }
    }
}
