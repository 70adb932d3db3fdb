use crate::conf::types::{LogsieveConfig, RunOverrides};
use crate::conf::{load_config, validate_config};
use crate::parse::Rejection;
use crate::pipeline::{CollectedDiagnostics, Pipeline, RunResult, Tee, TracingDiagnostics};
use crate::sink::{CsvSink, SinkStatus, StoreSink};
use crate::summary::render_summary;
use anyhow::{Context, Result, bail};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Path or glob pattern of the input log file(s)
    #[arg(long)]
    pub logfile: Option<String>,

    /// Path to save the CSV report
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Keep only this level (case-insensitive)
    #[arg(long)]
    pub level: Option<String>,

    /// Keep records at or after this time (YYYY-MM-DD HH:MM:SS)
    #[arg(long = "st-time", alias = "st_time")]
    pub st_time: Option<String>,

    /// Keep records at or before this time (YYYY-MM-DD HH:MM:SS)
    #[arg(long = "end-time", alias = "end_time")]
    pub end_time: Option<String>,

    /// Print a summary of the kept records
    #[arg(long)]
    pub summarize: bool,

    /// Store descriptor to persist kept records into (e.g. jsonl://logs.jsonl)
    #[arg(long)]
    pub db: Option<String>,

    /// Path to a logsieve.hcl file or the directory holding it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop reading after this many lines
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Print the run result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    fn overrides(&self) -> RunOverrides {
        RunOverrides {
            input: self.logfile.clone(),
            max_lines: self.max_lines,
            level: self.level.clone(),
            start_time: self.st_time.clone(),
            end_time: self.end_time.clone(),
            summarize: self.summarize,
            csv: self.output.clone(),
            store: self.db.clone(),
        }
    }
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    #[serde(flatten)]
    result: &'a RunResult,
    rejections: &'a [Rejection],
}

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => LogsieveConfig::default(),
    };
    cfg.apply_overrides(args.overrides());
    let settings = validate_config(&cfg)?;

    let mut pipeline = Pipeline::new(settings.parser(), settings.criteria.clone())
        .with_max_lines(settings.max_lines)
        .with_summary(settings.summarize);

    if let Some(csv) = &settings.csv {
        pipeline = pipeline.with_sink(Box::new(CsvSink::new(csv)));
    }
    if let Some(location) = &settings.store {
        pipeline = pipeline.with_sink(Box::new(StoreSink::new(location.open())));
    }

    let mut tracing_diag = TracingDiagnostics;
    let mut collected = CollectedDiagnostics::default();
    let result = pipeline
        .run_inputs(
            &settings.input,
            &mut Tee(&mut tracing_diag, &mut collected),
        )
        .with_context(|| format!("failed to process {}", settings.input))?;

    if args.json {
        let report = AnalyzeReport {
            result: &result,
            rejections: &collected.rejections,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_run(&result);
    }

    if result.all_sinks_failed() {
        bail!("every configured sink failed");
    }

    Ok(())
}

fn print_run(result: &RunResult) {
    println!(
        "{} {} records kept ({} lines read, {} rejected)",
        "✔".green(),
        result.records.len(),
        result.lines_read,
        result.rejected
    );

    if result.truncated {
        println!("{} stopped at the line cap, input was truncated", "!".yellow());
    }

    for status in &result.sinks {
        match status {
            SinkStatus::Written { sink, records } => {
                println!("{} {sink}: {records} records", "✔".green())
            }
            SinkStatus::Skipped { sink } => {
                println!("{} {sink}: nothing to write", "-".dimmed())
            }
            SinkStatus::Failed { sink, error } => {
                println!("{} {sink}: {error}", "✘".red().bold())
            }
        }
    }

    if let Some(summary) = &result.summary {
        println!();
        print!("{}", render_summary(Some(summary)));
    } else if result.records.is_empty() {
        println!("No logs available after applying filters.");
    }
}
