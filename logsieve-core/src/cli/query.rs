use crate::query::{QueryParams, execute};
use crate::store::StoreLocation;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Store descriptor to read from (e.g. jsonl://logs.jsonl)
    #[arg(long)]
    pub db: String,

    /// Only records with this level (case-insensitive)
    #[arg(long = "log-level", alias = "log_level")]
    pub log_level: Option<String>,

    /// Inclusive lower bound (YYYY-MM-DD HH:MM:SS)
    #[arg(long = "start-time", alias = "start_time")]
    pub start_time: Option<String>,

    /// Inclusive upper bound (YYYY-MM-DD HH:MM:SS)
    #[arg(long = "end-time", alias = "end_time")]
    pub end_time: Option<String>,
}

pub fn query(args: QueryArgs) -> Result<()> {
    let location: StoreLocation = args.db.parse()?;
    let store = location.open();

    let params = QueryParams {
        log_level: args.log_level,
        start_time: args.start_time,
        end_time: args.end_time,
    };

    let response = execute(store.as_ref(), &params)?;
    println!("{}", response.to_json()?);
    Ok(())
}
