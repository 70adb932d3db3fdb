use crate::conf::{load_config, validate_config};
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

pub fn dump(
    path: PathBuf,
    json: bool,
    yaml: bool,
    repr: RepresentationFormat,
) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;

    match repr {
        RepresentationFormat::File => emit(&cfg, json, yaml),
        RepresentationFormat::Resolved => emit(&validate_config(&cfg)?, json, yaml),
    }
}

fn emit<T: Serialize>(value: &T, json: bool, yaml: bool) -> anyhow::Result<()> {
    if yaml && !json {
        dump_yaml(value)
    } else {
        dump_json(value)
    }
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}

#[derive(Clone, Debug)]
pub enum RepresentationFormat {
    File,
    Resolved,
}

impl FromStr for RepresentationFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "resolved" => Ok(Self::Resolved),
            _ => Err(anyhow::anyhow!("invalid representation: {}", s)),
        }
    }
}
