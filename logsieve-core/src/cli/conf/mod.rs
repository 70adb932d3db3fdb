mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file or its directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Plain error output (no diagnostics rendering)
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print configuration
    Dump {
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,

        /// Which representation to print: `file` or `resolved`
        #[arg(long, default_value = "file")]
        repr: RepresentationFormat,
    },

    /// Write a starter logsieve.hcl
    Init {
        /// Directory to create the config in
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump {
            path,
            json,
            yaml,
            repr,
        } => dump(path, json, yaml, repr),
        ConfigCmd::Init { path } => init(path),
    }
}
