use clap::{Parser, Subcommand};
use logsieve_core::cli;
use logsieve_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "logsieve",
    version,
    about = "logsieve: parse, filter and summarize text logs"
)]
struct Cli {
    /// Emit diagnostics as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a log file, filter it, and hand the result to the configured sinks
    Analyze(cli::analyze::AnalyzeArgs),

    /// Query persisted records
    Query(cli::query::QueryArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        default_log_format()
    };
    init_logging(format);

    let result = match cli.command {
        Command::Analyze(args) => cli::analyze::analyze(args),
        Command::Query(args) => cli::query::query(args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
