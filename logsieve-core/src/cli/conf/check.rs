use crate::conf::{ConfigError, config_file, load_config, validate_config};
use miette::Report;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path).and_then(|cfg| validate_config(&cfg)) {
        Ok(settings) => {
            println!(
                "{} Config loaded successfully ({})",
                "✔".green(),
                config_file(&path).display()
            );
            println!("{} input: {}", "✔".green(), settings.input);
            println!("{} actor marker: {}", "✔".green(), settings.actor_prefix);
            if !settings.criteria.is_unconstrained() {
                println!("{} filter: {:?}", "✔".green(), settings.criteria);
            }
            if let Some(csv) = &settings.csv {
                println!("{} csv export: {}", "✔".green(), csv.display());
            }
            if let Some(store) = &settings.store {
                println!("{} store: {store}", "✔".green());
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
        if let ConfigError::Validation { errors } = &err {
            for e in errors {
                eprintln!("  - {e}");
            }
        }
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::MissingInput => Some(
            "Tell logsieve what to read, either in the config file or with --logfile.\n\
             \n\
             Example:\n\
             \n\
             input {\n\
             \x20 path = \"logs/*.log\"\n\
             }",
        ),

        ConfigError::InvalidFilter { .. } => Some(
            "Filter times use the form YYYY-MM-DD HH:MM:SS, for example:\n\
             \n\
             filter {\n\
             \x20 start_time = \"2024-01-01 00:00:00\"\n\
             }",
        ),

        ConfigError::EmptyActorPrefix | ConfigError::ActorPrefixWhitespace { .. } => Some(
            "The actor marker is the text right before the actor id on each line,\n\
             e.g. \"UserID:\" in `... INFO UserID:42 message`.",
        ),

        ConfigError::InvalidStore { .. } => Some(
            "Supported store locations:\n\
             \n\
             \x20 memory:\n\
             \x20 jsonl://path/to/logs.jsonl\n\
             \x20 path/to/logs.jsonl",
        ),

        ConfigError::Validation { errors } => errors.iter().find_map(config_error_hint),

        _ => None,
    }
}
