use crate::conf::ConfigError;
use crate::conf::types::LogsieveConfig;
use crate::filter::Criteria;
use crate::parse::LineParser;
use crate::store::StoreLocation;
use serde::Serialize;
use std::path::PathBuf;

/// Everything a run needs, checked and typed.
#[derive(Debug, Clone, Serialize)]
pub struct RunSettings {
    pub input: String,
    pub max_lines: Option<usize>,
    pub actor_prefix: String,
    pub criteria: Criteria,
    pub summarize: bool,
    pub csv: Option<PathBuf>,
    pub store: Option<StoreLocation>,
}

impl RunSettings {
    pub fn parser(&self) -> LineParser {
        LineParser::new(self.actor_prefix.clone())
    }
}

#[derive(Default)]
struct ValidationCtx {
    errors: Vec<ConfigError>,
}

impl ValidationCtx {
    fn push(&mut self, err: ConfigError) {
        self.errors.push(err);
    }

    fn into_result<T>(mut self, value: T) -> Result<T, ConfigError> {
        match self.errors.len() {
            0 => Ok(value),
            1 => Err(self.errors.remove(0)),
            _ => Err(ConfigError::Validation {
                errors: self.errors,
            }),
        }
    }
}

/// Check every field and report all problems at once.
///
/// A single problem is returned as-is; several are wrapped in
/// [`ConfigError::Validation`].
pub fn validate_config(cfg: &LogsieveConfig) -> Result<RunSettings, ConfigError> {
    let mut ctx = ValidationCtx::default();

    let input = cfg.input.path.clone().filter(|p| !p.trim().is_empty());
    if input.is_none() {
        ctx.push(ConfigError::MissingInput);
    }

    if cfg.input.max_lines == Some(0) {
        ctx.push(ConfigError::ZeroLineCap);
    }

    let prefix = &cfg.parser.actor_prefix;
    if prefix.is_empty() {
        ctx.push(ConfigError::EmptyActorPrefix);
    } else if prefix.chars().any(char::is_whitespace) {
        ctx.push(ConfigError::ActorPrefixWhitespace {
            prefix: prefix.clone(),
        });
    }

    let criteria = Criteria::from_strs(
        cfg.filter.level.as_deref(),
        cfg.filter.start_time.as_deref(),
        cfg.filter.end_time.as_deref(),
    )
    .map_err(|source| ctx.push(ConfigError::InvalidFilter { source }))
    .unwrap_or_default();

    let store = cfg.store.location.as_deref().and_then(|descriptor| {
        descriptor
            .parse::<StoreLocation>()
            .map_err(|_| {
                ctx.push(ConfigError::InvalidStore {
                    descriptor: descriptor.to_owned(),
                })
            })
            .ok()
    });

    ctx.into_result(RunSettings {
        input: input.unwrap_or_default(),
        max_lines: cfg.input.max_lines,
        actor_prefix: prefix.clone(),
        criteria,
        summarize: cfg.summary.enabled,
        csv: cfg.export.csv.clone(),
        store,
    })
}
