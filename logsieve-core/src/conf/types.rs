use crate::parse::DEFAULT_ACTOR_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of `logsieve.hcl`. Every block is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogsieveConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// File path or glob pattern.
    pub path: Option<String>,

    /// Stop reading after this many lines.
    pub max_lines: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    #[serde(default = "default_actor_prefix")]
    pub actor_prefix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            actor_prefix: default_actor_prefix(),
        }
    }
}

fn default_actor_prefix() -> String {
    DEFAULT_ACTOR_PREFIX.to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    pub level: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryConfig {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Connection descriptor, e.g. `jsonl://logs.jsonl`.
    pub location: Option<String>,
}

/// Values given on the command line. Each one replaces its file counterpart.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub input: Option<String>,
    pub max_lines: Option<usize>,
    pub level: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub summarize: bool,
    pub csv: Option<PathBuf>,
    pub store: Option<String>,
}

impl LogsieveConfig {
    pub fn apply_overrides(&mut self, o: RunOverrides) {
        if o.input.is_some() {
            self.input.path = o.input;
        }
        if o.max_lines.is_some() {
            self.input.max_lines = o.max_lines;
        }
        if o.level.is_some() {
            self.filter.level = o.level;
        }
        if o.start_time.is_some() {
            self.filter.start_time = o.start_time;
        }
        if o.end_time.is_some() {
            self.filter.end_time = o.end_time;
        }
        if o.summarize {
            self.summary.enabled = true;
        }
        if o.csv.is_some() {
            self.export.csv = o.csv;
        }
        if o.store.is_some() {
            self.store.location = o.store;
        }
    }
}
