use crate::conf::types::LogsieveConfig;
use crate::conf::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "logsieve.hcl";

/// Resolve a config argument: a directory means `<dir>/logsieve.hcl`.
pub fn config_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Read and parse a config file without validating it.
pub fn load_config(path: &Path) -> Result<LogsieveConfig, ConfigError> {
    let file = config_file(path);

    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let raw = fs::read_to_string(&file).map_err(|e| ConfigError::read_file(&file, e))?;
    hcl::from_str(&raw).map_err(|e| ConfigError::parse(&file, e))
}
