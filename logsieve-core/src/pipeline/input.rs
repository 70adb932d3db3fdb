use crate::pipeline::PipelineError;
use glob::glob;
use std::path::PathBuf;

/// Resolves an input argument into the files to read, in sorted order.
///
/// A plain path is returned as-is so that a missing file surfaces as an open
/// error naming that path. Patterns containing `*`, `?` or `[` are expanded
/// and must match at least one file.
pub fn discover_inputs(pattern: &str) -> Result<Vec<PathBuf>, PipelineError> {
    if !is_glob(pattern) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let entries = glob(pattern).map_err(|e| PipelineError::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        // An unreadable directory on the way is as fatal as an unreadable file.
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            PipelineError::OpenInput {
                path,
                source: e.into_error(),
            }
        })?;

        if path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(PipelineError::NoInput {
            pattern: pattern.to_string(),
        });
    }

    paths.sort();
    Ok(paths)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
