use logsieve_core::filter::Criteria;
use logsieve_core::parse::LineParser;
use logsieve_core::pipeline::{CollectedDiagnostics, Pipeline, RunResult};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory for one test, with helpers to stage logs and run.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Copy a file from `fixtures/` into the workspace.
    pub fn fixture(&self, name: &str) -> PathBuf {
        let src = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name);
        let dst = self.path(name);
        fs::copy(&src, &dst).expect("failed to copy fixture");
        dst
    }

    /// Run a default pipeline over `input` and collect diagnostics.
    pub fn run(&self, input: &Path, criteria: Criteria) -> (RunResult, CollectedDiagnostics) {
        let mut diagnostics = CollectedDiagnostics::default();
        let result = Pipeline::new(LineParser::default(), criteria)
            .with_summary(true)
            .run_inputs(&input.to_string_lossy(), &mut diagnostics)
            .expect("pipeline run failed");
        (result, diagnostics)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
