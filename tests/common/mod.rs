//! Shared testing utilities for diagville CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `diagville` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("diagville").expect("Failed to locate diagville binary");
        cmd.current_dir(&self.work_dir).env_remove("OPENAI_API_KEY");
        cmd
    }

    /// Write a config file into the work directory and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("diagville.toml");
        fs::write(&path, content).expect("Failed to write test config");
        path
    }
}
