//! Common test utilities for docs-authoring integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp directory");
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command for the real binary, run from and scoped to this workspace
    pub fn docs_cmd(&self) -> Command {
        let mut cmd = docs_cmd();
        cmd.current_dir(&self.path)
            .env("DOCS_AUTHORING_WORKSPACE", &self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real binary with a clean environment
#[allow(deprecated, dead_code)]
pub fn docs_cmd() -> Command {
    let mut cmd = Command::cargo_bin("docs-authoring").expect("binary should be built");
    cmd.env_remove("DOCS_AUTHORING_WORKSPACE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}
