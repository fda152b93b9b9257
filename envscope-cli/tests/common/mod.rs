//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests.
const ISOLATED_VARS: [&str; 6] = [
    "ENVSCOPE_DATA_DIR",
    "ENVSCOPE_BUSY_TIMEOUT_MS",
    "ENVSCOPE_CONFLICT_POLICY",
    "ENVSCOPE_FOLLOW_SYMLINKS",
    "ENVSCOPE_LOG_MODE",
    "NO_COLOR",
];

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for project directories
/// - A separate data directory for the envscope store
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub temp_path: PathBuf,
    /// Path to the envscope data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; envscope creates it on first write.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path =
            std::fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        let data_dir = temp_path.join("envscope-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Variables that configure envscope are cleared so the developer's
    /// environment cannot influence the result.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("envscope").expect("Failed to find envscope binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command builder running inside `dir`.
    pub fn command_in(&self, dir: &Path) -> Command {
        let mut cmd = self.command();
        cmd.current_dir(dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Store a secret at `dir`.
    pub fn set(&self, key: &str, value: &str, dir: &Path) {
        self.command()
            .args(["set", key, value, "--path"])
            .arg(dir)
            .assert()
            .success();
    }

    /// Trust `dir`.
    pub fn trust(&self, dir: &Path) {
        self.command().arg("trust").arg(dir).assert().success();
    }

    /// Run `get` and return the trimmed value.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn get(&self, key: &str, dir: &Path) -> String {
        let output = self
            .command()
            .args(["get", key, "--path"])
            .arg(dir)
            .output()
            .expect("Failed to run get command");

        assert!(
            output.status.success(),
            "Get failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches('\n')
            .to_string()
    }

    /// Run the bash hook in `dir` and return stdout.
    pub fn hook(&self, dir: &Path) -> String {
        self.hook_with_env(dir, &[])
    }

    /// Runs the bash hook in `dir` from a shell that already exports `vars`.
    pub fn hook_with_env(&self, dir: &Path, vars: &[(&str, &str)]) -> String {
        let mut cmd = self.command_in(dir);
        for (key, value) in vars {
            cmd.env(key, value);
        }
        let output = cmd
            .args(["hook", "--shell", "bash"])
            .output()
            .expect("Failed to run hook command");

        assert!(output.status.success());
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
