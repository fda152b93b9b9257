//! Common test utilities for integration tests.
//!
//! Every fixture lives in its own temporary directory: the data directory
//! (store, hook state) and a separate tree of project directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use envscope::config::Settings;
use envscope::hook::ConflictPolicy;
use envscope::{PathStyle, Vault};
use tempfile::TempDir;

/// A vault over a throwaway data directory plus a project tree.
pub struct TestVault {
    /// The vault under test.
    pub vault: Vault,
    /// Root of the project tree, canonical (symlinks resolved).
    pub root: PathBuf,
    _temp: TempDir,
}

impl TestVault {
    /// A vault with default settings.
    pub fn new() -> Self {
        Self::with_policy(ConflictPolicy::SkipOnce)
    }

    /// A vault whose hook uses `policy`.
    pub fn with_policy(policy: ConflictPolicy) -> Self {
        let temp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(temp.path()).unwrap().join("tree");
        fs::create_dir(&root).unwrap();

        let settings = Settings {
            data_dir: temp.path().join("data"),
            working_dir: root.clone(),
            path_style: PathStyle::native(),
            follow_symlinks: true,
            busy_timeout: Duration::from_millis(1000),
            conflict_policy: policy,
            color: false,
        };
        let vault = Vault::open(settings).unwrap();

        Self {
            vault,
            root,
            _temp: temp,
        }
    }

    /// Creates `rel` (and its parents) under the project tree.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// `rel` under the project tree without creating it.
    #[allow(dead_code)]
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Canonical string form of `path`, as reported in `source_path`.
    #[allow(dead_code)]
    pub fn canonical(&self, path: &Path) -> String {
        self.vault.canonicalize(path).unwrap().into_string()
    }
}
