//! Hook state persisted between invocations.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::CanonicalPath;
use crate::store::systemtime_to_unix_secs;

use super::diff::{HookDiff, LoadedSecret};

/// File name of the hook state inside the data directory.
pub const HOOK_STATE_FILE: &str = "hook-state.json";

/// What the hook last exported into the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookState {
    /// Secrets currently exported by the hook, sorted by key.
    pub loaded_secrets: Vec<LoadedSecret>,
    /// Directory of the last hook invocation.
    pub last_dir: Option<String>,
    /// Unix seconds of the last invocation.
    pub loaded_at: Option<i64>,
    /// Keys skipped at least once because the user already defined them.
    pub skipped_keys: BTreeSet<String>,
}

impl HookState {
    /// Keys currently exported by the hook.
    pub fn loaded_keys(&self) -> impl Iterator<Item = &str> {
        self.loaded_secrets.iter().map(|s| s.key.as_str())
    }
}

/// Folds a diff into the state it was computed from.
///
/// The loaded set becomes the previous one minus `unset` plus `set`. Entries
/// the diff did not touch stay, since another shell may still hold them.
/// Skipped keys accumulate across calls.
#[must_use]
pub fn apply_diff(
    previous: &HookState,
    diff: &HookDiff,
    dir: &CanonicalPath,
    now: SystemTime,
) -> HookState {
    let mut loaded: BTreeMap<&str, &LoadedSecret> = previous
        .loaded_secrets
        .iter()
        .map(|s| (s.key.as_str(), s))
        .collect();
    for key in &diff.unset {
        loaded.remove(key.as_str());
    }
    for secret in diff.set.iter().chain(&diff.unchanged) {
        loaded.insert(secret.key.as_str(), secret);
    }

    HookState {
        loaded_secrets: loaded.into_values().cloned().collect(),
        last_dir: Some(dir.as_str().to_string()),
        loaded_at: systemtime_to_unix_secs(now).ok(),
        skipped_keys: previous
            .skipped_keys
            .iter()
            .chain(&diff.skipped)
            .cloned()
            .collect(),
    }
}

/// JSON file holding a [`HookState`].
#[derive(Debug, Clone)]
pub struct HookStateFile {
    path: PathBuf,
}

impl HookStateFile {
    /// A state file at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The state file inside `data_dir`.
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(HOOK_STATE_FILE))
    }

    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the state. A missing file is an empty state.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid state JSON.
    pub fn load(&self) -> Result<HookState> {
        match fs::read_to_string(&self.path) {
            Ok(body) => Ok(serde_json::from_str(&body)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HookState::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the state, replacing the file atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, state: &HookState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(state)?;
        fs::write(&tmp_path, format!("{body}\n"))?;
        fs::rename(&tmp_path, &self.path)?;
        log::debug!("saved hook state to {}", self.path.display());
        Ok(())
    }

    /// Deletes the state. Returns whether a file existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
