//! Resolved runtime settings.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::hook::{ConflictPolicy, HookStateFile};
use crate::path::{PathResolver, PathStyle};
use crate::store::StoreConfig;

/// Concrete settings a [`Vault`](crate::vault::Vault) runs with.
///
/// Nothing downstream reads the process environment or cwd; everything it
/// needs is here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the database, config file and hook state.
    pub data_dir: PathBuf,
    /// Base for relative paths.
    pub working_dir: PathBuf,
    /// Path semantics.
    pub path_style: PathStyle,
    /// Resolve symlinks when canonicalizing directories.
    pub follow_symlinks: bool,
    /// How long to wait on a locked database.
    pub busy_timeout: Duration,
    /// Treatment of resolved keys the user already set.
    pub conflict_policy: ConflictPolicy,
    /// Whether hook messages may be colored.
    pub color: bool,
}

impl Settings {
    /// Store configuration for `<data_dir>/envscope.db`.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::in_data_dir(&self.data_dir)
            .with_busy_timeout(self.busy_timeout)
            .with_path_style(self.path_style)
    }

    /// Hook state file inside the data directory.
    #[must_use]
    pub fn hook_state_file(&self) -> HookStateFile {
        HookStateFile::in_dir(&self.data_dir)
    }

    /// Path resolver bound to the working directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the working directory is not absolute.
    pub fn path_resolver(&self) -> Result<PathResolver> {
        PathResolver::new(self.path_style, &self.working_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::HOOK_STATE_FILE;
    use crate::store::DATABASE_FILE;

    fn settings(working_dir: &str) -> Settings {
        Settings {
            data_dir: PathBuf::from("/data"),
            working_dir: PathBuf::from(working_dir),
            path_style: PathStyle::Posix,
            follow_symlinks: false,
            busy_timeout: Duration::from_millis(10),
            conflict_policy: ConflictPolicy::Overwrite,
            color: false,
        }
    }

    #[test]
    fn test_derived_locations() {
        let s = settings("/work");
        let store = s.store_config();
        assert_eq!(store.path, PathBuf::from("/data").join(DATABASE_FILE));
        assert_eq!(store.busy_timeout, Duration::from_millis(10));
        assert_eq!(store.path_style, PathStyle::Posix);
        assert_eq!(
            s.hook_state_file().path(),
            PathBuf::from("/data").join(HOOK_STATE_FILE)
        );
    }

    #[test]
    fn test_relative_working_dir_rejected() {
        assert!(settings("relative").path_resolver().is_err());
        assert_eq!(
            settings("/work").path_resolver().unwrap().working_dir(),
            "/work"
        );
    }
}
