//! Store configuration and location.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::path::PathStyle;

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE: &str = "envscope.db";

/// Default busy timeout while waiting on another writer.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Configuration for opening the store.
///
/// # Examples
///
/// ```
/// use envscope::store::StoreConfig;
/// use std::time::Duration;
///
/// let config = StoreConfig::new("/tmp/envscope.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to create the database (and its directory) if missing.
    pub auto_create: bool,
    /// Whether to open the database read-only.
    pub read_only: bool,
    /// Style used to interpret stored paths.
    pub path_style: PathStyle,
}

impl StoreConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults: 5000ms busy timeout, `auto_create`, read-write, native path
    /// style.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
            path_style: PathStyle::native(),
        }
    }

    /// Configuration for `<data_dir>/envscope.db`.
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE))
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets the style used for stored paths.
    #[must_use]
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = style;
        self
    }

    /// Opens read-only; disables `auto_create`.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory: `<config dir>/envscope`.
///
/// That is `~/.config/envscope` on Linux, `~/Library/Application
/// Support/envscope` on macOS and `%APPDATA%\envscope` on Windows.
///
/// # Errors
///
/// Returns an error if the platform config directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use envscope::store::default_data_dir;
///
/// let data_dir = default_data_dir().unwrap();
/// println!("Data directory: {}", data_dir.display());
/// ```
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("envscope"))
        .ok_or_else(|| Error::Validation {
            field: "data_dir".into(),
            message: "cannot determine the platform config directory".into(),
        })
}
