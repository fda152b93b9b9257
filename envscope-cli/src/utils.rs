//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including settings resolution, vault access and output formatting.

use crate::error::CliError;
use envscope::config::{Config, EnvironmentConfig, HookConfig};
use envscope::secrets::is_conventional_key;
use envscope::store::default_data_dir;
use envscope::{ConfigBuilder, Settings, Vault};
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in milliseconds).
    pub busy_timeout: Option<u64>,

    /// Disable colored output.
    pub no_color: bool,
}

/// Resolve layered settings with the global options applied on top.
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    let overrides = Config {
        busy_timeout_ms: global.busy_timeout,
        hook: global.no_color.then(|| HookConfig {
            color: Some(false),
            ..HookConfig::default()
        }),
        ..Config::default()
    };

    Ok(builder.with_config(overrides).build()?)
}

/// Open a vault for the resolved settings.
pub fn open_vault(global: &GlobalOptions) -> Result<Vault, CliError> {
    let settings = load_settings(global)?;
    log::debug!("using data directory {}", settings.data_dir.display());
    Ok(Vault::open(settings)?)
}

/// The directory a command operates on: the given path or the current one.
///
/// Relative paths are left for the vault to resolve against its working
/// directory.
pub fn target_dir(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve the data directory without reading any configuration file.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref dir) = global.data_dir {
        return Ok(dir.clone());
    }
    match EnvironmentConfig::data_dir() {
        Some(dir) => Ok(dir),
        None => Ok(default_data_dir()?),
    }
}

/// Warn about keys that are valid but not upper-case.
pub fn warn_unconventional_key(global: &GlobalOptions, key: &str) {
    if !global.quiet && !is_conventional_key(key) {
        eprintln!("Warning: '{key}' is not upper-case; environment variable names usually are");
    }
}

/// Read a secret value from a reader, dropping one trailing line ending.
pub fn read_value<R: BufRead>(mut reader: R) -> Result<String, CliError> {
    let mut value = String::new();
    reader.read_line(&mut value)?;
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    Ok(value)
}

/// Read a secret value from stdin.
pub fn read_value_from_stdin() -> Result<String, CliError> {
    read_value(io::stdin().lock())
}

/// Whether messages written to stderr may be colored.
pub fn stderr_color(global: &GlobalOptions) -> bool {
    !global.no_color && io::stderr().is_terminal()
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        use std::time::{Duration, UNIX_EPOCH};
        let st = UNIX_EPOCH + Duration::from_secs(1705323045); // 2024-01-15 10:30:45 UTC
        assert_eq!(format_timestamp(st), "2024-01-15 10:30:45");
    }

    #[test]
    fn test_shorten_path_outside_home() {
        let path = PathBuf::from("/usr/local/bin");
        assert_eq!(shorten_path(&path), "/usr/local/bin");
    }

    #[test]
    fn test_read_value_strips_one_line_ending() {
        assert_eq!(read_value("secret\n".as_bytes()).unwrap(), "secret");
        assert_eq!(read_value("secret\r\n".as_bytes()).unwrap(), "secret");
        assert_eq!(read_value("a b\nnext\n".as_bytes()).unwrap(), "a b");
        assert_eq!(read_value("".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_target_dir_defaults_to_current() {
        assert_eq!(target_dir(None), PathBuf::from("."));
        assert_eq!(
            target_dir(Some(PathBuf::from("/srv"))),
            PathBuf::from("/srv")
        );
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let global = GlobalOptions {
            data_dir: Some(PathBuf::from("/tmp/envscope-data")),
            ..GlobalOptions::default()
        };
        assert_eq!(
            resolve_data_dir(&global).unwrap(),
            PathBuf::from("/tmp/envscope-data")
        );
    }
}
