//! Environment variable overrides.
//!
//! `ENVSCOPE_*` variables override configuration file values. `NO_COLOR`
//! (any non-empty value) disables color.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, HookConfig};
use crate::error::{Error, Result};
use crate::hook::ConflictPolicy;

/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "ENVSCOPE_DATA_DIR";
/// Overrides `busy_timeout_ms`.
pub const BUSY_TIMEOUT_ENV: &str = "ENVSCOPE_BUSY_TIMEOUT_MS";
/// Overrides `hook.conflict_policy`.
pub const CONFLICT_POLICY_ENV: &str = "ENVSCOPE_CONFLICT_POLICY";
/// Overrides `follow_symlinks`.
pub const FOLLOW_SYMLINKS_ENV: &str = "ENVSCOPE_FOLLOW_SYMLINKS";
/// Disables color when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Reads configuration overrides from the environment.
///
/// # Examples
///
/// ```
/// use envscope::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides_from(&mut config, |name| {
///     (name == "ENVSCOPE_BUSY_TIMEOUT_MS").then(|| "750".to_string())
/// })
/// .unwrap();
/// assert_eq!(config.busy_timeout_ms, Some(750));
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_overrides_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides from an environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(FOLLOW_SYMLINKS_ENV) {
            config.follow_symlinks = Some(Self::parse_bool(FOLLOW_SYMLINKS_ENV, &val)?);
        }

        if let Some(ms) = lookup(BUSY_TIMEOUT_ENV) {
            config.busy_timeout_ms = Some(ms.trim().parse().map_err(|_| Error::Validation {
                field: BUSY_TIMEOUT_ENV.into(),
                message: "must be a positive integer".into(),
            })?);
        }

        if let Some(policy) = lookup(CONFLICT_POLICY_ENV) {
            let hook = config.hook.get_or_insert_with(HookConfig::default);
            hook.conflict_policy =
                Some(ConflictPolicy::from_string(&policy).map_err(|_| Error::Validation {
                    field: CONFLICT_POLICY_ENV.into(),
                    message: format!(
                        "unknown policy '{policy}' (expected skip-once, always-skip or overwrite)"
                    ),
                })?);
        }

        if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            config.hook.get_or_insert_with(HookConfig::default).color = Some(false);
        }

        Ok(())
    }

    /// The data directory named by `ENVSCOPE_DATA_DIR`, if set and non-empty.
    #[must_use]
    pub fn data_dir() -> Option<PathBuf> {
        Self::data_dir_from(|name| env::var(name).ok())
    }

    /// Like [`EnvironmentConfig::data_dir`] with an explicit lookup.
    pub fn data_dir_from<F>(lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(DATA_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
