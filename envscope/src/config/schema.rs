//! Configuration file schema.
//!
//! Every field is optional so that files, environment variables and
//! programmatic overrides can each supply only what they change.

use serde::{Deserialize, Serialize};

use crate::hook::ConflictPolicy;

/// Partial configuration from one source.
///
/// # Examples
///
/// ```
/// use envscope::config::Config;
///
/// let config: Config = serde_yaml::from_str("follow_symlinks: false\n").unwrap();
/// assert_eq!(config.follow_symlinks, Some(false));
/// assert!(serde_yaml::from_str::<Config>("colour: true\n").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Resolve symlinks when canonicalizing directories.
    pub follow_symlinks: Option<bool>,

    /// How long to wait on a locked database, in milliseconds.
    pub busy_timeout_ms: Option<u64>,

    /// Shell hook settings.
    pub hook: Option<HookConfig>,
}

/// Shell hook settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    /// Treatment of resolved keys the user already set.
    pub conflict_policy: Option<ConflictPolicy>,

    /// Whether the hook summary line may be colored.
    pub color: Option<bool>,
}
