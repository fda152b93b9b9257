//! Hook diffing and command generation.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::ShellType;
use crate::secrets::{ResolvedMap, ResolvedSecret};

use super::state::HookState;

/// A secret the hook has exported into the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedSecret {
    /// Environment variable name.
    pub key: String,
    /// Exported value.
    pub value: String,
    /// Scope the value came from.
    pub source: String,
}

impl From<&ResolvedSecret> for LoadedSecret {
    fn from(secret: &ResolvedSecret) -> Self {
        Self {
            key: secret.key.clone(),
            value: secret.value.clone(),
            source: secret.source_path.as_str().to_string(),
        }
    }
}

/// What to do with a resolved key the user already has in their environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Leave the user's variable alone the first time; overwrite it once it
    /// has been skipped before.
    #[default]
    SkipOnce,
    /// Never overwrite a variable the hook did not set itself.
    AlwaysSkip,
    /// Always export the resolved value.
    Overwrite,
}

impl ConflictPolicy {
    /// Stable kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SkipOnce => "skip-once",
            Self::AlwaysSkip => "always-skip",
            Self::Overwrite => "overwrite",
        }
    }

    /// Parse a policy name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown names.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "skip-once" => Ok(Self::SkipOnce),
            "always-skip" => Ok(Self::AlwaysSkip),
            "overwrite" => Ok(Self::Overwrite),
            _ => Err(Error::Validation {
                field: "conflict_policy".to_string(),
                message: format!(
                    "unknown conflict policy '{s}': expected skip-once, always-skip or overwrite"
                ),
            }),
        }
    }

    fn skips(self, previously_skipped: bool) -> bool {
        match self {
            Self::SkipOnce => !previously_skipped,
            Self::AlwaysSkip => true,
            Self::Overwrite => false,
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Changes needed to move a shell from one resolution to the next.
///
/// Every list is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HookDiff {
    /// Keys loaded before that are no longer resolved.
    pub unset: Vec<String>,
    /// Secrets to export, new or changed.
    pub set: Vec<LoadedSecret>,
    /// Keys left alone because the user already defines them.
    pub skipped: Vec<String>,
    /// Secrets already loaded with the same value and source.
    pub unchanged: Vec<LoadedSecret>,
}

impl HookDiff {
    /// Whether the diff changes nothing in the shell.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.unset.is_empty() && self.set.is_empty()
    }
}

/// Computes the minimal update from `previous` to `resolved`.
///
/// `previous` may have been written by a different shell, so a key counts as
/// loaded here only when `live_env` still holds the value the hook exported.
/// Anything else in the live environment belongs to the user: it is never
/// unset, and when a secret resolves for it `policy` decides between skipping
/// and overwriting.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use envscope::hook::{compute_diff, ConflictPolicy, HookState, LoadedSecret};
/// use envscope::secrets::ResolvedMap;
///
/// let mut previous = HookState::default();
/// previous.loaded_secrets.push(LoadedSecret {
///     key: "A".into(),
///     value: "1".into(),
///     source: "/srv".into(),
/// });
/// let live = HashMap::from([("A".to_string(), "1".to_string())]);
///
/// let diff = compute_diff(&previous, &ResolvedMap::new(), &live, ConflictPolicy::default());
/// assert_eq!(diff.unset, vec!["A".to_string()]);
/// assert!(diff.set.is_empty());
///
/// // A shell that never received A keeps whatever it has
/// let diff = compute_diff(&previous, &ResolvedMap::new(), &HashMap::new(), ConflictPolicy::default());
/// assert!(diff.is_noop());
/// ```
#[must_use]
pub fn compute_diff<S: std::hash::BuildHasher>(
    previous: &HookState,
    resolved: &ResolvedMap,
    live_env: &HashMap<String, String, S>,
    policy: ConflictPolicy,
) -> HookDiff {
    let held: BTreeMap<&str, &LoadedSecret> = previous
        .loaded_secrets
        .iter()
        .filter(|s| live_env.get(&s.key).is_some_and(|v| *v == s.value))
        .map(|s| (s.key.as_str(), s))
        .collect();

    let mut diff = HookDiff {
        unset: held
            .keys()
            .filter(|key| !resolved.contains_key(**key))
            .map(|key| (*key).to_string())
            .collect(),
        ..HookDiff::default()
    };

    // ResolvedMap is a BTreeMap, so the lists below come out sorted
    for (key, secret) in resolved {
        let candidate = LoadedSecret::from(secret);
        match held.get(key.as_str()) {
            Some(current) if **current == candidate => diff.unchanged.push(candidate),
            Some(_) => diff.set.push(candidate),
            None if live_env.contains_key(key)
                && policy.skips(previous.skipped_keys.contains(key)) =>
            {
                diff.skipped.push(key.clone());
            }
            None => diff.set.push(candidate),
        }
    }

    diff
}

/// Renders a diff as shell commands, every unset before any set.
///
/// # Examples
///
/// ```
/// use envscope::hook::{generate_shell_commands, HookDiff, LoadedSecret};
/// use envscope::output::ShellType;
///
/// let diff = HookDiff {
///     unset: vec!["A".into()],
///     set: vec![LoadedSecret { key: "B".into(), value: "2".into(), source: "/srv".into() }],
///     ..HookDiff::default()
/// };
/// assert_eq!(
///     generate_shell_commands(&diff, ShellType::Bash),
///     vec!["unset A".to_string(), "export B=$'2'".to_string()]
/// );
/// ```
#[must_use]
pub fn generate_shell_commands(diff: &HookDiff, shell: ShellType) -> Vec<String> {
    diff.unset
        .iter()
        .map(|key| shell.format_unset(key))
        .chain(diff.set.iter().map(|s| shell.format_set(&s.key, &s.value)))
        .collect()
}
