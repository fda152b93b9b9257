//! Secret entry types.

use std::collections::BTreeMap;
use std::fmt;
use std::time::SystemTime;

use crate::path::CanonicalPath;

/// What a scope says about a key.
///
/// # Examples
///
/// ```
/// use envscope::SecretValue;
///
/// let v = SecretValue::from(Some("hunter2".to_string()));
/// assert_eq!(v.as_value(), Some("hunter2"));
/// assert!(SecretValue::from(None).is_tombstone());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SecretValue {
    /// A concrete value.
    Value(String),
    /// Blocks inheritance of the key at and below the scope.
    Tombstone,
}

impl SecretValue {
    /// The value, or `None` for a tombstone.
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Tombstone => None,
        }
    }

    /// Whether this is a tombstone.
    #[must_use]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone)
    }
}

impl From<Option<String>> for SecretValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Tombstone, Self::Value)
    }
}

impl fmt::Display for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(v),
            Self::Tombstone => f.write_str("<blocked>"),
        }
    }
}

/// One stored `(scope, key)` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    /// The directory the definition is attached to.
    pub scope_path: CanonicalPath,
    /// The secret's key.
    pub key: String,
    /// The value or tombstone.
    pub value: SecretValue,
    /// When the entry was last written.
    pub updated_at: SystemTime,
}

/// A secret as seen from a particular directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    /// The secret's key.
    pub key: String,
    /// The effective value.
    pub value: String,
    /// The scope that supplied the value.
    pub source_path: CanonicalPath,
}

/// Resolved secrets by key, iterated in key order.
pub type ResolvedMap = BTreeMap<String, ResolvedSecret>;

/// Every entry defined directly at one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSummary {
    /// The scope directory.
    pub path: CanonicalPath,
    /// Entries at this scope, sorted by key.
    pub entries: Vec<ScopeEntry>,
}
