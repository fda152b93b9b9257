//! Trust record and status types.

use std::fmt;
use std::time::SystemTime;

use serde::Serialize;

use crate::path::CanonicalPath;

/// A stored grant of trust for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustRecord {
    /// The trusted directory.
    pub path: CanonicalPath,
    /// Filesystem identity of the directory when it was trusted.
    pub inode: String,
    /// When trust was granted or last refreshed.
    pub trusted_at: SystemTime,
}

/// Result of [`TrustEngine::trust`](crate::trust::TrustEngine::trust).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustGrant {
    /// The directory now trusted.
    pub path: CanonicalPath,
    /// The identity token recorded for it.
    pub inode: String,
}

/// Why a directory is not trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotTrustedReason {
    /// The directory does not exist.
    PathNotFound,
    /// No trust record covers the directory.
    NotTrusted,
    /// Every covering record is stale: its directory was replaced or removed.
    InodeMismatch,
}

impl NotTrustedReason {
    /// Stable kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PathNotFound => "path-not-found",
            Self::NotTrusted => "not-trusted",
            Self::InodeMismatch => "inode-mismatch",
        }
    }
}

impl fmt::Display for NotTrustedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a trust check.
///
/// Not being trusted is an expected result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustStatus {
    /// A valid record covers the directory.
    Trusted {
        /// The record's directory: the checked path or one of its ancestors.
        trusted_path: CanonicalPath,
    },
    /// No valid record covers the directory.
    NotTrusted {
        /// Why.
        reason: NotTrustedReason,
    },
}

impl TrustStatus {
    /// Whether the directory is trusted.
    #[must_use]
    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::Trusted { .. })
    }

    /// The trusted directory, if any.
    #[must_use]
    pub fn trusted_path(&self) -> Option<&CanonicalPath> {
        match self {
            Self::Trusted { trusted_path } => Some(trusted_path),
            Self::NotTrusted { .. } => None,
        }
    }

    /// The failure reason, if not trusted.
    #[must_use]
    pub fn reason(&self) -> Option<NotTrustedReason> {
        match self {
            Self::Trusted { .. } => None,
            Self::NotTrusted { reason } => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_names() {
        assert_eq!(NotTrustedReason::PathNotFound.to_string(), "path-not-found");
        assert_eq!(NotTrustedReason::NotTrusted.to_string(), "not-trusted");
        assert_eq!(NotTrustedReason::InodeMismatch.to_string(), "inode-mismatch");
        assert_eq!(
            serde_json::to_string(&NotTrustedReason::InodeMismatch).unwrap(),
            "\"inode-mismatch\""
        );
    }

    #[test]
    fn test_status_accessors() {
        let status = TrustStatus::NotTrusted {
            reason: NotTrustedReason::NotTrusted,
        };
        assert!(!status.is_trusted());
        assert_eq!(status.reason(), Some(NotTrustedReason::NotTrusted));
        assert!(status.trusted_path().is_none());
    }
}
