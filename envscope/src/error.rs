//! Error types for the envscope library.
//!
//! This module provides the error hierarchy for all operations in the
//! envscope library, using `thiserror` for ergonomic error handling.
//!
//! Trust outcomes are deliberately absent here: "not trusted" is an expected
//! result that callers branch on, so it is modelled by
//! [`TrustStatus`](crate::trust::TrustStatus) instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an envscope error.
///
/// # Examples
///
/// ```
/// use envscope::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("value".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the envscope library.
#[derive(Debug, Error)]
pub enum Error {
    /// A secret key does not match `^[A-Za-z_][A-Za-z0-9_]*$`.
    #[error("invalid key '{key}': keys must start with a letter or underscore and contain only letters, digits and underscores")]
    InvalidKeyFormat {
        /// The rejected key.
        key: String,
    },

    /// The store was written by an incompatible schema version.
    #[error("unsupported store version: expected {expected}, found {found}")]
    UnsupportedStoreVersion {
        /// The schema version this build understands.
        expected: u32,
        /// The schema version recorded in the store.
        found: u32,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A value cannot be written on a single dotenv line.
    #[error("value of '{key}' contains a newline and cannot be written as dotenv")]
    ValueContainsNewline {
        /// The key whose value was rejected.
        key: String,
    },

    /// The store handle was used after `close()`.
    #[error("store has been closed")]
    StoreClosed,

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Hook state could not be serialized or parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use envscope::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_error() {
        let err = Error::InvalidKeyFormat {
            key: "1BAD".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid key"));
        assert!(display.contains("1BAD"));
    }

    #[test]
    fn test_unsupported_store_version_error() {
        let err = Error::UnsupportedStoreVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("unsupported store version"));
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_path_not_found_error() {
        let err = Error::PathNotFound {
            path: PathBuf::from("/missing/dir"),
        };
        let display = format!("{err}");
        assert!(display.contains("path not found"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/missing/dir"));
        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn test_value_contains_newline_error() {
        let err = Error::ValueContainsNewline {
            key: "CERT".to_string(),
        };
        assert!(format!("{err}").contains("CERT"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
