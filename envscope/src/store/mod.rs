//! Persistent storage for scope secrets and trust records.
//!
//! This module provides a SQLite-based storage layer: connection management,
//! schema versioning, and the queries the resolvers need. Ancestor lookups run
//! in SQL against a folded copy of each path, so they stay segment-exact and
//! honor Windows case-insensitivity without loading every row.
//!
//! Consumers talk to storage through the [`Storage`] trait, implemented by the
//! eagerly-opened [`Database`] and the lazily-opened [`Store`] handle.
//!
//! # Examples
//!
//! ```no_run
//! use envscope::path::{CanonicalPath, PathStyle};
//! use envscope::store::{Storage, Store, StoreConfig};
//! use envscope::SecretValue;
//!
//! let mut store = Store::new(StoreConfig::new("/tmp/envscope.db"));
//! let scope = CanonicalPath::parse(PathStyle::native(), "/srv/app").unwrap();
//! store.set_secret(&scope, "API_KEY", &SecretValue::Value("s3cret".into())).unwrap();
//!
//! let child = CanonicalPath::parse(PathStyle::native(), "/srv/app/web").unwrap();
//! assert_eq!(store.get_ancestor_scope_paths(&child).unwrap(), vec![scope]);
//! ```

mod config;
mod connection;
mod handle;
pub mod migrations;
mod schema;
mod secrets;
mod trust;

#[cfg(test)]
pub(crate) mod test_util;

use std::time::{Duration, SystemTime};

use crate::error::{Error, Result};
use crate::path::CanonicalPath;
use crate::secrets::{ScopeEntry, SecretValue};
use crate::trust::TrustRecord;

pub use config::{default_data_dir, StoreConfig, DATABASE_FILE, DEFAULT_BUSY_TIMEOUT};
pub use connection::Database;
pub use handle::Store;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;

/// Storage operations used by the secret resolver and trust engine.
///
/// All paths are canonical. Methods take `&mut self` so lazy handles can open
/// on first use.
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    /// Inserts or replaces the entry for `(scope, key)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_secret(&mut self, scope: &CanonicalPath, key: &str, value: &SecretValue) -> Result<()>;

    /// Entries stored at exactly `scope`, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_scope_secrets(&mut self, scope: &CanonicalPath) -> Result<Vec<ScopeEntry>>;

    /// Every scope holding at least one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_all_scope_paths(&mut self) -> Result<Vec<CanonicalPath>>;

    /// Scopes equal to `target` or an ancestor of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_ancestor_scope_paths(&mut self, target: &CanonicalPath) -> Result<Vec<CanonicalPath>>;

    /// Deletes `(scope, key)`; returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove_key(&mut self, scope: &CanonicalPath, key: &str) -> Result<bool>;

    /// Upserts trust for `path` with identity `inode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn add_trust_record(&mut self, path: &CanonicalPath, inode: &str) -> Result<TrustRecord>;

    /// Deletes trust for `path`; returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove_trust_record(&mut self, path: &CanonicalPath) -> Result<bool>;

    /// The trust record for exactly `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_trust_record(&mut self, path: &CanonicalPath) -> Result<Option<TrustRecord>>;

    /// Every trust record, ordered by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_all_trust_records(&mut self) -> Result<Vec<TrustRecord>>;

    /// Trust records for `target` and its ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_ancestor_trust_records(&mut self, target: &CanonicalPath) -> Result<Vec<TrustRecord>>;

    /// Releases the underlying connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection does not close cleanly.
    fn close(&mut self) -> Result<()>;
}

impl Storage for Database {
    fn set_secret(&mut self, scope: &CanonicalPath, key: &str, value: &SecretValue) -> Result<()> {
        Database::set_secret(self, scope, key, value)
    }

    fn get_scope_secrets(&mut self, scope: &CanonicalPath) -> Result<Vec<ScopeEntry>> {
        Database::get_scope_secrets(self, scope)
    }

    fn get_all_scope_paths(&mut self) -> Result<Vec<CanonicalPath>> {
        Database::get_all_scope_paths(self)
    }

    fn get_ancestor_scope_paths(&mut self, target: &CanonicalPath) -> Result<Vec<CanonicalPath>> {
        Database::get_ancestor_scope_paths(self, target)
    }

    fn remove_key(&mut self, scope: &CanonicalPath, key: &str) -> Result<bool> {
        Database::remove_key(self, scope, key)
    }

    fn add_trust_record(&mut self, path: &CanonicalPath, inode: &str) -> Result<TrustRecord> {
        Database::add_trust_record(self, path, inode)
    }

    fn remove_trust_record(&mut self, path: &CanonicalPath) -> Result<bool> {
        Database::remove_trust_record(self, path)
    }

    fn get_trust_record(&mut self, path: &CanonicalPath) -> Result<Option<TrustRecord>> {
        Database::get_trust_record(self, path)
    }

    fn get_all_trust_records(&mut self) -> Result<Vec<TrustRecord>> {
        Database::get_all_trust_records(self)
    }

    fn get_ancestor_trust_records(&mut self, target: &CanonicalPath) -> Result<Vec<TrustRecord>> {
        Database::get_ancestor_trust_records(self, target)
    }

    // The connection closes when the `Database` is dropped.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Storage for Store {
    fn set_secret(&mut self, scope: &CanonicalPath, key: &str, value: &SecretValue) -> Result<()> {
        self.database()?.set_secret(scope, key, value)
    }

    fn get_scope_secrets(&mut self, scope: &CanonicalPath) -> Result<Vec<ScopeEntry>> {
        self.database()?.get_scope_secrets(scope)
    }

    fn get_all_scope_paths(&mut self) -> Result<Vec<CanonicalPath>> {
        self.database()?.get_all_scope_paths()
    }

    fn get_ancestor_scope_paths(&mut self, target: &CanonicalPath) -> Result<Vec<CanonicalPath>> {
        self.database()?.get_ancestor_scope_paths(target)
    }

    fn remove_key(&mut self, scope: &CanonicalPath, key: &str) -> Result<bool> {
        self.database()?.remove_key(scope, key)
    }

    fn add_trust_record(&mut self, path: &CanonicalPath, inode: &str) -> Result<TrustRecord> {
        self.database()?.add_trust_record(path, inode)
    }

    fn remove_trust_record(&mut self, path: &CanonicalPath) -> Result<bool> {
        self.database()?.remove_trust_record(path)
    }

    fn get_trust_record(&mut self, path: &CanonicalPath) -> Result<Option<TrustRecord>> {
        self.database()?.get_trust_record(path)
    }

    fn get_all_trust_records(&mut self) -> Result<Vec<TrustRecord>> {
        self.database()?.get_all_trust_records()
    }

    fn get_ancestor_trust_records(&mut self, target: &CanonicalPath) -> Result<Vec<TrustRecord>> {
        self.database()?.get_ancestor_trust_records(target)
    }

    fn close(&mut self) -> Result<()> {
        Store::close(self)
    }
}

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::Validation {
            field: "timestamp".into(),
            message: format!("invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(crate) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs.max(0) as u64)
}
