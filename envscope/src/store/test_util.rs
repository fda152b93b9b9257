//! Shared test utilities for store unit tests.

use tempfile::tempdir;

use crate::path::PathStyle;
use crate::store::{Database, StoreConfig};

/// Creates a temporary test database interpreting paths under `style`.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database_with_style(style: PathStyle) -> Database {
    let dir = tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("test.db")).with_path_style(style);
    let db = Database::open(config).unwrap();

    // Keep the directory alive for the database's lifetime
    std::mem::forget(dir);

    db
}
