//! Database schema definitions and SQL constants.
//!
//! Paths are stored twice: `scope_path`/`path` as written, and `match_key` in
//! folded form (lowercased for Windows stores) so ancestor matching can run in
//! SQL with plain byte comparisons.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the scope secrets table.
///
/// A NULL `value` is a tombstone: it blocks inheritance of `key` at and
/// below `scope_path`.
pub const CREATE_SCOPE_SECRETS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS scope_secrets (
        scope_path TEXT NOT NULL,
        match_key TEXT NOT NULL,
        key TEXT NOT NULL,
        value TEXT,
        updated_at INTEGER NOT NULL,
        PRIMARY KEY (match_key, key)
    )";

/// Index used by ancestor lookups.
pub const CREATE_SCOPE_MATCH_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_scope_secrets_match ON scope_secrets(match_key)";

/// SQL statement to create the trust records table.
pub const CREATE_TRUST_RECORDS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS trust_records (
        match_key TEXT PRIMARY KEY NOT NULL,
        path TEXT NOT NULL,
        inode TEXT NOT NULL,
        trusted_at INTEGER NOT NULL
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Predicate matching rows whose `match_key` equals `?1` or is an ancestor
/// of it, with `?2` the separator.
///
/// The middle clause covers roots, which already end with the separator.
pub const ANCESTOR_PREDICATE: &str = r"
    match_key = ?1
    OR (substr(match_key, -1) = ?2 AND substr(?1, 1, length(match_key)) = match_key)
    OR substr(?1, 1, length(match_key) + 1) = match_key || ?2
";
