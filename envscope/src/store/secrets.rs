//! Scope secret operations.

use std::time::SystemTime;

use rusqlite::params;

use crate::error::Result;
use crate::path::CanonicalPath;
use crate::secrets::{ScopeEntry, SecretValue};

use super::connection::Database;
use super::schema::ANCESTOR_PREDICATE;
use super::{systemtime_to_unix_secs, unix_secs_to_systemtime};

const UPSERT_SECRET: &str = r"
    INSERT INTO scope_secrets (scope_path, match_key, key, value, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT (match_key, key) DO UPDATE SET
        scope_path = excluded.scope_path,
        value = excluded.value,
        updated_at = excluded.updated_at
";

const SELECT_SCOPE_SECRETS: &str = r"
    SELECT scope_path, key, value, updated_at
    FROM scope_secrets
    WHERE match_key = ?
    ORDER BY key
";

const SELECT_ALL_SCOPE_PATHS: &str = r"
    SELECT MIN(scope_path)
    FROM scope_secrets
    GROUP BY match_key
    ORDER BY match_key
";

const DELETE_SECRET: &str = r"
    DELETE FROM scope_secrets WHERE match_key = ? AND key = ?
";

impl Database {
    /// Inserts or replaces the entry for `(scope, key)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_secret(
        &mut self,
        scope: &CanonicalPath,
        key: &str,
        value: &SecretValue,
    ) -> Result<()> {
        let now = systemtime_to_unix_secs(SystemTime::now())?;
        self.conn.execute(
            UPSERT_SECRET,
            params![scope.as_str(), scope.match_key(), key, value.as_value(), now],
        )?;
        Ok(())
    }

    /// Returns every entry stored at exactly `scope`, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_scope_secrets(&self, scope: &CanonicalPath) -> Result<Vec<ScopeEntry>> {
        let style = self.path_style();
        let mut stmt = self.conn.prepare(SELECT_SCOPE_SECRETS)?;
        let rows = stmt.query_map([scope.match_key()], |row| {
            let path: String = row.get(0)?;
            let value: Option<String> = row.get(2)?;
            Ok(ScopeEntry {
                scope_path: CanonicalPath::from_normalized(style, path),
                key: row.get(1)?,
                value: SecretValue::from(value),
                updated_at: unix_secs_to_systemtime(row.get(3)?),
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Returns every scope that holds at least one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_all_scope_paths(&self) -> Result<Vec<CanonicalPath>> {
        self.collect_paths(SELECT_ALL_SCOPE_PATHS, [])
    }

    /// Returns every scope equal to `target` or an ancestor of it.
    ///
    /// Matching happens in SQL on the folded path, so it is segment-exact and
    /// case-insensitive for Windows stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_ancestor_scope_paths(&self, target: &CanonicalPath) -> Result<Vec<CanonicalPath>> {
        let sql = format!(
            "SELECT MIN(scope_path) FROM scope_secrets WHERE {ANCESTOR_PREDICATE} \
             GROUP BY match_key ORDER BY match_key"
        );
        let separator = target.style().separator().to_string();
        self.collect_paths(&sql, params![target.match_key(), separator])
    }

    /// Deletes the entry for `(scope, key)`. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_key(&mut self, scope: &CanonicalPath, key: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute(DELETE_SECRET, params![scope.match_key(), key])?;
        Ok(changed > 0)
    }

    fn collect_paths<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<CanonicalPath>> {
        let style = self.path_style();
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            let path: String = row.get(0)?;
            Ok(CanonicalPath::from_normalized(style, path))
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathStyle;
    use crate::store::test_util::create_test_database_with_style;

    fn posix(p: &str) -> CanonicalPath {
        CanonicalPath::parse(PathStyle::Posix, p).unwrap()
    }

    fn windows(p: &str) -> CanonicalPath {
        CanonicalPath::parse(PathStyle::Windows, p).unwrap()
    }

    fn value(v: &str) -> SecretValue {
        SecretValue::Value(v.to_string())
    }

    fn stored(db: &Database, scope: &CanonicalPath, key: &str) -> Option<SecretValue> {
        db.get_scope_secrets(scope)
            .unwrap()
            .into_iter()
            .find(|e| e.key == key)
            .map(|e| e.value)
    }

    #[test]
    fn test_set_and_get_scope_secrets() {
        let mut db = create_test_database_with_style(PathStyle::Posix);
        let scope = posix("/proj");
        db.set_secret(&scope, "B", &value("2")).unwrap();
        db.set_secret(&scope, "A", &value("1")).unwrap();
        db.set_secret(&scope, "C", &SecretValue::Tombstone).unwrap();

        let entries = db.get_scope_secrets(&scope).unwrap();
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        assert!(entries[2].value.is_tombstone());
        assert_eq!(entries[0].scope_path, scope);
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut db = create_test_database_with_style(PathStyle::Posix);
        let scope = posix("/proj");
        db.set_secret(&scope, "K", &value("old")).unwrap();
        db.set_secret(&scope, "K", &value("new")).unwrap();

        assert_eq!(stored(&db, &scope, "K"), Some(value("new")));
        assert_eq!(db.get_scope_secrets(&scope).unwrap().len(), 1);
    }

    #[test]
    fn test_tombstone_replaces_value() {
        let mut db = create_test_database_with_style(PathStyle::Posix);
        let scope = posix("/proj");
        db.set_secret(&scope, "K", &value("v")).unwrap();
        db.set_secret(&scope, "K", &SecretValue::Tombstone).unwrap();
        assert_eq!(stored(&db, &scope, "K"), Some(SecretValue::Tombstone));
    }

    #[test]
    fn test_empty_scope() {
        let db = create_test_database_with_style(PathStyle::Posix);
        assert!(db.get_scope_secrets(&posix("/nothing")).unwrap().is_empty());
    }

    #[test]
    fn test_remove_key() {
        let mut db = create_test_database_with_style(PathStyle::Posix);
        let scope = posix("/proj");
        db.set_secret(&scope, "K", &value("v")).unwrap();

        assert!(db.remove_key(&scope, "K").unwrap());
        assert!(!db.remove_key(&scope, "K").unwrap());
        assert!(db.get_all_scope_paths().unwrap().is_empty());
    }

    #[test]
    fn test_ancestor_scope_paths_segment_exact() {
        let mut db = create_test_database_with_style(PathStyle::Posix);
        for scope in ["/", "/home", "/home/user", "/home/username", "/home/user/app", "/other"] {
            db.set_secret(&posix(scope), "K", &value(scope)).unwrap();
        }

        let found: Vec<String> = db
            .get_ancestor_scope_paths(&posix("/home/user/app"))
            .unwrap()
            .into_iter()
            .map(CanonicalPath::into_string)
            .collect();
        assert_eq!(found, vec!["/", "/home", "/home/user", "/home/user/app"]);
    }

    #[test]
    fn test_ancestor_scope_paths_for_root() {
        let mut db = create_test_database_with_style(PathStyle::Posix);
        db.set_secret(&posix("/"), "K", &value("root")).unwrap();
        db.set_secret(&posix("/a"), "K", &value("a")).unwrap();

        let found = db.get_ancestor_scope_paths(&posix("/")).unwrap();
        assert_eq!(found, vec![posix("/")]);
    }

    #[test]
    fn test_windows_store_is_case_insensitive() {
        let mut db = create_test_database_with_style(PathStyle::Windows);
        db.set_secret(&windows(r"C:\Users"), "K", &value("users")).unwrap();
        db.set_secret(&windows(r"C:\"), "R", &value("root")).unwrap();
        db.set_secret(&windows(r"D:\Users"), "K", &value("other drive")).unwrap();

        let found = db
            .get_ancestor_scope_paths(&windows(r"c:\users\test"))
            .unwrap();
        assert_eq!(found, vec![windows(r"C:\"), windows(r"C:\Users")]);

        // Same scope under different case shares entries
        db.set_secret(&windows(r"c:\USERS"), "K", &value("replaced")).unwrap();
        let entries = db.get_scope_secrets(&windows(r"C:\Users")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, value("replaced"));
    }
}
