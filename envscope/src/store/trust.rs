//! Trust record operations.

use std::time::SystemTime;

use rusqlite::{params, OptionalExtension};

use crate::error::Result;
use crate::path::{CanonicalPath, PathStyle};
use crate::trust::TrustRecord;

use super::connection::Database;
use super::schema::ANCESTOR_PREDICATE;
use super::{systemtime_to_unix_secs, unix_secs_to_systemtime};

const UPSERT_TRUST: &str = r"
    INSERT INTO trust_records (match_key, path, inode, trusted_at)
    VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT (match_key) DO UPDATE SET
        path = excluded.path,
        inode = excluded.inode,
        trusted_at = excluded.trusted_at
";

const SELECT_TRUST: &str = r"
    SELECT path, inode, trusted_at FROM trust_records WHERE match_key = ?
";

const SELECT_ALL_TRUST: &str = r"
    SELECT path, inode, trusted_at FROM trust_records ORDER BY match_key
";

const DELETE_TRUST: &str = "DELETE FROM trust_records WHERE match_key = ?";

fn row_to_record(style: PathStyle, row: &rusqlite::Row<'_>) -> rusqlite::Result<TrustRecord> {
    let path: String = row.get(0)?;
    Ok(TrustRecord {
        path: CanonicalPath::from_normalized(style, path),
        inode: row.get(1)?,
        trusted_at: unix_secs_to_systemtime(row.get(2)?),
    })
}

impl Database {
    /// Records trust for `path`, replacing any earlier record in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn add_trust_record(&mut self, path: &CanonicalPath, inode: &str) -> Result<TrustRecord> {
        let trusted_at = SystemTime::now();
        self.conn.execute(
            UPSERT_TRUST,
            params![
                path.match_key(),
                path.as_str(),
                inode,
                systemtime_to_unix_secs(trusted_at)?
            ],
        )?;
        Ok(TrustRecord {
            path: path.clone(),
            inode: inode.to_string(),
            trusted_at,
        })
    }

    /// Deletes the record for `path`. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_trust_record(&mut self, path: &CanonicalPath) -> Result<bool> {
        Ok(self.conn.execute(DELETE_TRUST, [path.match_key()])? > 0)
    }

    /// Returns the record for exactly `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_trust_record(&self, path: &CanonicalPath) -> Result<Option<TrustRecord>> {
        let style = self.path_style();
        Ok(self
            .conn
            .query_row(SELECT_TRUST, [path.match_key()], |row| {
                row_to_record(style, row)
            })
            .optional()?)
    }

    /// Returns every trust record, ordered by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_all_trust_records(&self) -> Result<Vec<TrustRecord>> {
        let style = self.path_style();
        let mut stmt = self.conn.prepare(SELECT_ALL_TRUST)?;
        let rows = stmt.query_map([], |row| row_to_record(style, row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Returns records for `target` and each of its ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_ancestor_trust_records(&self, target: &CanonicalPath) -> Result<Vec<TrustRecord>> {
        let style = self.path_style();
        let sql = format!(
            "SELECT path, inode, trusted_at FROM trust_records WHERE {ANCESTOR_PREDICATE} \
             ORDER BY match_key"
        );
        let separator = target.style().separator().to_string();
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![target.match_key(), separator], |row| {
            row_to_record(style, row)
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
