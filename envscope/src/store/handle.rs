//! Lazily-opened store handle.

use crate::error::{Error, Result};

use super::config::StoreConfig;
use super::connection::Database;

/// A store that opens on first use and can be closed explicitly.
///
/// Dropping the handle releases the connection. After [`Store::close`] every
/// operation fails with [`Error::StoreClosed`]; closing twice is fine.
///
/// # Examples
///
/// ```no_run
/// use envscope::store::{Storage, Store, StoreConfig};
///
/// let mut store = Store::new(StoreConfig::new("/tmp/envscope.db"));
/// assert!(!store.is_open());
/// store.get_all_scope_paths().unwrap();
/// assert!(store.is_open());
/// store.close().unwrap();
/// assert!(store.get_all_scope_paths().is_err());
/// ```
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    db: Option<Database>,
    closed: bool,
}

impl Store {
    /// Creates a handle; nothing is opened yet.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            db: None,
            closed: false,
        }
    }

    /// Whether a connection is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.db.is_some()
    }

    /// Whether [`Store::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The configuration used to open the database.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The open database, opening it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreClosed` after `close()`, or any error from
    /// [`Database::open`].
    pub fn database(&mut self) -> Result<&mut Database> {
        if self.closed {
            return Err(Error::StoreClosed);
        }
        if self.db.is_none() {
            self.db = Some(Database::open(self.config.clone())?);
        }
        self.db.as_mut().ok_or(Error::StoreClosed)
    }

    /// Closes the connection if open. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` fails to close the connection cleanly.
    pub fn close(&mut self) -> Result<()> {
        self.closed = true;
        if let Some(db) = self.db.take() {
            db.conn.close().map_err(|(_, e)| Error::Database(e))?;
            log::debug!("closed store at {}", self.config.path.display());
        }
        Ok(())
    }
}
