//! Local durable storage
//!
//! A small sqlite-backed key-value store under the platform data directory.
//! Two keys live here: the favorite-status blob and the first-run flag, both
//! stored as opaque JSON strings.

mod favorites;
mod flags;
mod migrations;

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::instrument;

use crate::error::Result;

pub use favorites::{FavoriteStore, Favorites};
pub use flags::FlagStore;

/// Main local storage handle
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open or create the store at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get the favorite-status store
    pub fn favorites(&self) -> FavoriteStore<'_> {
        FavoriteStore::new(self)
    }

    /// Get the app-flag store
    pub fn flags(&self) -> FlagStore<'_> {
        FlagStore::new(self)
    }

    /// Read the raw JSON string stored under `key`, if any.
    pub(crate) fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Overwrite the JSON string stored under `key`.
    pub(crate) fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
