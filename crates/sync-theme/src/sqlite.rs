//! SQLite-backed store (feature `sqlite`).

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::{ThemeResult, ThemeStore};

/// One `preferences(key, value)` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> ThemeResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> ThemeResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> ThemeResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS preferences (
                 key   TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }
}

impl ThemeStore for SqliteStore {
    fn load(&self, key: &str) -> ThemeResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM preferences WHERE key = ?1", params![key], |r| r.get(0))
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
