//! SQLite-backed key-value persistence for Quotable.
//!
//! The store keeps a handful of string values under well-known keys:
//! the serialized quote list, the last selected category filter, and
//! the outcome of the last sync attempt.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Key holding the JSON-serialized quote list.
pub const KEY_QUOTES: &str = "quotes";

/// Key holding the last selected category filter.
pub const KEY_LAST_FILTER: &str = "last_category_filter";

/// Key holding the JSON-serialized state of the last sync attempt.
pub const KEY_SYNC_STATE: &str = "sync_state";

/// Returns the data directory, creating it if needed.
///
/// Defaults to `~/.quotable`; the `QUOTABLE_HOME` environment variable
/// overrides it (used by tests and scripted setups).
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("QUOTABLE_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .context("Could not find home directory")?
            .join(".quotable"),
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the default database path
pub fn default_db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("quotable.db"))
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open the default database
    pub fn open_default() -> Result<Self> {
        let path = default_db_path()?;
        Self::open(&path)
    }

    /// Run migrations
    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Reads the value stored under a key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to read value")
    }

    /// Writes a value under a key, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }
}
