/// SQLite implementation of the key-value store interface
///
/// This module provides the concrete SQLite backend the dashboard persists
/// through. Values are stored as JSON text in a single two-column table.

use std::path::PathBuf;

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::storage::{KvStore, StorageError};

/// Current store schema version
///
/// Increment this when the table layout changes.
const CURRENT_VERSION: i32 = 1;

/// SQLite-backed key-value store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given path
    pub fn open(db_path: PathBuf) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::Connection(format!("Failed to create store directory: {}", e)))?;
        }

        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open store: {}", e)))?;
        initialize_schema(&conn)?;

        tracing::info!("SQLite store initialized at: {:?}", db_path);
        Ok(Self { conn })
    }

    /// Open a transient in-memory store, used by tests
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory store: {}", e)))?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Default store location inside the user's data (or home) directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().or_else(dirs::home_dir).map(|mut path| {
            path.push("mastery-dashboard");
            path.push("dashboard.db");
            path
        })
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, text],
        )?;
        tracing::debug!("Stored {} bytes under key '{}'", text.len(), key);
        Ok(())
    }
}

/// Create the schema if needed and record the version
///
/// Idempotent, so opening an existing store is safe.
fn initialize_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| row.get(0))
        .unwrap_or(0);

    if version < CURRENT_VERSION {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        conn.execute("DELETE FROM schema_version", [])?;
        conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [CURRENT_VERSION])?;
        tracing::info!("Applied store schema v{}", CURRENT_VERSION);
    }

    Ok(())
}
