/// Persistence boundary for the dashboard
///
/// The dashboard persists through a generic string-keyed store of JSON
/// values. Two keys are in use: the full habit collection and the category
/// taxonomy, each written whole after every mutation.

pub mod sqlite;

// Re-export the main storage types
pub use sqlite::SqliteStore;

use serde_json::Value;
use thiserror::Error;

/// Store key holding the JSON array of habit records
pub const HABITS_KEY: &str = "habits";

/// Store key holding the JSON object of the category taxonomy
pub const CATEGORIES_KEY: &str = "categories";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String-keyed store of JSON values
///
/// The trait keeps the dashboard decoupled from any particular backend;
/// the crate ships a SQLite implementation and tests use it in-memory.
pub trait KvStore {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError>;
}
