//! Error types for database operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The database file could not be opened or created.
    #[error("Cannot open database at {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A table exists but lacks columns the store relies on.
    #[error("Schema mismatch: table {table} has no column {column}")]
    Schema { table: String, column: String },
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;
