//! Error types for SQLite snapshot access

use godb_core::GoError;
use thiserror::Error;

/// SQLite snapshot access error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// Snapshot file cannot be opened
    #[error("Open error: {0}")]
    Open(String),

    /// Snapshot is missing an expected table or column
    #[error("Schema error: {0}")]
    Schema(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for snapshot access operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for GoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Open(msg) => GoError::Store(msg),
            StoreError::Schema(msg) => GoError::Store(msg),
            StoreError::Sqlite(e) => GoError::Store(e.to_string()),
        }
    }
}
