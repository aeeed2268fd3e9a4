//! Error taxonomy for snapshot queries

use thiserror::Error;

/// Error type surfaced to callers of the query layer
///
/// A missing identifier in a relation index is not an error; lookups return
/// `Option::None` for that outcome.
#[derive(Error, Debug)]
pub enum GoError {
    /// Caller-supplied source identifier does not match the store
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed keytype or unrecognized legacy column name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The store cannot be opened or an expected table/column is absent
    #[error("Store access error: {0}")]
    Store(String),
}

/// Result type for query-layer operations
pub type GoResult<T> = Result<T, GoError>;
