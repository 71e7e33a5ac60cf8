//! Storage Errors

use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Everything that can go wrong between a todo and its stored text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Caller passed a record without an id, or an empty key
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No backing storage (e.g. `localStorage` disabled)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// The backing storage rejected a read or write
    #[error("Storage backend error: {0}")]
    Backend(String),
    /// A record could not be encoded or decoded
    #[error("Serialization error for key {key}: {message}")]
    Serialization { key: String, message: String },
}
