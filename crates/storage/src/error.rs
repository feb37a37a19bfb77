//! Storage error types.

use thiserror::Error;

/// Errors that can occur when interacting with a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key contains characters the backend cannot represent.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
