//! Cart error types.

use thiserror::Error;

/// Errors that can occur during cart mutations.
///
/// Read-side corruption never produces an error; it is recovered as an
/// empty cart. Only failed persistence writes surface here.
#[derive(Debug, Error)]
pub enum CartError {
    /// The write-through to storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    /// The cart map could not be serialized for persistence.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
