//! Durable key-value storage for the storefront state engine.
//!
//! Stores persist string-serialized JSON values under namespaced string
//! keys. All operations are synchronous and complete before returning;
//! every mutation in the crates above this one writes through to storage
//! before the call returns, so a reload always observes the latest write.
//!
//! Two backends are provided:
//! - [`InMemoryStorage`] for tests and throwaway sessions
//! - [`FileStorage`] for durable on-disk persistence

pub mod codec;
pub mod error;
pub mod file;
pub mod memory;

pub use codec::parse_or_default;
pub use error::{Result, StorageError};
pub use file::FileStorage;
pub use memory::InMemoryStorage;

/// Core trait for key-value storage backends.
///
/// Keys are flat strings; values are opaque strings (by convention,
/// serialized JSON). A missing key is not an error: `get` returns
/// `Ok(None)` and `remove` is a no-op.
pub trait Storage {
    /// Retrieves the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The write is complete when this returns; a failed write is reported
    /// to the caller rather than silently dropped.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<()>;
}
