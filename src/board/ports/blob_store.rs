//! Key-value blob port used to persist the task document.

use std::sync::Arc;
use thiserror::Error;

/// Result type for blob store operations.
pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

/// Synchronous key-value storage of opaque text blobs.
///
/// Every write fully replaces the value held under the key.
pub trait BlobStore {
    /// Reads the blob stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the underlying medium cannot be read.
    fn get(&self, key: &str) -> BlobStoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the key is rejected or the write
    /// fails. A failed write leaves the previous blob in place.
    fn set(&self, key: &str, value: &str) -> BlobStoreResult<()>;
}

/// Errors returned by blob store implementations.
#[derive(Debug, Clone, Error)]
pub enum BlobStoreError {
    /// The key cannot be used by this store.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Shared state guarding the blobs was poisoned.
    #[error("storage lock poisoned: {0}")]
    Lock(String),

    /// Storage medium failure.
    #[error("storage I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl BlobStoreError {
    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
