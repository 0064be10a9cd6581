//! In-memory blob store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{BlobStore, BlobStoreError, BlobStoreResult};

/// Thread-safe in-memory blob store.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect or tamper with what a service wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBlobStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, key: &str) -> BlobStoreResult<Option<String>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|err| BlobStoreError::Lock(err.to_string()))?;
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BlobStoreResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|err| BlobStoreError::Lock(err.to_string()))?;
        blobs.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
