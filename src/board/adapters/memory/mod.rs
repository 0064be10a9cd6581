//! In-memory adapter implementations.

mod blob_store;

pub use blob_store::InMemoryBlobStore;
