//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod blob_store;

pub use blob_store::{BlobStore, BlobStoreError, BlobStoreResult};
