//! Filesystem adapter implementations.

mod blob_store;

pub use blob_store::FileBlobStore;
