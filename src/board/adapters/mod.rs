//! Blob store adapters.
//!
//! - [`memory`]: process-local map, used by tests and embedders
//! - [`file`]: one JSON file per key under a data directory

pub mod file;
pub mod memory;
