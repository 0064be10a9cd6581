//! Taskboard: a single-user task board with drag-and-drop reordering.
//!
//! Tasks live in a fixed set of workflow columns. Dropping a task somewhere
//! renumbers the affected columns so that every column's `order` values
//! stay a contiguous `0..n` range, and the whole board is written through
//! to a key-value blob store on every change.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task records, columns, priorities
//! - **Ports**: The blob store contract
//! - **Adapters**: In-memory and file-backed blob stores
//! - **Services**: Task store, column projection, drag tracking and
//!   drop reconciliation
//!
//! # Modules
//!
//! - [`board`]: The task board
//! - [`config`]: Storage location and key

pub mod board;
pub mod config;
