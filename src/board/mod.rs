//! Task board with drag-and-drop reconciliation.
//!
//! This module keeps a flat list of task records partitioned into a fixed
//! set of workflow columns, derives the visible per-column sequence from
//! search and priority filters, and turns drop gestures into a new
//! contiguous ordering that is written through to a key-value blob store.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Read-side projection, drag tracking, reconciliation and the board
//!   facade in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
