//! Unit tests for the task board.

mod drag_tests;
mod store_tests;
mod support;
