//! Domain model for the task board.
//!
//! Tasks, columns and priorities are plain values here. Storage, rendering
//! and gesture handling stay outside of the domain boundary.

mod column;
mod error;
mod ids;
mod priority;
mod stats;
mod task;

pub use column::{Column, ColumnId};
pub use error::{ParseColumnError, ParsePriorityError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use priority::Priority;
pub use stats::BoardStats;
pub use task::{NewTask, Task};
