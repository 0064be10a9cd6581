//! Application services for the task board.

mod board;
pub mod drag;
pub mod projector;
pub mod reconcile;
mod store;

pub use board::{BoardError, BoardResult, BoardService, DropResult, NewTaskRequest};
pub use drag::{DragSession, DragSessionTracker, insertion_index, insertion_index_for};
pub use projector::{PriorityFilter, ProjectionFilter, project};
pub use reconcile::{DropOutcome, commit_drop};
pub use store::{LoadOutcome, TaskStore, TaskStoreError, TaskStoreResult};
