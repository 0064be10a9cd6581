//! Summary counters shown in the board header.

use super::{ColumnId, Task};
use serde::Serialize;

/// Aggregate counts over every task on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    /// Number of tasks on the board.
    pub total: usize,
    /// Number of tasks in [`ColumnId::Done`].
    pub completed: usize,
    /// Number of tasks in [`ColumnId::InProgress`].
    pub in_progress: usize,
    /// Share of completed tasks as a whole percentage, rounded half up.
    pub completion_rate: usize,
}

impl BoardStats {
    /// Computes the counters for `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let count_in = |column: ColumnId| {
            tasks
                .iter()
                .filter(|task| task.column_id() == column)
                .count()
        };
        let total = tasks.len();
        let completed = count_in(ColumnId::Done);
        Self {
            total,
            completed,
            in_progress: count_in(ColumnId::InProgress),
            completion_rate: rounded_percentage(completed, total),
        }
    }
}

/// `round(part * 100 / whole)` in integer arithmetic; 0 when `whole` is 0.
fn rounded_percentage(part: usize, whole: usize) -> usize {
    part.saturating_mul(200)
        .saturating_add(whole)
        .checked_div(whole.saturating_mul(2))
        .unwrap_or(0)
}
