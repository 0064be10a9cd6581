//! Drop reconciliation.
//!
//! Turns a drop into a new task list in which every touched column is
//! numbered `0..n` without gaps. Same-column reorders and cross-column
//! moves take the same path: the dragged task is pulled out first, then
//! inserted into the target column's ordered tasks.

use mockable::Clock;

use crate::board::domain::{ColumnId, Task, TaskId};

/// Result of [`commit_drop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged task no longer exists; nothing changes.
    Stale,
    /// The full reconciled task list, ready to be committed.
    Reconciled(Vec<Task>),
}

impl DropOutcome {
    /// Returns the reconciled list, or `None` for a stale drop.
    #[must_use]
    pub fn into_tasks(self) -> Option<Vec<Task>> {
        match self {
            Self::Stale => None,
            Self::Reconciled(tasks) => Some(tasks),
        }
    }

    /// Returns whether the drop was stale.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}

/// Computes the task list after dropping `dragged` into `target_column`
/// at `target_index`.
///
/// `target_index` counts positions among the target column's tasks once
/// the dragged task has been removed, and is clamped to that length. The
/// moved task gets the new column and a fresh `updated_at`; every task of
/// the target column is renumbered in sequence. When the task leaves
/// another column, that column is renumbered as well so it keeps no gap.
/// All other tasks are returned untouched.
#[must_use]
pub fn commit_drop(
    tasks: &[Task],
    dragged: &TaskId,
    target_column: ColumnId,
    target_index: usize,
    clock: &impl Clock,
) -> DropOutcome {
    let Some(found) = tasks.iter().find(|task| task.id() == dragged) else {
        return DropOutcome::Stale;
    };
    let source_column = found.column_id();
    let mut moved = found.clone();

    let (mut target, rest): (Vec<Task>, Vec<Task>) = tasks
        .iter()
        .filter(|task| task.id() != dragged)
        .cloned()
        .partition(|task| task.column_id() == target_column);
    let (mut source, mut untouched): (Vec<Task>, Vec<Task>) = if source_column == target_column {
        (Vec::new(), rest)
    } else {
        rest.into_iter()
            .partition(|task| task.column_id() == source_column)
    };

    target.sort_by_key(Task::order);
    moved.move_to(target_column, clock);
    target.insert(target_index.min(target.len()), moved);
    renumber(&mut target);

    source.sort_by_key(Task::order);
    renumber(&mut source);

    untouched.extend(source);
    untouched.extend(target);
    DropOutcome::Reconciled(untouched)
}

/// Sets each task's `order` to its position in `column_tasks`.
fn renumber(column_tasks: &mut [Task]) {
    for (position, task) in column_tasks.iter_mut().enumerate() {
        task.set_order(position);
    }
}
