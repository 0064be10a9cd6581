//! Drag gesture tracking.
//!
//! A gesture moves through `Idle -> Dragging -> Hovering* -> Idle`. The
//! tracker only ever sees resolved column identifiers and insertion
//! indices; hit-testing against rendered items stays with the renderer,
//! which can use [`insertion_index`] to turn its midpoint comparisons into
//! an index.

use crate::board::domain::{ColumnId, TaskId};

/// State of the current drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A task is being dragged but is not over any column.
    Dragging {
        /// Task being dragged.
        task: TaskId,
    },
    /// A task is being dragged over a column.
    Hovering {
        /// Task being dragged.
        task: TaskId,
        /// Column under the pointer.
        column: ColumnId,
        /// Insertion index among the column's visible tasks.
        index: usize,
    },
}

impl DragSession {
    /// Returns the dragged task, if a gesture is in progress.
    #[must_use]
    pub const fn dragged_task(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging { task } | Self::Hovering { task, .. } => Some(task),
        }
    }

    /// Returns the hovered column and insertion index, if any.
    #[must_use]
    pub const fn hover(&self) -> Option<(ColumnId, usize)> {
        match self {
            Self::Hovering { column, index, .. } => Some((*column, *index)),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }

    /// Returns whether a gesture is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Holds the single drag gesture of the board.
#[derive(Debug, Default)]
pub struct DragSessionTracker {
    session: DragSession,
}

impl DragSessionTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Starts dragging `task`, discarding any previous gesture.
    pub fn begin(&mut self, task: TaskId) {
        self.session = DragSession::Dragging { task };
    }

    /// Records that the pointer is over `column` at `index`, clamped to
    /// `visible_len`.
    ///
    /// Returns `false` and changes nothing when no gesture is in progress.
    pub fn update_hover(&mut self, column: ColumnId, index: usize, visible_len: usize) -> bool {
        let Some(task) = self.session.dragged_task().cloned() else {
            return false;
        };
        self.session = DragSession::Hovering {
            task,
            column,
            index: index.min(visible_len),
        };
        true
    }

    /// Insertion index to use when the task is dropped on `column`.
    ///
    /// This is the hovered index when the pointer was last over that same
    /// column, otherwise the end of the column (`visible_len`).
    #[must_use]
    pub fn drop_index(&self, column: ColumnId, visible_len: usize) -> usize {
        match self.session.hover() {
            Some((hovered, index)) if hovered == column => index.min(visible_len),
            _ => visible_len,
        }
    }

    /// Ends the gesture. Safe to call in any state.
    ///
    /// Returns the task that was being dragged, if any.
    pub fn end(&mut self) -> Option<TaskId> {
        match std::mem::take(&mut self.session) {
            DragSession::Idle => None,
            DragSession::Dragging { task } | DragSession::Hovering { task, .. } => Some(task),
        }
    }
}

/// Picks the insertion index from ordered boundary tests.
///
/// Each item says whether the pointer is above the midpoint of the visible
/// task at that position. The first `true` wins; with none, the index is
/// one past the last task.
#[must_use]
pub fn insertion_index<I>(pointer_above_midpoints: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    let mut tested = 0;
    for above in pointer_above_midpoints {
        if above {
            return tested;
        }
        tested += 1;
    }
    tested
}

/// [`insertion_index`] for a pointer coordinate and the midpoints of the
/// visible tasks, top to bottom.
#[must_use]
pub fn insertion_index_for<T>(pointer: &T, midpoints: &[T]) -> usize
where
    T: PartialOrd,
{
    insertion_index(midpoints.iter().map(|midpoint| pointer < midpoint))
}
