//! Board facade wiring the task store, projector, drag tracker and
//! reconciliation together for a single user.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use super::{
    drag::{DragSession, DragSessionTracker},
    projector::{ProjectionFilter, project},
    reconcile::{DropOutcome, commit_drop},
    store::{LoadOutcome, TaskStore, TaskStoreError},
};
use crate::board::{
    domain::{BoardStats, ColumnId, NewTask, Priority, Task, TaskDomainError, TaskId},
    ports::BlobStore,
};
use crate::config::BoardConfig;

/// Request payload for adding a task, as supplied by an input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    title: String,
    description: Option<String>,
    priority: Priority,
}

impl NewTaskRequest {
    /// Creates a request with the given title and medium priority.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// What happened when a drag gesture was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResult {
    /// No gesture was in progress.
    NotDragging,
    /// The dragged task had disappeared; the board is unchanged.
    Stale(TaskId),
    /// The task now sits in `column` at `order`.
    Moved {
        /// Moved task.
        task: TaskId,
        /// Column the task was dropped into.
        column: ColumnId,
        /// Final rank of the task in that column.
        order: usize,
    },
}

/// Single-user task board.
///
/// Every mutation is written through to the blob store before it becomes
/// visible to the next projection.
pub struct BoardService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    store: TaskStore<S>,
    drag: DragSessionTracker,
    clock: Arc<C>,
}

impl<S, C> BoardService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    /// Opens the board stored under the configured key.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the blob store cannot be read. A
    /// malformed document is not an error; the board opens empty.
    pub fn open(blobs: Arc<S>, config: &BoardConfig, clock: Arc<C>) -> BoardResult<Self> {
        let mut store = TaskStore::new(blobs, config.storage_key());
        store.load()?;
        Ok(Self {
            store,
            drag: DragSessionTracker::new(),
            clock,
        })
    }

    /// Re-reads the persisted document, replacing the in-memory board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the blob store cannot be read.
    pub fn reload(&mut self) -> BoardResult<LoadOutcome> {
        Ok(self.store.load()?)
    }

    /// Returns every task, in no particular order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.snapshot()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.store.find(id)
    }

    /// Returns the visible tasks of `column` under `filter`.
    #[must_use]
    pub fn column(&self, column: ColumnId, filter: &ProjectionFilter) -> Vec<&Task> {
        project(self.store.snapshot(), column, filter)
    }

    /// Adds a task at the end of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the title is blank, before any
    /// record exists, or [`BoardError::Store`] when the commit fails.
    pub fn add_task(&mut self, column: ColumnId, request: NewTaskRequest) -> BoardResult<Task> {
        let mut draft = NewTask::new(request.title)?.with_priority(request.priority);
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }

        let order = self
            .store
            .snapshot()
            .iter()
            .filter(|task| task.column_id() == column)
            .count();
        let task = Task::create(draft, column, order, &*self.clock);

        let mut tasks = self.store.snapshot().to_vec();
        tasks.push(task.clone());
        self.store.replace_all(tasks)?;
        info!(task = %task.id(), column = %column, order, "added task");
        Ok(task)
    }

    /// Starts dragging `task`.
    pub fn begin_drag(&mut self, task: TaskId) {
        self.drag.begin(task);
    }

    /// Reports the pointer over `column` at `index` among the tasks visible
    /// under `filter`.
    ///
    /// Returns `false` when no gesture is in progress.
    pub fn hover(&mut self, column: ColumnId, index: usize, filter: &ProjectionFilter) -> bool {
        let visible_len = self.column(column, filter).len();
        self.drag.update_hover(column, index, visible_len)
    }

    /// Returns the current drag gesture state.
    #[must_use]
    pub const fn drag_session(&self) -> &DragSession {
        self.drag.session()
    }

    /// Drops the dragged task on `column` and commits the reconciled board.
    ///
    /// The gesture ends whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the commit fails; the board is
    /// unchanged in that case.
    pub fn drop_on(
        &mut self,
        column: ColumnId,
        filter: &ProjectionFilter,
    ) -> BoardResult<DropResult> {
        let visible_len = self.column(column, filter).len();
        let index = self.drag.drop_index(column, visible_len);
        let Some(dragged) = self.drag.end() else {
            return Ok(DropResult::NotDragging);
        };

        let outcome = commit_drop(self.store.snapshot(), &dragged, column, index, &*self.clock);
        let DropOutcome::Reconciled(tasks) = outcome else {
            warn!(task = %dragged, "dropped task no longer exists");
            return Ok(DropResult::Stale(dragged));
        };

        let order = tasks
            .iter()
            .find(|task| task.id() == &dragged)
            .map_or(index, Task::order);
        self.store.replace_all(tasks)?;
        info!(task = %dragged, column = %column, order, "moved task");
        Ok(DropResult::Moved {
            task: dragged,
            column,
            order,
        })
    }

    /// Abandons the current gesture without touching the board.
    pub fn cancel_drag(&mut self) {
        self.drag.end();
    }

    /// Removes every task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the commit fails.
    pub fn clear_all(&mut self) -> BoardResult<()> {
        let removed = self.store.len();
        self.store.replace_all(Vec::new())?;
        info!(removed, "cleared board");
        Ok(())
    }

    /// Returns the board statistics.
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats::from_tasks(self.store.snapshot())
    }
}
