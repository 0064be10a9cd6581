//! Canonical in-memory task list with write-through persistence.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{
    domain::{Task, TaskId},
    ports::{BlobStore, BlobStoreError},
};

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Errors returned by [`TaskStore`].
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// The blob store failed.
    #[error(transparent)]
    Blob(#[from] BlobStoreError),

    /// The task list could not be encoded.
    #[error("failed to serialize task list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What [`TaskStore::load`] found under the storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing was stored; the store is empty.
    Absent,
    /// The stored document held this many tasks.
    Loaded(usize),
    /// The stored document did not match the task schema and was ignored;
    /// the store is empty.
    Discarded,
}

/// Owns the canonical task list and mirrors every change to a blob store.
///
/// The list itself carries no meaning in its sequence; display order comes
/// from each task's column and `order`.
#[derive(Debug)]
pub struct TaskStore<S>
where
    S: BlobStore,
{
    blobs: Arc<S>,
    key: String,
    tasks: Vec<Task>,
}

impl<S> TaskStore<S>
where
    S: BlobStore,
{
    /// Creates an empty store persisting under `key`. Call
    /// [`TaskStore::load`] to read what is already stored.
    #[must_use]
    pub fn new(blobs: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            blobs,
            key: key.into(),
            tasks: Vec::new(),
        }
    }

    /// Replaces the in-memory list with the persisted document.
    ///
    /// A missing document yields an empty store. A document that does not
    /// parse as a task list is discarded and also yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Blob`] when the blob store cannot be read;
    /// the in-memory list is left unchanged in that case.
    pub fn load(&mut self) -> TaskStoreResult<LoadOutcome> {
        let Some(raw) = self.blobs.get(&self.key)? else {
            debug!(key = %self.key, "no stored task list");
            self.tasks.clear();
            return Ok(LoadOutcome::Absent);
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                let count = tasks.len();
                debug!(key = %self.key, count, "loaded task list");
                self.tasks = tasks;
                Ok(LoadOutcome::Loaded(count))
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding malformed task list");
                self.tasks.clear();
                Ok(LoadOutcome::Discarded)
            }
        }
    }

    /// Overwrites both the persisted document and the in-memory list with
    /// `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when encoding or writing fails; nothing
    /// changes in that case.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> TaskStoreResult<()> {
        let document = serde_json::to_string(&tasks)?;
        self.blobs.set(&self.key, &document)?;
        debug!(key = %self.key, count = tasks.len(), "committed task list");
        self.tasks = tasks;
        Ok(())
    }

    /// Returns the current task list.
    #[must_use]
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
