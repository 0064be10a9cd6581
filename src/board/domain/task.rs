//! Task record and the draft used to create one.

use super::{ColumnId, Priority, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// Validated input for a new task, supplied by the add-task collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<String>,
    priority: Priority,
}

impl NewTask {
    /// Creates a draft with the given title, no description and medium
    /// priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            description: None,
            priority: Priority::default(),
        })
    }

    /// Sets the description. Blank descriptions are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        self.description = (!text.trim().is_empty()).then_some(text);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// A task record as owned by the task store.
///
/// Field names follow the persisted JSON document (`columnId`, `createdAt`,
/// ...). A missing or `null` `order` reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    priority: Priority,
    column_id: ColumnId,
    #[serde(default, deserialize_with = "null_as_zero")]
    order: usize,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in `column_id` at position `order`.
    #[must_use]
    pub fn create(draft: NewTask, column_id: ColumnId, order: usize, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::generate(clock),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            column_id,
            order,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the column holding the task.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the zero-based rank within the column.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the title or description contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.as_str().to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(needle))
    }

    /// Places the task in `column_id` and refreshes `updated_at`.
    pub(crate) fn move_to(&mut self, column_id: ColumnId, clock: &impl Clock) {
        self.column_id = column_id;
        self.touch(clock);
    }

    /// Sets the rank within the current column.
    pub(crate) const fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Reads an optional rank, treating `null` like a missing field.
fn null_as_zero<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<usize>::deserialize(deserializer)?.unwrap_or_default())
}
