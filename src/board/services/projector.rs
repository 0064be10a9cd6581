//! Read-side projection of a column's visible tasks.

use std::fmt;
use std::str::FromStr;

use crate::board::domain::{ColumnId, ParsePriorityError, Priority, Task};

/// Priority criterion of a [`ProjectionFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every priority is visible.
    #[default]
    All,
    /// Only tasks with this priority are visible.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether a task with `priority` passes the filter.
    #[must_use]
    pub fn admits(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Priority::try_from(value).map(Self::Only)
    }
}

impl FromStr for PriorityFilter {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(priority) => fmt::Display::fmt(priority, f),
        }
    }
}

/// Search and priority criteria applied to every column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionFilter {
    search: String,
    priority: PriorityFilter,
}

impl ProjectionFilter {
    /// Creates a filter that lets every task through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term. An empty term disables searching.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the priority criterion.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the priority criterion.
    #[must_use]
    pub const fn priority(&self) -> PriorityFilter {
        self.priority
    }
}

/// Returns the tasks of `column` that pass `filter`, ascending by `order`.
///
/// The search term matches title or description as a case-insensitive
/// substring. Tasks sharing an `order` keep their relative position in
/// `tasks`.
#[must_use]
pub fn project<'a>(tasks: &'a [Task], column: ColumnId, filter: &ProjectionFilter) -> Vec<&'a Task> {
    let needle = filter.search.to_lowercase();
    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.column_id() == column)
        .filter(|task| needle.is_empty() || task.mentions(&needle))
        .filter(|task| filter.priority.admits(task.priority()))
        .collect();
    visible.sort_by_key(|task| task.order());
    visible
}
