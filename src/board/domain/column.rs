//! Workflow columns and their presentation metadata.

use super::ParseColumnError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a workflow column.
///
/// The set is fixed at runtime; board order follows [`ColumnId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// Work not yet started.
    Todo,
    /// Work being carried out.
    InProgress,
    /// Work awaiting review.
    Review,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// Every column, in board order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the presentation metadata for this column.
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            Self::Todo => Column::new(self, "To Do", "red"),
            Self::InProgress => Column::new(self, "In Progress", "yellow"),
            Self::Review => Column::new(self, "Review", "blue"),
            Self::Done => Column::new(self, "Done", "green"),
        }
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnError(value.to_owned())),
        }
    }
}

impl FromStr for ColumnId {
    type Err = ParseColumnError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static presentation metadata of a column. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    name: &'static str,
    accent: &'static str,
}

impl Column {
    const fn new(id: ColumnId, name: &'static str, accent: &'static str) -> Self {
        Self { id, name, accent }
    }

    /// Returns the metadata of every column, in board order.
    #[must_use]
    pub const fn catalogue() -> [Self; 4] {
        [
            ColumnId::Todo.column(),
            ColumnId::InProgress.column(),
            ColumnId::Review.column(),
            ColumnId::Done.column(),
        ]
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the accent colour token used by renderers.
    #[must_use]
    pub const fn accent(&self) -> &'static str {
        self.accent
    }
}
