//! Shared fixtures for board unit tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex};

use crate::board::domain::{ColumnId, NewTask, Priority, Task};

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct StepClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl StepClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock should not be poisoned");
        *now += by;
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::starting_at(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock should not be poisoned")
    }
}

/// Builds a task with the given title, column and order.
pub fn task(title: &str, column: ColumnId, order: usize, clock: &StepClock) -> Task {
    let draft = NewTask::new(title).expect("test titles are not blank");
    Task::create(draft, column, order, clock)
}

/// Builds a task with a description and priority.
pub fn detailed_task(
    title: &str,
    description: &str,
    priority: Priority,
    column: ColumnId,
    order: usize,
    clock: &StepClock,
) -> Task {
    let draft = NewTask::new(title)
        .expect("test titles are not blank")
        .with_description(description)
        .with_priority(priority);
    Task::create(draft, column, order, clock)
}

/// Titles of `column`'s tasks sorted by order, paired with their order.
pub fn column_layout(tasks: &[Task], column: ColumnId) -> Vec<(String, usize)> {
    let mut layout: Vec<(String, usize)> = tasks
        .iter()
        .filter(|task| task.column_id() == column)
        .map(|task| (task.title().as_str().to_owned(), task.order()))
        .collect();
    layout.sort_by_key(|(_, order)| *order);
    layout
}

/// Returns whether every column's orders are exactly `0..n`.
pub fn orders_are_contiguous(tasks: &[Task]) -> bool {
    ColumnId::ALL.iter().all(|column| {
        let mut orders: Vec<usize> = tasks
            .iter()
            .filter(|task| task.column_id() == *column)
            .map(Task::order)
            .collect();
        orders.sort_unstable();
        let count = orders.len();
        orders.into_iter().eq(0..count)
    })
}
