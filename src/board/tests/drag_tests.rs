//! Tests for the drag session state machine.

use crate::board::domain::{ColumnId, TaskId};
use crate::board::services::{
    DragSession, DragSessionTracker, insertion_index, insertion_index_for,
};
use rstest::{fixture, rstest};

#[fixture]
fn tracker() -> DragSessionTracker {
    DragSessionTracker::new()
}

#[rstest]
fn tracker_starts_idle(tracker: DragSessionTracker) {
    assert_eq!(tracker.session(), &DragSession::Idle);
    assert!(!tracker.session().is_active());
}

#[rstest]
fn begin_then_hover_records_clamped_target(mut tracker: DragSessionTracker) {
    tracker.begin(TaskId::from("a"));
    assert!(tracker.update_hover(ColumnId::Review, 7, 3));

    assert_eq!(
        tracker.session(),
        &DragSession::Hovering {
            task: TaskId::from("a"),
            column: ColumnId::Review,
            index: 3,
        }
    );
}

#[rstest]
fn hover_without_gesture_is_ignored(mut tracker: DragSessionTracker) {
    assert!(!tracker.update_hover(ColumnId::Todo, 0, 0));
    assert_eq!(tracker.session(), &DragSession::Idle);
}

#[rstest]
fn begin_discards_previous_hover(mut tracker: DragSessionTracker) {
    tracker.begin(TaskId::from("a"));
    tracker.update_hover(ColumnId::Done, 1, 2);
    tracker.begin(TaskId::from("b"));

    assert_eq!(
        tracker.session(),
        &DragSession::Dragging {
            task: TaskId::from("b")
        }
    );
    assert_eq!(tracker.session().hover(), None);
}

#[rstest]
fn end_is_idempotent(mut tracker: DragSessionTracker) {
    tracker.begin(TaskId::from("a"));

    assert_eq!(tracker.end(), Some(TaskId::from("a")));
    assert_eq!(tracker.end(), None);
    assert_eq!(tracker.session(), &DragSession::Idle);
}

#[rstest]
fn drop_index_uses_hover_only_for_the_hovered_column(mut tracker: DragSessionTracker) {
    tracker.begin(TaskId::from("a"));
    tracker.update_hover(ColumnId::Todo, 1, 4);

    assert_eq!(tracker.drop_index(ColumnId::Todo, 4), 1);
    assert_eq!(tracker.drop_index(ColumnId::Done, 2), 2);
}

#[rstest]
fn drop_index_without_hover_appends(mut tracker: DragSessionTracker) {
    tracker.begin(TaskId::from("a"));
    assert_eq!(tracker.drop_index(ColumnId::InProgress, 5), 5);
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![true, true], 0)]
#[case(vec![false, true, true], 1)]
#[case(vec![false, false, false], 3)]
fn insertion_index_picks_first_boundary_above_pointer(
    #[case] tests: Vec<bool>,
    #[case] expected: usize,
) {
    assert_eq!(insertion_index(tests), expected);
}

#[rstest]
fn insertion_index_for_compares_pointer_with_midpoints() {
    let midpoints = [20, 60, 100];

    assert_eq!(insertion_index_for(&10, &midpoints), 0);
    assert_eq!(insertion_index_for(&61, &midpoints), 2);
    assert_eq!(insertion_index_for(&150, &midpoints), 3);
}
