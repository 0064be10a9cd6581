//! Tests for the write-through task store.

use std::sync::Arc;

use super::support::{StepClock, task};
use crate::board::{
    adapters::memory::InMemoryBlobStore,
    domain::{ColumnId, Task},
    ports::{BlobStore, BlobStoreError, BlobStoreResult},
    services::{LoadOutcome, TaskStore, TaskStoreError},
};
use rstest::{fixture, rstest};

const KEY: &str = "kanbanTasks";

#[fixture]
fn blobs() -> Arc<InMemoryBlobStore> {
    Arc::new(InMemoryBlobStore::new())
}

#[fixture]
fn clock() -> StepClock {
    StepClock::default()
}

fn sorted_by_id(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|left, right| left.id().cmp(right.id()));
    tasks
}

#[rstest]
fn load_of_absent_blob_yields_empty_store(blobs: Arc<InMemoryBlobStore>) {
    let mut store = TaskStore::new(blobs, KEY);

    let outcome = store.load().expect("load should succeed");

    assert_eq!(outcome, LoadOutcome::Absent);
    assert!(store.is_empty());
}

#[rstest]
fn load_after_replace_all_returns_same_tasks(blobs: Arc<InMemoryBlobStore>, clock: StepClock) {
    let tasks = vec![
        task("A", ColumnId::Todo, 0, &clock),
        task("B", ColumnId::Done, 0, &clock),
        task("C", ColumnId::Todo, 1, &clock),
    ];
    let mut writer = TaskStore::new(Arc::clone(&blobs), KEY);
    writer
        .replace_all(tasks.clone())
        .expect("replace_all should succeed");

    let mut reader = TaskStore::new(blobs, KEY);
    let outcome = reader.load().expect("load should succeed");

    assert_eq!(outcome, LoadOutcome::Loaded(3));
    assert_eq!(sorted_by_id(reader.snapshot().to_vec()), sorted_by_id(tasks));
}

#[rstest]
#[case("not json at all")]
#[case(r#"{"id": "not-a-list"}"#)]
#[case(r#"[{"id": "t1", "title": "", "columnId": "todo", "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"}]"#)]
#[case(r#"[{"id": "t1", "title": "x", "columnId": "backlog", "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"}]"#)]
fn malformed_blob_is_discarded(
    blobs: Arc<InMemoryBlobStore>,
    clock: StepClock,
    #[case] document: &str,
) {
    let mut store = TaskStore::new(Arc::clone(&blobs), KEY);
    store
        .replace_all(vec![task("kept in memory", ColumnId::Todo, 0, &clock)])
        .expect("seed should succeed");
    blobs.set(KEY, document).expect("tamper should succeed");

    let outcome = store.load().expect("malformed blob is not an error");

    assert_eq!(outcome, LoadOutcome::Discarded);
    assert!(store.is_empty());
}

#[rstest]
fn load_reads_null_order_as_zero(blobs: Arc<InMemoryBlobStore>) {
    let document = r#"[
        {"id": "t1", "title": "Imported", "columnId": "todo", "order": null,
         "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"},
        {"id": "t2", "title": "Ranked", "columnId": "todo", "order": 1,
         "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"}
    ]"#;
    blobs.set(KEY, document).expect("seed should succeed");
    let mut store = TaskStore::new(blobs, KEY);

    let outcome = store.load().expect("load should succeed");

    assert_eq!(outcome, LoadOutcome::Loaded(2));
    let orders: Vec<(&str, usize)> = store
        .snapshot()
        .iter()
        .map(|task| (task.id().as_str(), task.order()))
        .collect();
    assert_eq!(orders, vec![("t1", 0), ("t2", 1)]);
}

#[rstest]
fn replace_all_overwrites_previous_document(blobs: Arc<InMemoryBlobStore>, clock: StepClock) {
    let mut store = TaskStore::new(Arc::clone(&blobs), KEY);
    store
        .replace_all(vec![task("old", ColumnId::Todo, 0, &clock)])
        .expect("first write should succeed");
    store.replace_all(Vec::new()).expect("clear should succeed");

    let stored = blobs.get(KEY).expect("read should succeed");

    assert_eq!(stored.as_deref(), Some("[]"));
    assert!(store.is_empty());
}

/// Blob store whose writes always fail.
struct ReadOnlyBlobStore;

impl BlobStore for ReadOnlyBlobStore {
    fn get(&self, _key: &str) -> BlobStoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> BlobStoreResult<()> {
        Err(BlobStoreError::io(std::io::Error::other("read-only medium")))
    }
}

#[rstest]
fn failed_write_leaves_memory_untouched(clock: StepClock) {
    let mut store = TaskStore::new(Arc::new(ReadOnlyBlobStore), KEY);

    let result = store.replace_all(vec![task("lost", ColumnId::Todo, 0, &clock)]);

    assert!(matches!(result, Err(TaskStoreError::Blob(BlobStoreError::Io(_)))));
    assert!(store.is_empty());
}

#[rstest]
fn find_locates_task_by_id(blobs: Arc<InMemoryBlobStore>, clock: StepClock) {
    let wanted = task("needle", ColumnId::Review, 0, &clock);
    let mut store = TaskStore::new(blobs, KEY);
    store
        .replace_all(vec![task("hay", ColumnId::Review, 1, &clock), wanted.clone()])
        .expect("replace_all should succeed");

    assert_eq!(store.find(wanted.id()), Some(&wanted));
    assert_eq!(store.len(), 2);
    assert_eq!(store.key(), KEY);
}
