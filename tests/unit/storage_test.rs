//! Tests for the task store

use chrono::NaiveDate;
use std::path::PathBuf;

use nextup::models::Task;
use nextup::ordering::SortOrder;
use nextup::storage::{StoreError, TaskStore};
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn store_path(temp: &TempDir) -> PathBuf {
    temp.path().join("tasks.json")
}

fn names(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.name.clone()).collect()
}

// =============================================================================
// OPEN / LOAD TESTS
// =============================================================================

#[test]
fn test_open_missing_file_yields_empty_store() {
    let temp = TempDir::new().unwrap();

    let store = TaskStore::open(store_path(&temp)).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_open_malformed_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);
    std::fs::write(&path, "not a task list").unwrap();

    let result = TaskStore::open(&path);
    assert!(matches!(result, Err(StoreError::Malformed(_))));
}

#[test]
fn test_open_sorts_unordered_file() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);
    std::fs::write(
        &path,
        r#"[
            {"name": "last", "priority": 9},
            {"name": "first", "priority": 1},
            {"name": "middle", "priority": 5}
        ]"#,
    )
    .unwrap();

    let store = TaskStore::open(&path).unwrap();
    assert_eq!(names(&store.list(SortOrder::Priority)), ["first", "middle", "last"]);
}

// =============================================================================
// ADD TESTS
// =============================================================================

#[test]
fn test_add_persists_and_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);
    let task = Task::with_details(
        "file taxes",
        1,
        vec!["gather receipts".to_string()],
        Some(date("2026-04-15")),
    );

    let mut store = TaskStore::open(&path).unwrap();
    store.add(task.clone()).unwrap();

    let reopened = TaskStore::open(&path).unwrap();
    assert_eq!(reopened.tasks(), &[task][..]);
}

#[test]
fn test_add_invalid_task_rejected_and_nothing_persisted() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);

    let mut store = TaskStore::open(&path).unwrap();
    let result = store.add(Task::new("   ", 1));

    assert!(matches!(result, Err(StoreError::InvalidTask)));
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_add_allows_duplicate_names() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store.add(Task::new("water plants", 1)).unwrap();
    store.add(Task::new("water plants", 4)).unwrap();

    assert_eq!(store.len(), 2);
}

#[test]
fn test_add_keeps_store_sorted() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store.add(Task::new("c", 3)).unwrap();
    store.add(Task::new("a", 1)).unwrap();
    store.add(Task::new("b", 2)).unwrap();

    assert_eq!(names(&store.list(SortOrder::Priority)), ["a", "b", "c"]);
}

#[test]
fn test_file_is_pretty_printed_array() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);

    let mut store = TaskStore::open(&path).unwrap();
    store.add(Task::new("a", 1)).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with('['));
    assert!(content.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

// =============================================================================
// LIST TESTS
// =============================================================================

#[test]
fn test_list_by_priority_breaks_ties_on_due_date() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store
        .add(Task::with_details("later", 2, Vec::new(), Some(date("2026-06-01"))))
        .unwrap();
    store
        .add(Task::with_details("sooner", 2, Vec::new(), Some(date("2026-02-01"))))
        .unwrap();
    store.add(Task::new("top", 1)).unwrap();

    assert_eq!(names(&store.list(SortOrder::Priority)), ["top", "sooner", "later"]);
}

#[test]
fn test_list_by_date_breaks_ties_on_priority() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store.add(Task::new("undated", 1)).unwrap();
    store
        .add(Task::with_details("relaxed", 5, Vec::new(), Some(date("2026-02-01"))))
        .unwrap();
    store
        .add(Task::with_details("urgent", 1, Vec::new(), Some(date("2026-02-01"))))
        .unwrap();

    assert_eq!(names(&store.list(SortOrder::Date)), ["urgent", "relaxed", "undated"]);
}

#[test]
fn test_undated_sorts_after_dated_at_equal_priority() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store.add(Task::new("undated", 2)).unwrap();
    store
        .add(Task::with_details("dated", 2, Vec::new(), Some(date("2099-12-31"))))
        .unwrap();

    assert_eq!(names(&store.list(SortOrder::Priority)), ["dated", "undated"]);
}

#[test]
fn test_list_does_not_mutate_store_order() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store.add(Task::with_details("b", 1, Vec::new(), Some(date("2026-06-01")))).unwrap();
    store.add(Task::with_details("a", 2, Vec::new(), Some(date("2026-01-01")))).unwrap();

    let _ = store.list(SortOrder::Date);
    assert_eq!(names(&store.list(SortOrder::Priority)), ["b", "a"]);
}

// =============================================================================
// COMPLETE TESTS
// =============================================================================

#[test]
fn test_complete_removes_all_tasks_with_the_name() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);

    let mut store = TaskStore::open(&path).unwrap();
    store.add(Task::new("recurring", 1)).unwrap();
    store.add(Task::new("keep", 2)).unwrap();
    store.add(Task::new("recurring", 3)).unwrap();

    let removed = store.complete("recurring").unwrap();
    assert_eq!(removed, 2);
    assert_eq!(names(&store.list(SortOrder::Priority)), ["keep"]);

    // Removal is persisted
    let reopened = TaskStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_complete_unknown_name_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);

    let mut store = TaskStore::open(&path).unwrap();
    store.add(Task::new("keep", 1)).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let removed = store.complete("ghost").unwrap();
    assert_eq!(removed, 0);
    assert_eq!(store.len(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_complete_on_empty_store_writes_no_file() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);

    let mut store = TaskStore::open(&path).unwrap();
    assert_eq!(store.complete("anything").unwrap(), 0);
    assert!(!path.exists());
}

// =============================================================================
// NEXT ELIGIBLE TESTS
// =============================================================================

#[test]
fn test_next_eligible_on_empty_store_is_none() {
    let temp = TempDir::new().unwrap();

    let store = TaskStore::open(store_path(&temp)).unwrap();
    assert!(store.next_eligible().is_none());
}

#[test]
fn test_next_eligible_unblocks_after_completion() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store
        .add(Task::with_details("X", 1, vec!["Y".to_string()], None))
        .unwrap();
    store.add(Task::new("Y", 5)).unwrap();

    // X outranks Y but is blocked by it
    assert_eq!(store.next_eligible().unwrap().name, "Y");

    store.complete("Y").unwrap();

    // With Y gone the dependency counts as satisfied
    assert_eq!(store.next_eligible().unwrap().name, "X");
}

#[test]
fn test_next_eligible_with_dangling_dependency() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store
        .add(Task::with_details("a", 1, vec!["never existed".to_string()], None))
        .unwrap();

    assert_eq!(store.next_eligible().unwrap().name, "a");
}

#[test]
fn test_next_eligible_none_when_everything_blocked() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store.add(Task::with_details("a", 1, vec!["b".to_string()], None)).unwrap();
    store.add(Task::with_details("b", 2, vec!["a".to_string()], None)).unwrap();

    assert!(store.next_eligible().is_none());
}

#[test]
fn test_next_eligible_follows_ordering_key() {
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store.add(Task::new("second", 2)).unwrap();
    store.add(Task::new("first", 1)).unwrap();

    assert_eq!(store.next_eligible().unwrap().name, "first");
}

#[test]
fn test_completing_one_of_duplicate_names_satisfies_dependents() {
    // Completing by name removes every task with that name, so a dependent
    // referencing the shared name becomes eligible
    let temp = TempDir::new().unwrap();

    let mut store = TaskStore::open(store_path(&temp)).unwrap();
    store.add(Task::new("setup", 1)).unwrap();
    store.add(Task::new("setup", 2)).unwrap();
    store
        .add(Task::with_details("build", 1, vec!["setup".to_string()], None))
        .unwrap();

    assert_eq!(store.next_eligible().unwrap().name, "setup");

    store.complete("setup").unwrap();
    assert_eq!(store.next_eligible().unwrap().name, "build");
}
