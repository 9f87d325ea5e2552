//! Integration tests for JSON export and import.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;

use taskmaster::app::{App, NotifyKind};
use taskmaster::config::AppConfig;
use taskmaster::storage::{self, Storage, TASKS_KEY};
use taskmaster::ui::theme::ThemeKind;
use taskmaster_core::codec;
use taskmaster_core::store::TaskStore;
use taskmaster_core::task::Priority;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn seeded_store() -> TaskStore {
    let mut store = TaskStore::new();
    store.add("pack bags", Priority::High).unwrap();
    store.add("book flights", Priority::Medium).unwrap();
    store.add("water plants", Priority::Low).unwrap();
    store
}

fn make_app(dir: &std::path::Path, store: TaskStore) -> App {
    let storage = Storage::open(dir.join("data")).unwrap();
    App::new(store, storage, &AppConfig::default(), ThemeKind::Light)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn export_writes_two_space_indented_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store();
    let path = dir.path().join("backup.json");

    storage::export_to(&path, store.tasks()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("[\n  {\n    "));
    // The export is a faithful snapshot of the full collection.
    assert_eq!(codec::decode(&contents).unwrap(), store.tasks());
}

#[test]
fn export_of_empty_collection_is_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    storage::export_to(&path, &[]).unwrap();
    assert!(codec::decode(&fs::read_to_string(&path).unwrap())
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

#[test]
fn import_replaces_collection_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("backup.json");
    storage::export_to(&backup, seeded_store().tasks()).unwrap();

    let mut existing = TaskStore::new();
    existing.add("will be replaced", Priority::Medium).unwrap();
    let mut app = make_app(dir.path(), existing);

    app.import_from(&backup);

    assert_eq!(app.store.len(), 3);
    assert!(app.store.tasks().iter().all(|t| t.text != "will be replaced"));
    assert_eq!(
        app.notification.as_ref().map(|n| n.kind),
        Some(NotifyKind::Success)
    );
}

#[test]
fn import_is_persisted_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("backup.json");
    storage::export_to(&backup, seeded_store().tasks()).unwrap();

    {
        let mut app = make_app(dir.path(), TaskStore::new());
        app.import_from(&backup);
    }

    let storage = Storage::open(dir.path().join("data")).unwrap();
    assert_eq!(storage.load_tasks().len(), 3);
}

#[test]
fn import_malformed_json_reports_error_and_keeps_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "this is not a task list").unwrap();

    let mut app = make_app(dir.path(), seeded_store());
    let snapshot = app.store.tasks().to_vec();

    app.import_from(&bad);

    assert_eq!(app.store.tasks(), snapshot.as_slice());
    assert_eq!(
        app.notification.as_ref().map(|n| n.kind),
        Some(NotifyKind::Error)
    );
    // The tasks slot was never clobbered by the failed import.
    let slot = dir.path().join("data").join(TASKS_KEY);
    assert!(!slot.exists());
}

#[test]
fn import_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = make_app(dir.path(), seeded_store());
    app.import_from(&dir.path().join("does-not-exist.json"));
    assert_eq!(app.store.len(), 3);
    assert_eq!(
        app.notification.as_ref().map(|n| n.kind),
        Some(NotifyKind::Error)
    );
}
