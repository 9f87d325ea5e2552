//! Integration tests for the storage layer: blob round-trips, fallback on
//! malformed data, write-failure reporting, and the theme slot.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskmaster::app::{App, NotifyKind};
use taskmaster::config::AppConfig;
use taskmaster::storage::{Storage, TASKS_KEY, THEME_KEY};
use taskmaster::ui::theme::ThemeKind;
use taskmaster_core::store::TaskStore;
use taskmaster_core::task::Priority;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn seeded_store() -> TaskStore {
    let mut store = TaskStore::new();
    let id = store.add("first", Priority::Low).unwrap().id;
    store.add("second", Priority::High).unwrap();
    store.toggle(&id).unwrap();
    store.edit(&id, "first (edited)", Priority::Medium).unwrap();
    store
}

fn key(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

// ---------------------------------------------------------------------------
// Task blob round-trips
// ---------------------------------------------------------------------------

#[test]
fn save_load_round_trip_preserves_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path().join("data")).unwrap();
    let store = seeded_store();

    storage.save_tasks(store.tasks()).unwrap();
    let loaded = storage.load_tasks();

    assert_eq!(loaded, store.tasks());
    // Spot-check mutated fields survived, not just ids.
    assert_eq!(loaded[0].text, "first (edited)");
    assert!(loaded[0].completed);
    assert!(loaded[0].completed_at.is_some());
    assert!(loaded[0].updated_at.is_some());
}

#[test]
fn reopened_storage_sees_the_same_blob() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("data");
    let store = seeded_store();

    {
        let storage = Storage::open(root.clone()).unwrap();
        storage.save_tasks(store.tasks()).unwrap();
    }

    let storage = Storage::open(root).unwrap();
    assert_eq!(storage.load_tasks(), store.tasks());
}

#[test]
fn load_with_no_blob_yields_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path().join("data")).unwrap();
    assert!(storage.load_tasks().is_empty());
}

#[test]
fn load_with_malformed_blob_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path().join("data")).unwrap();
    fs::write(storage.root().join(TASKS_KEY), "definitely not json").unwrap();
    assert!(storage.load_tasks().is_empty());
}

#[test]
fn save_overwrites_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path().join("data")).unwrap();

    storage.save_tasks(seeded_store().tasks()).unwrap();
    let mut smaller = TaskStore::new();
    smaller.add("only one", Priority::Medium).unwrap();
    storage.save_tasks(smaller.tasks()).unwrap();

    let loaded = storage.load_tasks();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text, "only one");
}

// ---------------------------------------------------------------------------
// Write-failure reporting
// ---------------------------------------------------------------------------

#[test]
fn save_failure_is_reported_but_memory_is_retained() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path().join("data")).unwrap();
    // A directory squatting on the slot path makes every save fail.
    fs::create_dir(storage.root().join(TASKS_KEY)).unwrap();

    let mut app = App::new(
        TaskStore::new(),
        storage,
        &AppConfig::default(),
        ThemeKind::Light,
    );
    key(&mut app, KeyCode::Char('a'));
    for c in "survives".chars() {
        key(&mut app, KeyCode::Char(c));
    }
    key(&mut app, KeyCode::Enter);

    // The in-memory effect of the add is retained; the failure surfaces as
    // an error notification.
    assert_eq!(app.store.len(), 1);
    assert_eq!(
        app.notification.as_ref().map(|n| n.kind),
        Some(NotifyKind::Error)
    );
}

// ---------------------------------------------------------------------------
// Theme slot
// ---------------------------------------------------------------------------

#[test]
fn theme_defaults_to_light_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path().join("data")).unwrap();

    assert_eq!(storage.load_theme(), ThemeKind::Light);
    storage.save_theme(ThemeKind::Dark).unwrap();
    assert_eq!(storage.load_theme(), ThemeKind::Dark);

    let raw = fs::read_to_string(storage.root().join(THEME_KEY)).unwrap();
    assert_eq!(raw, "dark");
}

#[test]
fn theme_garbage_value_falls_back_to_light() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path().join("data")).unwrap();
    fs::write(storage.root().join(THEME_KEY), "chartreuse").unwrap();
    assert_eq!(storage.load_theme(), ThemeKind::Light);
}
