//! Match store integration tests.
//!
//! The JSON file store is exercised against real files in temporary
//! directories, and wired into a session end to end.

mod common;

use std::fs;

use rust_pairs::{
    AudioLog, InstantPresentation, JsonFileStore, MatchHistory, MatchRecord, MatchStore,
    PersistenceError, Session, SessionStatus,
};

// =============================================================================
// JsonFileStore
// =============================================================================

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_append_then_load_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = JsonFileStore::new(&path);

    store.append(MatchRecord::new(8, 8, 12, 40.5)).unwrap();
    store.append(MatchRecord::new(2, 2, 2, 3.0)).unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].moves_at_completion, 12);
    assert_eq!(records[1].summary, "2/2");

    // A fresh handle on the same file sees the same history.
    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load_all().unwrap(), records);
}

#[test]
fn test_file_is_single_matches_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = JsonFileStore::new(&path);

    store.append(MatchRecord::new(8, 8, 9, 22.0)).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["matches"].as_array().unwrap().len(), 1);
    assert_eq!(json["matches"][0]["summary"], "8/8");
    assert_eq!(json["matches"][0]["moves_at_completion"], 9);

    let history: MatchHistory = serde_json::from_value(json).unwrap();
    assert_eq!(history.matches.len(), 1);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("history.json");
    let mut store = JsonFileStore::new(&path);

    store.append(MatchRecord::new(1, 1, 1, 1.0)).unwrap();
    assert!(path.exists());
}

#[test]
fn test_clear_removes_history() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("history.json"));

    // Clearing nothing is fine.
    store.clear().unwrap();

    store.append(MatchRecord::new(8, 8, 10, 30.0)).unwrap();
    store.clear().unwrap();

    assert!(store.load_all().unwrap().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn test_corrupt_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "{ not json").unwrap();

    let mut store = JsonFileStore::new(&path);
    assert!(matches!(store.load_all(), Err(PersistenceError::Decode { .. })));

    // Appending must not clobber a file it cannot read.
    assert!(matches!(
        store.append(MatchRecord::new(1, 1, 1, 1.0)),
        Err(PersistenceError::Decode { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be.
    let store = JsonFileStore::new(dir.path());

    let err = store.load_all().unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));
    assert!(err.to_string().contains("i/o error"));
}

// =============================================================================
// Session Integration
// =============================================================================

/// A won session lands in the file exactly once.
#[test]
fn test_session_writes_history_file() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let config = common::immediate_config().with_grid(2, 2);
    let store = JsonFileStore::new(&path);
    let mut session =
        Session::start_session(config, InstantPresentation, AudioLog::new(), store).unwrap();

    for (x, y) in common::pairs(&session) {
        session.select(x);
        session.select(y);
    }
    assert_eq!(session.tick(0.0).unwrap(), SessionStatus::Won);
    session.tick(1.0).unwrap();

    let records = JsonFileStore::new(&path).load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].summary, "2/2");
    assert_eq!(records[0].moves_at_completion, 2);

    // Play again on the same store: history grows.
    session.restart().unwrap();
    for (x, y) in common::pairs(&session) {
        session.select(x);
        session.select(y);
    }
    session.tick(0.0).unwrap();

    assert_eq!(session.store().load_all().unwrap().len(), 2);
}
