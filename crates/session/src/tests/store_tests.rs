// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{JsonFileStore, MemoryStore, SessionStore};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_state_path() -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "kiosk-session-test-{}-{n}.json",
        std::process::id()
    ))
}

#[test]
fn test_memory_store_set_get_remove() {
    let store = MemoryStore::new();

    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k"), Some(String::from("v")));
    store.set("k", "w");
    assert_eq!(store.get("k"), Some(String::from("w")));
    store.remove("k");
    assert_eq!(store.get("k"), None);
    // Removing an absent key is a no-op.
    store.remove("k");
}

#[test]
fn test_file_store_survives_reopen() {
    let path = temp_state_path();

    {
        let store = JsonFileStore::open(&path);
        store.set("authToken", "abc");
        store.set("connectionStatus", "OK");
        store.remove("authToken");
    }

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get("authToken"), None);
    assert_eq!(reopened.get("connectionStatus"), Some(String::from("OK")));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_file_store_opens_empty_on_corrupt_file() {
    let path = temp_state_path();
    std::fs::write(&path, "{not json at all").expect("write corrupt file");

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get("anything"), None);

    // The store must still be writable afterwards.
    store.set("k", "v");
    assert_eq!(store.get("k"), Some(String::from("v")));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_file_store_missing_file_opens_empty() {
    let path = temp_state_path();
    let store = JsonFileStore::open(&path);
    assert_eq!(store.get("k"), None);
}
