// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the variable store.
//!
//! Exercises `VariableStore` against a real temporary directory.

use principium::storage::VariableStore;
use tempfile::TempDir;

fn fresh_store() -> (TempDir, VariableStore) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let store = VariableStore::new(temp.path().join("Storage")).unwrap();
    (temp, store)
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn store_set_then_get() {
    let (_temp, store) = fresh_store();

    store.set("count", Some("1")).unwrap();

    assert_eq!(store.get("count", None).as_deref(), Some("1"));
}

#[test]
fn store_append_produces_one_line_per_call() {
    let (_temp, store) = fresh_store();

    store.append("log", "first").unwrap();
    store.append("log", "second").unwrap();

    let raw = std::fs::read_to_string(store.prefix().join("log")).unwrap();
    assert_eq!(raw.lines().collect::<Vec<_>>(), vec!["first", "second"]);
}

// =============================================================================
// Soft failures and deletion
// =============================================================================

#[test]
fn store_missing_variable_uses_fallback() {
    let (_temp, store) = fresh_store();

    assert_eq!(
        store.get("missing", Some("fallback")).as_deref(),
        Some("fallback")
    );
    assert!(store.last_modified("missing").is_none());
}

#[test]
fn store_set_none_deletes_variable() {
    let (_temp, store) = fresh_store();

    store.set("k", Some("v")).unwrap();
    store.set("k", None).unwrap();

    assert_eq!(store.get("k", Some("d")).as_deref(), Some("d"));
    assert!(store.list_keys().unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn store_unreadable_variable_is_distinguishable() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp, store) = fresh_store();
    store.set("secret", Some("v")).unwrap();
    let path = store.prefix().join("secret");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores file modes, so only assert when the read really fails.
    if std::fs::read(&path).is_err() {
        assert_eq!(store.get("secret", Some("d")).as_deref(), Some("d"));
        let err = store.try_get("secret").unwrap_err();
        assert!(!err.is_not_found());
    }

    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
}

// =============================================================================
// Hierarchy
// =============================================================================

#[test]
fn store_sub_stores_nest_on_disk() {
    let (_temp, store) = fresh_store();
    let session = store.sub_store("users").unwrap().sub_store("ada").unwrap();

    session.set("token", Some("abc")).unwrap();

    assert_eq!(
        std::fs::read_to_string(store.prefix().join("users/ada/token")).unwrap(),
        "abc"
    );
    assert_eq!(store.list_keys().unwrap(), Vec::<String>::new());
}
