// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::VariableStore;
use crate::error::{PrincipiumError, ReadError, ValidationError};
use tempfile::TempDir;

fn temp_store() -> (TempDir, VariableStore) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let store = VariableStore::new(temp.path().join("Storage")).unwrap();
    (temp, store)
}

#[test]
fn test_get_missing_returns_default() {
    let (_temp, store) = temp_store();

    assert_eq!(
        store.get("missing", Some("fallback")).as_deref(),
        Some("fallback")
    );
    assert_eq!(store.get("missing", None), None);
    assert!(!store.prefix().exists(), "get must not create the prefix");
}

#[test]
fn test_set_then_get() {
    let (_temp, store) = temp_store();

    store.set("count", Some("1")).unwrap();
    assert_eq!(store.get("count", None).as_deref(), Some("1"));

    store.set("count", Some("2\n")).unwrap();
    assert_eq!(store.try_get("count").unwrap(), "2\n");
}

#[test]
fn test_set_none_deletes() {
    let (_temp, store) = temp_store();

    store.set("k", Some("v")).unwrap();
    store.set("k", None).unwrap();

    assert_eq!(store.get("k", Some("d")).as_deref(), Some("d"));
    assert!(store.try_get("k").unwrap_err().is_not_found());
    // Deleting twice is fine.
    store.remove("k").unwrap();
}

#[test]
fn test_append_writes_trimmed_lines() {
    let (_temp, store) = temp_store();

    store.append("log", "  first ").unwrap();
    store.append("log", "second").unwrap();

    let raw = std::fs::read_to_string(store.prefix().join("log")).unwrap();
    assert_eq!(raw.lines().collect::<Vec<_>>(), vec!["first", "second"]);
    assert_eq!(raw, "first\nsecond\n");
}

#[test]
fn test_invalid_key_is_rejected() {
    let (_temp, store) = temp_store();

    let err = store.set("a/b", Some("v")).unwrap_err();
    assert!(matches!(err, PrincipiumError::Validation(_)));
    assert!(store.append("a/b", "v").is_err());
    assert!(matches!(
        store.try_get("a/b"),
        Err(ReadError::InvalidName(_))
    ));
    assert_eq!(store.get("a/b", Some("d")).as_deref(), Some("d"));
    assert!(!store.prefix().exists(), "validation happens before any I/O");
}

#[test]
fn test_invalid_prefix_is_rejected() {
    assert!(VariableStore::new("bad\0prefix").is_err());
    assert!(VariableStore::new("").is_err());
}

#[test]
fn test_list_keys() {
    let (_temp, store) = temp_store();
    assert!(store.list_keys().unwrap().is_empty());

    store.set("beta", Some("2")).unwrap();
    store.set("alpha", Some("1")).unwrap();
    store.append("gamma", "3").unwrap();
    store.sub_store("nested").unwrap().set("hidden", Some("x")).unwrap();

    assert_eq!(store.list_keys().unwrap(), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_last_modified() {
    let (_temp, store) = temp_store();

    assert!(store.last_modified("count").is_none());
    store.set("count", Some("1")).unwrap();
    assert!(store.last_modified("count").is_some());
    assert!(store.try_last_modified("a/b").is_err());
}

#[test]
fn test_sub_store_is_independent() {
    let (_temp, store) = temp_store();
    let users = store.sub_store("users").unwrap();

    assert_eq!(users.prefix(), store.prefix().join("users"));
    users.set("name", Some("ada")).unwrap();

    assert_eq!(store.get("name", None), None);
    assert_eq!(users.get("name", None).as_deref(), Some("ada"));
    assert!(store.sub_store("bad\0dir").is_err());
}

#[test]
fn test_sub_store_rejects_absolute_path() {
    let (_temp, store) = temp_store();
    let absolute = std::env::temp_dir();

    let err = store.sub_store(&absolute).unwrap_err();

    assert!(matches!(
        err,
        PrincipiumError::Validation(ref e) if matches!(**e, ValidationError::NotRelative { .. })
    ));
    assert!(store.sub_store("users/ada").is_ok());
}
