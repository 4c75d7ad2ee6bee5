// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    ensure_relative_path, ensure_valid_file_name, ensure_valid_path, is_valid_file_name,
    is_valid_path_segment,
};
use std::path::Path;
use crate::error::ValidationError;

#[test]
fn test_plain_names_are_valid() {
    for name in ["count", "session.token", "with space", "ünïcödé", "a-b_c"] {
        assert!(is_valid_file_name(name), "{name} should be a valid file name");
        assert!(is_valid_path_segment(name), "{name} should be a valid path");
    }
}

#[test]
fn test_separator_is_path_only() {
    assert!(is_valid_path_segment("storage/users"));
    assert!(!is_valid_file_name("storage/users"));
}

#[test]
fn test_nul_is_never_valid() {
    assert!(!is_valid_path_segment("bad\0name"));
    assert!(!is_valid_file_name("bad\0name"));
}

#[cfg(windows)]
#[test]
fn test_windows_reserved_characters() {
    for name in ["a:b", "a*b", "a?b", "a\\b", "a<b", "a|b", "tab\tname"] {
        assert!(!is_valid_file_name(name), "{name} should be rejected");
    }
    assert!(is_valid_path_segment("C:\\data\\store"));
    assert!(!is_valid_path_segment("a|b"));
}

#[test]
fn test_ensure_reports_character() {
    let err = ensure_valid_file_name("variable name", "a/b").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidCharacter {
            subject: "variable name",
            value: "a/b".to_string(),
            character: '/',
        }
    );
}

#[test]
fn test_ensure_rejects_empty() {
    assert_eq!(
        ensure_valid_path("storage prefix", ""),
        Err(ValidationError::Empty {
            subject: "storage prefix"
        })
    );
    assert!(ensure_valid_file_name("variable name", "").is_err());
    assert!(ensure_valid_path("storage prefix", "/var/lib/app").is_ok());
}

#[test]
fn test_relative_path_must_nest() {
    assert!(ensure_relative_path("storage path", Path::new("users/ada")).is_ok());
    assert!(ensure_relative_path("storage path", Path::new("./users")).is_ok());

    let root = std::env::temp_dir();
    assert_eq!(
        ensure_relative_path("storage path", &root),
        Err(ValidationError::NotRelative {
            subject: "storage path",
            value: root.to_string_lossy().into_owned(),
        })
    );
    assert!(matches!(
        ensure_relative_path("storage path", Path::new("")),
        Err(ValidationError::Empty { .. })
    ));
}
