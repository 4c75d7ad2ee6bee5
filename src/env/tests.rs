// principium: Application Storage & Environment Settings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment settings module.

use super::{DEFAULT_ENVIRONMENT_FILE, EnvironmentConfig, LoadOptions, default_environment_path};
use crate::error::{EnvError, IniError};
use tempfile::TempDir;

fn temp_config(contents: Option<&str>) -> (TempDir, EnvironmentConfig) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp.path().join(DEFAULT_ENVIRONMENT_FILE);
    if let Some(contents) = contents {
        std::fs::write(&path, contents).unwrap();
    }
    let config = EnvironmentConfig::with_path(path).unwrap();
    (temp, config)
}

#[test]
fn test_default_path_ends_with_environment_ini() {
    assert!(default_environment_path().ends_with(DEFAULT_ENVIRONMENT_FILE));
    assert_eq!(EnvironmentConfig::new().path(), default_environment_path());
}

#[test]
fn test_get_before_load_fails() {
    let (_temp, config) = temp_config(Some("Foo=bar\n"));

    assert!(!config.is_loaded());
    assert!(matches!(
        config.get("Foo"),
        Err(EnvError::NotInitialized { .. })
    ));
    assert!(config.get_or("Foo", "default").is_err());
    assert!(config.view().is_err());
}

#[test]
fn test_set_before_load_fails() {
    let (_temp, mut config) = temp_config(None);

    assert!(matches!(
        config.set("Foo", "bar"),
        Err(EnvError::NotInitialized { .. })
    ));
    assert!(!config.path().exists());
}

#[test]
fn test_lookup_is_case_insensitive() {
    let (_temp, mut config) = temp_config(Some("Foo=bar\n"));
    config.load(LoadOptions::default()).unwrap();

    assert_eq!(config.get("foo").unwrap(), Some("bar"));
    assert_eq!(config.get("FOO").unwrap(), Some("bar"));
    assert_eq!(config.get("missing").unwrap(), None);
    assert_eq!(config.get_or("missing", "fallback").unwrap(), "fallback");
}

#[test]
fn test_load_missing_file() {
    let (_temp, mut config) = temp_config(None);

    let view = config.load(LoadOptions::default()).unwrap();
    assert!(view.entries().is_empty());
    assert!(!config.path().exists(), "plain load never creates the file");

    config.load(LoadOptions::create_if_missing()).unwrap();
    assert!(config.path().is_file());
    assert_eq!(std::fs::read_to_string(config.path()).unwrap(), "");
}

#[test]
fn test_create_if_missing_creates_directory() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("conf").join("app.ini");
    let mut config = EnvironmentConfig::with_path(&path).unwrap();

    config.load(LoadOptions::create_if_missing()).unwrap();

    assert!(path.is_file());
}

#[test]
fn test_reload_replaces_cache() {
    let (_temp, mut config) = temp_config(Some("A=1\n"));
    config.load(LoadOptions::default()).unwrap();

    std::fs::write(config.path(), "B=2\n").unwrap();
    config.load(LoadOptions::default()).unwrap();

    assert_eq!(config.get("A").unwrap(), None);
    assert_eq!(config.get("b").unwrap(), Some("2"));
}

#[test]
fn test_failed_reload_keeps_previous_cache() {
    let (_temp, mut config) = temp_config(Some("A=1\n"));
    config.load(LoadOptions::default()).unwrap();

    std::fs::write(config.path(), "A=1\nA=2\n").unwrap();
    let err = config.load(LoadOptions::default()).unwrap_err();

    assert!(matches!(err, EnvError::Ini(IniError::DuplicateKey { .. })));
    assert_eq!(config.get("A").unwrap(), Some("1"));
}

#[test]
fn test_set_appends_new_key() {
    let (_temp, mut config) = temp_config(Some("# app\nName=demo\n"));
    config.load(LoadOptions::default()).unwrap();

    config.set("Port", "8080").unwrap();
    config.set("Name", "changed").unwrap();

    assert_eq!(config.get("port").unwrap(), Some("8080"));
    assert_eq!(config.get("name").unwrap(), Some("demo"));
    assert_eq!(
        std::fs::read_to_string(config.path()).unwrap(),
        "# app\nName=demo\nPort=8080\n"
    );
}

#[test]
fn test_set_path_applies_on_next_load() {
    let (temp, mut config) = temp_config(Some("Origin=first\n"));
    config.load(LoadOptions::default()).unwrap();

    let second = temp.path().join("second.ini");
    std::fs::write(&second, "Origin=second\n").unwrap();
    config.set_path(&second).unwrap();

    assert_eq!(config.get("origin").unwrap(), Some("first"));
    config.load(LoadOptions::default()).unwrap();
    assert_eq!(config.get("origin").unwrap(), Some("second"));
    assert_eq!(config.view().unwrap().source(), second);
}

#[test]
fn test_set_path_rejects_invalid_path() {
    let (_temp, mut config) = temp_config(None);
    let before = config.path().to_path_buf();

    assert!(matches!(
        config.set_path("bad\0path.ini"),
        Err(EnvError::Validation(_))
    ));
    assert_eq!(config.path(), before);
}

#[test]
fn test_typed_accessors() {
    let (_temp, mut config) = temp_config(Some("Port=8080\nDebug=true\nRatio=abc\n"));
    let view = config.load(LoadOptions::default()).unwrap();

    assert_eq!(view.get_as::<u16>("port").unwrap(), Some(8080));
    assert_eq!(view.get_as::<bool>("DEBUG").unwrap(), Some(true));
    assert_eq!(view.get_as::<u16>("missing").unwrap(), None);
    assert!(matches!(
        view.get_as::<f64>("ratio"),
        Err(EnvError::InvalidValue { .. })
    ));
    assert_eq!(config.get_as::<u16>("Port").unwrap(), Some(8080));
}

#[test]
fn test_view_exposes_entries_in_file_order() {
    let (_temp, mut config) = temp_config(Some("Zeta=1\n[s]\nAlpha=\"two\"\n"));
    let view = config.load(LoadOptions::default()).unwrap();

    let keys: Vec<_> = view.entries().iter().map(|e| e.key()).collect();
    assert_eq!(keys, vec!["Zeta", "Alpha"]);
    assert_eq!(view.get_or("alpha", "-"), "two");
    assert_eq!(view.to_map().len(), 2);
}
