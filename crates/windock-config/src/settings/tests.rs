//! Tests for settings loading and validation.

use super::*;
use std::path::Path;
use windock_common::ConfigError;

#[test]
fn defaults_match_search_contract() {
    let settings = PluginSettings::default();
    assert_eq!(settings.search.max_attempts, 5);
    assert_eq!(settings.search.interval_ms, 6000);
    assert_eq!(settings.search.interval().as_secs(), 6);
    assert_eq!(settings.logging.level, "windock=info");
    assert_eq!(settings.locale.name, "en-US");
    assert!(validate(&settings).is_ok());
}

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_windock_settings.toml"));
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_partial_toml_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[search]
max_attempts = 10
"#,
    )
    .unwrap();

    let settings = load_from_path(&path).unwrap();
    assert_eq!(settings.search.max_attempts, 10);
    assert_eq!(settings.search.interval_ms, 6000);
    assert_eq!(settings.locale.name, "en-US");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[search\nmax_attempts = ").unwrap();

    assert!(matches!(load_from_path(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn out_of_range_values_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[search]
max_attempts = 0
interval_ms = 5

[logging]
level = ""
"#,
    )
    .unwrap();

    let settings = load_from_path(&path).unwrap();
    assert_eq!(settings.search.max_attempts, 1);
    assert_eq!(settings.search.interval_ms, 250);
    assert_eq!(settings.logging.level, "windock=info");
}

#[test]
fn validation_collects_every_error() {
    let mut settings = PluginSettings::default();
    settings.search.max_attempts = 1000;
    settings.search.interval_ms = 0;

    let err = validate(&settings).unwrap_err().to_string();
    assert!(err.contains("search.max_attempts = 1000"));
    assert!(err.contains("search.interval_ms = 0"));
}
