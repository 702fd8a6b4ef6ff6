//! Tests for dock store loading, creation and saving.

use super::*;
use windock_common::{ConfigError, DockId, PlatformError};

fn store_in(dir: &tempfile::TempDir) -> BindingStore {
    BindingStore::new(dir.path().join("plugin_config").join("window-dock").join("config.json"))
}

#[test]
fn missing_directory_and_file_are_created_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let bindings = store.try_load().unwrap();
    assert!(bindings.is_empty());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
}

#[test]
fn loads_records_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        r#"[
  {"dockId": "window_dock_Chat", "dockName": "Chat",
   "desktopWindow": "Twitch Chat", "desktopWindowWithProgramName": "[chrome.exe]: Twitch Chat"},
  {"dockId": "window_dock_Music", "dockName": "Music",
   "desktopWindow": "Spotify", "desktopWindowWithProgramName": "[Spotify.exe]: Spotify"}
]"#,
    )
    .unwrap();

    let bindings = store.load();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].id, DockId::new("window_dock_Chat"));
    assert_eq!(bindings[0].window_title, "Twitch Chat");
    assert_eq!(bindings[1].name, "Music");
    assert_eq!(bindings[1].window_label, "[Spotify.exe]: Spotify");
}

#[test]
fn malformed_json_is_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(store.try_load(), Err(ConfigError::ParseError(_))));
    assert!(store.load().is_empty());
}

#[test]
fn non_array_document_is_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), r#"{"dockId": "window_dock_Chat"}"#).unwrap();

    let err = store.try_load().unwrap_err();
    assert!(err.to_string().contains("not a JSON array"));
    assert!(store.load().is_empty());
}

#[test]
fn records_without_identity_or_shape_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        r#"[42, {"dockName": "Orphan"}, {"dockId": "window_dock_Ok", "dockName": "Ok"}]"#,
    )
    .unwrap();

    let bindings = store.load();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].name, "Ok");
    // Missing fields fall back to empty strings
    assert_eq!(bindings[0].window_title, "");
}

#[test]
fn save_then_load_preserves_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let bindings = vec![
        DockBinding::new("Chat", "Twitch Chat", "[chrome.exe]: Twitch Chat"),
        DockBinding::new("Notes", "notes.txt - Notepad", "[notepad.exe]: notes.txt - Notepad"),
    ];

    store.save(&bindings).unwrap();
    assert_eq!(store.load(), bindings);
}

#[test]
fn saved_file_uses_persisted_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store
        .save(&[DockBinding::new("Chat", "Twitch Chat", "[chrome.exe]: Twitch Chat")])
        .unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"dockId\": \"window_dock_Chat\""));
    assert!(raw.contains("\"dockName\": \"Chat\""));
    assert!(raw.contains("\"desktopWindow\": \"Twitch Chat\""));
    assert!(raw.contains("\"desktopWindowWithProgramName\""));
}

#[test]
fn unresolvable_config_dir_falls_back_to_temp() {
    let err = PlatformError::PathError("could not determine config directory".into());
    let path = super::file::path_or_fallback(Err(err));
    assert!(path.starts_with(std::env::temp_dir()));
    assert!(path.ends_with("config.json"));

    let resolved = std::path::PathBuf::from("/home/user/.config/obs-studio/config.json");
    assert_eq!(super::file::path_or_fallback(Ok(resolved.clone())), resolved);
}

#[cfg(unix)]
#[test]
fn unwritable_location_reports_directory_error() {
    // A regular file where the parent directory should be
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, "").unwrap();
    let store = BindingStore::new(blocker.join("config.json"));

    assert!(matches!(store.try_load(), Err(ConfigError::DirectoryError(_))));
    assert!(store.load().is_empty());
}
