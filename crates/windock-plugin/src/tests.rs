use tempfile::TempDir;
use windock_config::{BindingStore, DockBinding, Locale, SearchSettings};
use windock_docks::testing::{FakeHost, FakeWindowSystem};
use windock_docks::{DockManager, EmbedState, HostAction};

use super::*;

struct Fixture {
    _dir: TempDir,
    ws: FakeWindowSystem,
    host: FakeHost,
    plugin: WindowDockPlugin,
}

fn fixture(persisted: &[DockBinding]) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let store = BindingStore::new(dir.path().join("config.json"));
    if !persisted.is_empty() {
        store.save(persisted).unwrap();
    }
    let ws = FakeWindowSystem::new();
    let host = FakeHost::with_windows(&ws);
    let manager = DockManager::new(
        Box::new(ws.clone()),
        store,
        Box::new(Locale::builtin()),
        SearchSettings::default(),
    );
    Fixture {
        _dir: dir,
        ws,
        host,
        plugin: WindowDockPlugin::new(manager),
    }
}

fn chat() -> DockBinding {
    DockBinding::new("Chat", "Chat - Browser", "[browser.exe]: Chat - Browser")
}

#[test]
fn load_registers_menu_and_restores_docks() {
    let mut f = fixture(&[chat()]);

    assert_eq!(f.plugin.on_load(&mut f.host), 1);

    assert_eq!(
        f.host.menu_actions,
        vec![(
            "Custom Window Docks".to_string(),
            HostAction::OpenDockManagement
        )]
    );
    assert!(f.plugin.manager().is_active(&chat().id));
    assert_eq!(f.host.active_timers().len(), 1);
}

#[test]
fn load_with_empty_store_registers_no_panels() {
    let mut f = fixture(&[]);
    assert_eq!(f.plugin.on_load(&mut f.host), 0);
    assert_eq!(f.host.add_panel_calls, 0);
    assert_eq!(f.host.menu_actions.len(), 1);
}

#[test]
fn reopening_returns_the_same_session() {
    let mut f = fixture(&[chat()]);
    let session = f.plugin.on_menu_action(HostAction::OpenDockManagement);
    assert_eq!(session.len(), 1);
    session.add_row();

    assert_eq!(f.plugin.open_management().len(), 2);
}

#[test]
fn picker_lists_placeholder_then_visible_windows() {
    let f = fixture(&[]);
    f.ws.open("Chat - Browser", "browser.exe");
    f.ws.open_hidden("Tray", "tray.exe");
    f.ws.open_protected("Task Manager");
    f.ws.open("", "shell.exe");

    let entries = f.plugin.picker_entries();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_placeholder);
    assert_eq!(entries[0].label, "Select a window...");
    assert_eq!(entries[0].selection(), None);
    assert_eq!(entries[1].selection(), Some("[browser.exe]: Chat - Browser"));
}

#[test]
fn dialog_text_is_translated() {
    let f = fixture(&[]);
    let text = f.plugin.dialog_text();
    assert_eq!(text.title, "Custom Window Docks");
    assert_eq!(text.dock_name_header, "Dock Name");
    assert_eq!(text.apply, "Apply");
    assert_eq!(text.close, "Close");
}

#[test]
fn apply_creates_dock_and_reloads_session() {
    let mut f = fixture(&[]);
    let window = f.ws.open("Chat - Browser", "browser.exe");
    f.plugin.on_load(&mut f.host);

    let entry = f.plugin.picker_entries()[1].clone();
    let session = f.plugin.open_management();
    let row = session.add_row();
    session.rename(row, "Chat").unwrap();
    session.choose_window(row, entry.selection()).unwrap();

    let plan = f.plugin.apply(&mut f.host).unwrap();

    assert_eq!(plan.to_create, vec![chat()]);
    assert_eq!(
        f.plugin.manager().state(&chat().id),
        Some(EmbedState::Attached(window))
    );
    let session = f.plugin.session().unwrap();
    assert_eq!(session.rows()[0].old, Some(chat()));
}

#[test]
fn apply_without_dialog_does_nothing() {
    let mut f = fixture(&[]);
    assert!(f.plugin.apply(&mut f.host).is_none());
}

#[test]
fn close_applies_and_ends_session() {
    let mut f = fixture(&[chat()]);
    f.plugin.on_load(&mut f.host);
    f.plugin.open_management().remove_row(0).unwrap();

    let plan = f.plugin.close(&mut f.host).unwrap();

    assert_eq!(plan.to_remove, vec![chat().id]);
    assert!(f.plugin.session().is_none());
    assert_eq!(f.plugin.manager().count(), 0);
}

#[test]
fn detach_row_releases_window_immediately() {
    let mut f = fixture(&[chat()]);
    let window = f.ws.open("Chat - Browser", "browser.exe");
    f.plugin.on_load(&mut f.host);
    let timer = f.host.active_timers()[0];
    f.plugin.on_timer(&mut f.host, timer);
    assert_eq!(
        f.plugin.manager().state(&chat().id),
        Some(EmbedState::Attached(window))
    );

    f.plugin.open_management();
    assert!(f.plugin.detach_row(&mut f.host, 0));

    assert_eq!(f.ws.window(window).unwrap().parent, None);
    assert!(f.host.placeholder_for(&chat().id).is_some());
    assert!(!f.plugin.detach_row(&mut f.host, 5));
}

#[test]
fn capture_button_attaches_window() {
    let mut f = fixture(&[]);
    f.plugin.on_load(&mut f.host);
    let session = f.plugin.open_management();
    let row = session.add_row();
    session.rename(row, "Chat").unwrap();
    session
        .choose_window(row, Some("[browser.exe]: Chat - Browser"))
        .unwrap();
    f.plugin.close(&mut f.host);
    assert!(!f.plugin.on_capture_clicked(&mut f.host, &chat().id));

    let window = f.ws.open("Chat - Browser", "browser.exe");
    assert!(f.plugin.on_capture_clicked(&mut f.host, &chat().id));
    assert_eq!(
        f.plugin.manager().state(&chat().id),
        Some(EmbedState::Attached(window))
    );
}

#[test]
fn closed_window_falls_back_to_capture_button_on_resize() {
    let mut f = fixture(&[chat()]);
    f.plugin.on_load(&mut f.host);
    let window = f.ws.open("Chat - Browser", "browser.exe");
    assert!(f.plugin.on_capture_clicked(&mut f.host, &chat().id));

    f.ws.close(window);
    f.plugin.on_container_resized(&mut f.host, &chat().id);

    assert_eq!(
        f.plugin.manager().state(&chat().id),
        Some(EmbedState::Unattached)
    );
    let placeholder = f.host.placeholder_for(&chat().id).unwrap();
    assert_eq!(placeholder.capture_label, "Capture Window");
}

#[test]
fn unload_releases_windows_and_closes_dialog() {
    let mut f = fixture(&[]);
    let window = f.ws.open("Chat - Browser", "browser.exe");
    f.plugin.on_load(&mut f.host);
    let session = f.plugin.open_management();
    let row = session.add_row();
    session.rename(row, "Chat").unwrap();
    session
        .choose_window(row, Some("[browser.exe]: Chat - Browser"))
        .unwrap();
    f.plugin.apply(&mut f.host);

    f.plugin.on_unload(&mut f.host);

    assert!(f.plugin.session().is_none());
    assert_eq!(f.plugin.manager().count(), 0);
    assert_eq!(f.ws.window(window).unwrap().parent, None);
}
