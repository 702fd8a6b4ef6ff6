//! Locale keys for every user-facing string.

pub const MENU_CUSTOM_WINDOW_DOCKS: &str = "OBSMenu.CustomWindowDocks";

pub const DIALOG_TITLE: &str = "DockManagement.WindowTitle";
pub const DIALOG_DESCRIPTION: &str = "DockManagement.Description";
pub const DIALOG_DOCK_NAME: &str = "DockManagement.DockName";
pub const DIALOG_DESKTOP_WINDOW: &str = "DockManagement.DesktopWindow";
pub const DIALOG_WINDOW_PLACEHOLDER: &str = "DockManagement.DesktopWindowComboBoxPlaceholder";
pub const DIALOG_APPLY: &str = "DockManagement.Apply";
pub const DIALOG_CLOSE: &str = "DockManagement.Close";

pub const BLANK_DOCK_DESCRIPTION: &str = "BlankDock.Description";
pub const BLANK_DOCK_CAPTURE: &str = "BlankDock.CaptureWindow";

/// All keys the plugin looks up.
pub const ALL: [&str; 10] = [
    MENU_CUSTOM_WINDOW_DOCKS,
    DIALOG_TITLE,
    DIALOG_DESCRIPTION,
    DIALOG_DOCK_NAME,
    DIALOG_DESKTOP_WINDOW,
    DIALOG_WINDOW_PLACEHOLDER,
    DIALOG_APPLY,
    DIALOG_CLOSE,
    BLANK_DOCK_DESCRIPTION,
    BLANK_DOCK_CAPTURE,
];
