//! Data behind the dock management dialog.

use windock_common::Translate;
use windock_config::keys;
use windock_platform::{list_windows, WindowSystem};

/// Translated static text of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    pub title: String,
    pub description: String,
    pub dock_name_header: String,
    pub window_header: String,
    pub apply: String,
    pub close: String,
}

impl DialogText {
    pub fn new(translator: &dyn Translate) -> Self {
        Self {
            title: translator.translate(keys::DIALOG_TITLE),
            description: translator.translate(keys::DIALOG_DESCRIPTION),
            dock_name_header: translator.translate(keys::DIALOG_DOCK_NAME),
            window_header: translator.translate(keys::DIALOG_DESKTOP_WINDOW),
            apply: translator.translate(keys::DIALOG_APPLY),
            close: translator.translate(keys::DIALOG_CLOSE),
        }
    }
}

/// One entry of the window picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub label: String,
    pub is_placeholder: bool,
}

impl PickerEntry {
    /// What to pass to `EditSession::choose_window` when this entry is
    /// picked.
    pub fn selection(&self) -> Option<&str> {
        if self.is_placeholder {
            None
        } else {
            Some(&self.label)
        }
    }
}

/// The placeholder entry followed by every candidate window.
pub fn picker_entries(ws: &dyn WindowSystem, translator: &dyn Translate) -> Vec<PickerEntry> {
    let placeholder = PickerEntry {
        label: translator.translate(keys::DIALOG_WINDOW_PLACEHOLDER),
        is_placeholder: true,
    };
    std::iter::once(placeholder)
        .chain(list_windows(ws).into_iter().map(|w| PickerEntry {
            label: w.label,
            is_placeholder: false,
        }))
        .collect()
}
