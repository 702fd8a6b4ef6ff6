use serde::{Deserialize, Serialize};
use windock_common::DockId;

/// A persisted association between a dock and the window it should hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockBinding {
    /// Stable panel identity (`window_dock_` + sanitized name).
    #[serde(rename = "dockId")]
    pub id: DockId,
    /// Panel title shown by the host.
    #[serde(rename = "dockName")]
    pub name: String,
    /// Bare window title used for lookup.
    #[serde(rename = "desktopWindow")]
    pub window_title: String,
    /// Picker label, `"[app.exe]: title"`.
    #[serde(rename = "desktopWindowWithProgramName")]
    pub window_label: String,
}

impl DockBinding {
    /// Build a binding for a freshly named dock; the identity is derived
    /// from `name`.
    pub fn new(
        name: impl Into<String>,
        window_title: impl Into<String>,
        window_label: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: DockId::from_display_name(&name),
            name,
            window_title: window_title.into(),
            window_label: window_label.into(),
        }
    }
}
