use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every dock identity this plugin registers with the host.
pub const DOCK_ID_PREFIX: &str = "window_dock_";

/// Stable key of a dock panel.
///
/// Derived once from the display name the user typed. Renaming a dock
/// produces a different identity, so the host sees a new panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DockId(String);

impl DockId {
    /// Wrap an identity read back from persisted state, verbatim.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Derive the identity for a display name: prefix plus sanitized name.
    pub fn from_display_name(name: &str) -> Self {
        Self(format!("{DOCK_ID_PREFIX}{}", sanitize(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keep letters, digits, `-`, `_` and `.`; everything else becomes `_`.
fn sanitize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
