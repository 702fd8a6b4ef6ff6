//! Candidate window listing for the dock picker.
//!
//! Labels take the form `"[app.exe]: Window Title"`. The bare title is what
//! gets persisted and later fed back into title lookup; the label is kept
//! only so the picker can show the original selection again.

use tracing::{debug, error};
use windock_common::types::WindowHandle;

use crate::window_system::WindowSystem;

const LABEL_DELIMITER: &str = "]:";

/// A visible, titled top-level window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopWindow {
    pub handle: WindowHandle,
    pub label: String,
    pub title: String,
    pub process: String,
}

/// Build the picker label for a window.
pub fn format_label(process: &str, title: &str) -> String {
    format!("[{process}]: {title}")
}

/// Recover the bare title from a picker label.
///
/// Returns the trimmed text after the first `"]:"`. When the delimiter is
/// missing, or nothing follows it, the input comes back unchanged.
pub fn extract_title_from_label(label: &str) -> &str {
    match label.find(LABEL_DELIMITER) {
        Some(idx) if idx + LABEL_DELIMITER.len() < label.len() => {
            label[idx + LABEL_DELIMITER.len()..].trim()
        }
        _ => label,
    }
}

/// List visible, titled top-level windows in OS enumeration order.
///
/// Handles that are invalid, hidden or untitled are filtered out, and so
/// are windows whose owning process cannot be queried.
pub fn list_windows(ws: &dyn WindowSystem) -> Vec<DesktopWindow> {
    let handles = match ws.top_level_windows() {
        Ok(handles) => handles,
        Err(e) => {
            error!("window enumeration failed: {e}");
            return Vec::new();
        }
    };

    handles
        .into_iter()
        .filter_map(|handle| describe(ws, handle))
        .collect()
}

fn describe(ws: &dyn WindowSystem, handle: WindowHandle) -> Option<DesktopWindow> {
    if handle.0 == 0 || !ws.is_window(handle) || !ws.is_visible(handle) {
        return None;
    }
    let title = ws.window_title(handle).filter(|t| !t.is_empty())?;
    let process = match ws.process_name(handle) {
        Ok(name) => name,
        Err(e) => {
            debug!(hwnd = %handle, "skipping window: {e}");
            return None;
        }
    };
    Some(DesktopWindow {
        handle,
        label: format_label(&process, &title),
        title,
        process,
    })
}
