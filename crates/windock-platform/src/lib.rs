//! OS-facing pieces of the window-docks plugin.
//!
//! - `window_system`: the `WindowSystem` trait over native window handles,
//!   with a Win32 backend and a no-op fallback
//! - `enumerate`: labelled listing of candidate windows for the picker
//! - `paths`: per-user config locations

pub mod enumerate;
pub mod paths;
pub mod window_system;

pub use enumerate::{extract_title_from_label, format_label, list_windows, DesktopWindow};
pub use paths::{bindings_file, ensure_plugin_dir, locale_dir, plugin_config_dir, settings_file};
pub use window_system::{create_window_system, WindowSystem};
