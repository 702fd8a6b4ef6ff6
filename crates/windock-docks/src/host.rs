//! The host application's dock-panel API.
//!
//! The host owns every widget. The plugin only asks it for container
//! surfaces, registers them as panels under a stable identity, swaps the
//! placeholder content in and out, and drives repeating UI-thread timers.

use std::time::Duration;

use windock_common::{DockId, SurfaceHandle};

/// A host-owned repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Menu entries the plugin adds to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    OpenDockManagement,
}

/// Content shown in a dock while no window is embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub description: String,
    /// Label of the manual capture button.
    pub capture_label: String,
    /// Title the capture button looks for.
    pub window_title: String,
}

pub trait DockHost {
    /// Create a native container surface for a dock.
    fn create_container(&mut self, id: &DockId) -> Option<SurfaceHandle>;

    /// Destroy a container that never became a panel.
    fn release_container(&mut self, container: SurfaceHandle);

    /// Register `container` as a dock panel. Returns `false` when the host
    /// refuses, for example because `id` is already taken.
    fn add_panel(&mut self, id: &DockId, title: &str, container: SurfaceHandle) -> bool;

    /// Remove a panel and the container registered with it.
    fn remove_panel(&mut self, id: &DockId);

    fn show_placeholder(&mut self, container: SurfaceHandle, placeholder: &Placeholder);

    fn hide_placeholder(&mut self, container: SurfaceHandle);

    /// Start a repeating timer on the UI thread. Each tick is delivered
    /// back through the plugin's timer entry point.
    fn start_timer(&mut self, interval: Duration) -> TimerId;

    fn stop_timer(&mut self, timer: TimerId);

    fn register_menu_action(&mut self, label: &str, action: HostAction);
}
