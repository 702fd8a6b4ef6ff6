//! Create, refresh, capture, detach and remove individual docks.

use tracing::{debug, info, warn};
use windock_common::{DockError, DockId};
use windock_config::DockBinding;

use crate::embed::EmbeddingController;
use crate::host::{DockHost, Placeholder};

use super::{ActiveDock, CreateMode, DockManager, DockToken};

impl DockManager {
    /// Materialize `binding`, or re-resolve its window if the dock exists.
    ///
    /// Calling this twice with the same binding leaves one dock and one
    /// host panel.
    pub fn create_or_update(
        &mut self,
        host: &mut dyn DockHost,
        binding: &DockBinding,
    ) -> Result<(), DockError> {
        if self.docks.contains_key(&binding.id) {
            self.refresh(host, binding);
            return Ok(());
        }
        self.create(host, binding, CreateMode::Immediate)
    }

    /// Point an existing dock at `binding`'s window and try to capture it.
    fn refresh(&mut self, host: &mut dyn DockHost, binding: &DockBinding) {
        let placeholder = self.placeholder(&binding.window_title);
        let ws = self.windows.as_ref();
        let Some(dock) = self.docks.get_mut(&binding.id) else {
            return;
        };

        dock.name = binding.name.clone();
        dock.controller.set_target_title(&binding.window_title);
        dock.controller.forget_if_gone(ws);

        if dock.controller.attempt_capture(ws) {
            if let Some(timer) = dock.search_timer.take() {
                self.searches.remove(&timer);
                host.stop_timer(timer);
            }
        } else {
            dock.controller.relayout(ws);
        }
        show_content(host, dock, &placeholder);
        debug!(dock_id = %binding.id, attached = dock.controller.is_attached(), "dock refreshed");
    }

    /// Build a new dock and register it with the host.
    ///
    /// On any failure the dock is discarded: a captured window goes back to
    /// the desktop, the container goes back to the host, and nothing is
    /// added to the registry.
    pub(crate) fn create(
        &mut self,
        host: &mut dyn DockHost,
        binding: &DockBinding,
        mode: CreateMode,
    ) -> Result<(), DockError> {
        let id = binding.id.clone();
        let container = host
            .create_container(&id)
            .ok_or_else(|| DockError::ContainerUnavailable(id.clone()))?;

        let ws = self.windows.as_ref();
        let mut controller = EmbeddingController::new(container, binding.window_title.clone());
        if mode == CreateMode::Immediate {
            controller.attempt_capture(ws);
        }
        if !controller.is_attached() {
            host.show_placeholder(container, &self.placeholder(&binding.window_title));
        }

        if !host.add_panel(&id, &binding.name, container) {
            controller.detach(ws);
            host.release_container(container);
            warn!(dock_id = %id, "host rejected dock panel, discarding dock");
            return Err(DockError::RegistrationFailed(id));
        }

        let generation = self.next_generation();
        let mut search_timer = None;
        if mode == CreateMode::Search {
            controller.begin_search(self.search.max_attempts);
            let timer = host.start_timer(self.search.interval());
            self.searches.insert(
                timer,
                DockToken {
                    id: id.clone(),
                    generation,
                },
            );
            search_timer = Some(timer);
        }

        info!(
            dock_id = %id,
            name = %binding.name,
            attached = controller.is_attached(),
            searching = search_timer.is_some(),
            "dock created"
        );
        self.docks.insert(
            id,
            ActiveDock {
                name: binding.name.clone(),
                generation,
                container,
                controller,
                search_timer,
            },
        );
        Ok(())
    }

    /// Tear down a dock: release its window, stop its search, then remove
    /// the host panel and the registry entry.
    ///
    /// Returns `false` when no dock is registered under `id`.
    pub fn remove(&mut self, host: &mut dyn DockHost, id: &DockId) -> bool {
        let Some(mut dock) = self.docks.remove(id) else {
            debug!(dock_id = %id, "remove for inactive dock");
            return false;
        };

        dock.controller.detach(self.windows.as_ref());
        if let Some(timer) = dock.search_timer.take() {
            self.searches.remove(&timer);
            host.stop_timer(timer);
        }
        host.remove_panel(id);
        info!(dock_id = %id, "dock removed");
        true
    }

    /// The capture button: one immediate lookup of the dock's window.
    ///
    /// Does not restart an exhausted search. A hit also ends any search
    /// still running.
    pub fn attempt_capture(
        &mut self,
        host: &mut dyn DockHost,
        id: &DockId,
    ) -> Result<bool, DockError> {
        if !self.docks.contains_key(id) {
            return Err(DockError::UnknownDock(id.clone()));
        }
        self.revert_if_window_gone(host, id);

        let ws = self.windows.as_ref();
        let Some(dock) = self.docks.get_mut(id) else {
            return Err(DockError::UnknownDock(id.clone()));
        };
        if !dock.controller.attempt_capture(ws) {
            return Ok(false);
        }
        host.hide_placeholder(dock.container);
        if let Some(timer) = dock.search_timer.take() {
            self.searches.remove(&timer);
            host.stop_timer(timer);
        }
        Ok(true)
    }

    /// Release a dock's window without removing the dock.
    ///
    /// The dock reverts to its placeholder. Returns `true` when a window
    /// was handed back to the desktop.
    pub fn detach_dock(&mut self, host: &mut dyn DockHost, id: &DockId) -> Result<bool, DockError> {
        let title = self
            .docks
            .get(id)
            .ok_or_else(|| DockError::UnknownDock(id.clone()))?
            .controller
            .target_title()
            .to_string();
        if self.revert_if_window_gone(host, id) {
            return Ok(false);
        }
        let placeholder = self.placeholder(&title);
        let ws = self.windows.as_ref();
        let Some(dock) = self.docks.get_mut(id) else {
            return Err(DockError::UnknownDock(id.clone()));
        };

        if dock.controller.handle().is_none() {
            return Ok(false);
        }
        let released = dock.controller.detach(ws);
        host.show_placeholder(dock.container, &placeholder);
        Ok(released)
    }

    /// Re-fit the embedded window after the host resized the dock.
    ///
    /// A window destroyed since the last layout is dropped here and the
    /// dock shows its placeholder again.
    pub fn on_container_resized(&mut self, host: &mut dyn DockHost, id: &DockId) -> bool {
        if !self.docks.contains_key(id) {
            return false;
        }
        if !self.revert_if_window_gone(host, id) {
            if let Some(dock) = self.docks.get(id) {
                dock.controller.relayout(self.windows.as_ref());
            }
        }
        true
    }

    /// Put a dock whose embedded window was destroyed back on its
    /// placeholder. Returns `true` when that happened.
    fn revert_if_window_gone(&mut self, host: &mut dyn DockHost, id: &DockId) -> bool {
        let Some(title) = self
            .docks
            .get(id)
            .map(|dock| dock.controller.target_title().to_string())
        else {
            return false;
        };
        let placeholder = self.placeholder(&title);
        let ws = self.windows.as_ref();
        let Some(dock) = self.docks.get_mut(id) else {
            return false;
        };
        if !dock.controller.forget_if_gone(ws) {
            return false;
        }
        host.show_placeholder(dock.container, &placeholder);
        info!(dock_id = %id, "embedded window closed, showing placeholder");
        true
    }
}

fn show_content(host: &mut dyn DockHost, dock: &ActiveDock, placeholder: &Placeholder) {
    if dock.controller.is_attached() {
        host.hide_placeholder(dock.container);
    } else {
        host.show_placeholder(dock.container, placeholder);
    }
}
