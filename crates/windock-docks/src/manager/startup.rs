//! Startup restore and the bounded search timers it starts.

use tracing::{debug, info, warn};

use crate::embed::SearchOutcome;
use crate::host::{DockHost, TimerId};

use super::{CreateMode, DockManager};

impl DockManager {
    /// Recreate every persisted dock in `SearchPending`.
    ///
    /// Each dock starts on its placeholder with a repeating timer; see
    /// [`DockManager::on_timer`]. Returns how many docks were registered.
    pub fn restore_on_startup(&mut self, host: &mut dyn DockHost) -> usize {
        let bindings = self.store.load();
        if bindings.is_empty() {
            debug!("no persisted docks to restore");
            return 0;
        }

        let mut restored = 0;
        for binding in &bindings {
            if self.docks.contains_key(&binding.id) {
                warn!(dock_id = %binding.id, "duplicate dock in store, skipping");
                continue;
            }
            match self.create(host, binding, CreateMode::Search) {
                Ok(()) => restored += 1,
                Err(e) => warn!(dock_id = %binding.id, "could not restore dock: {e}"),
            }
        }
        info!(count = restored, "restored docks");
        restored
    }

    /// Handle one tick of a search timer.
    ///
    /// Ticks whose dock is gone, or was recreated since the timer started,
    /// stop the timer and are otherwise ignored.
    pub fn on_timer(&mut self, host: &mut dyn DockHost, timer: TimerId) {
        let Some(token) = self.searches.get(&timer).cloned() else {
            debug!(timer = timer.0, "tick for unknown timer");
            return;
        };

        let ws = self.windows.as_ref();
        let dock = self
            .docks
            .get_mut(&token.id)
            .filter(|d| d.generation == token.generation && d.search_timer == Some(timer));
        let Some(dock) = dock else {
            debug!(dock_id = %token.id, "discarding tick for a dock that is gone");
            self.searches.remove(&timer);
            host.stop_timer(timer);
            return;
        };

        let outcome = dock.controller.poll_search(ws);
        if outcome == SearchOutcome::Found {
            host.hide_placeholder(dock.container);
        }
        if outcome.is_finished() {
            dock.search_timer = None;
            self.searches.remove(&timer);
            host.stop_timer(timer);
            debug!(dock_id = %token.id, ?outcome, "search finished");
        }
    }
}
