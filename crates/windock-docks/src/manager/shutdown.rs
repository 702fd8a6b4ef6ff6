use tracing::{debug, info};

use crate::host::DockHost;

use super::DockManager;

impl DockManager {
    /// Release every embedded window and stop every search.
    ///
    /// Host panels are left for the host to tear down. The registry is
    /// empty afterwards.
    pub fn shutdown(&mut self, host: &mut dyn DockHost) {
        for (timer, _) in self.searches.drain() {
            host.stop_timer(timer);
        }

        let ws = self.windows.as_ref();
        let count = self.docks.len();
        for (id, mut dock) in self.docks.drain() {
            let released = dock.controller.detach(ws);
            debug!(dock_id = %id, released, "dock shut down");
        }
        info!(count, "released all docks");
    }
}
