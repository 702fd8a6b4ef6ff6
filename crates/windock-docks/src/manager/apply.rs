use tracing::{error, info, warn};
use windock_config::DockBinding;

use crate::host::DockHost;
use crate::reconcile::{reconcile, ReconcilePlan};
use crate::session::EditSession;

use super::DockManager;

impl DockManager {
    /// Bring the active docks and the store in line with `session`.
    ///
    /// Every dock that goes away, whether dropped or replaced by an update,
    /// is removed before anything is created, so an identity reused within
    /// one apply never collides with its previous holder.
    pub fn apply_changes(&mut self, host: &mut dyn DockHost, session: &EditSession) -> ReconcilePlan {
        let persisted = self.store.load();
        let plan = reconcile(&persisted, session.rows());

        for id in plan.retired() {
            self.remove(host, id);
        }
        let desired = plan
            .to_update
            .iter()
            .map(|u| &u.binding)
            .chain(&plan.to_create)
            .chain(&plan.to_keep);
        for binding in desired {
            self.apply_binding(host, binding);
        }

        if let Err(e) = self.store.save(&session.persistable()) {
            error!("failed to persist dock bindings: {e}");
        }
        info!(
            removed = plan.to_remove.len(),
            updated = plan.to_update.len(),
            created = plan.to_create.len(),
            kept = plan.to_keep.len(),
            "applied dock changes"
        );
        plan
    }

    fn apply_binding(&mut self, host: &mut dyn DockHost, binding: &DockBinding) {
        if let Err(e) = self.create_or_update(host, binding) {
            warn!(dock_id = %binding.id, "{e}");
        }
    }
}
