//! Diffing edit records against persisted bindings.

use std::collections::HashSet;

use windock_common::DockId;
use windock_config::DockBinding;

use crate::session::{BindingEdit, EditKind};

/// A modified binding: the dock under `old` goes before `binding` is
/// created. Identity changes are never applied in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockUpdate {
    pub old: DockId,
    pub binding: DockBinding,
}

/// Work for the lifecycle manager, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub to_remove: Vec<DockId>,
    pub to_update: Vec<DockUpdate>,
    pub to_create: Vec<DockBinding>,
    pub to_keep: Vec<DockBinding>,
}

impl ReconcilePlan {
    /// Every identity whose dock is torn down, whether dropped outright or
    /// replaced by an update.
    pub fn retired(&self) -> Vec<&DockId> {
        self.to_remove
            .iter()
            .chain(self.to_update.iter().map(|u| &u.old))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.to_remove.is_empty()
            && self.to_update.is_empty()
            && self.to_create.is_empty()
            && self.to_keep.is_empty()
    }
}

/// Classify `edits` against `persisted`.
///
/// Only eligible edits take part. A persisted identity that no eligible
/// edit claims as its old identity is removed.
pub fn reconcile(persisted: &[DockBinding], edits: &[BindingEdit]) -> ReconcilePlan {
    let edits: Vec<&BindingEdit> = edits.iter().filter(|e| e.is_eligible()).collect();
    let claimed: HashSet<&DockId> = edits.iter().filter_map(|e| e.old_id()).collect();

    let mut plan = ReconcilePlan {
        to_remove: persisted
            .iter()
            .map(|b| &b.id)
            .filter(|id| !claimed.contains(id))
            .cloned()
            .collect(),
        ..ReconcilePlan::default()
    };

    for edit in edits {
        match (edit.kind(), edit.old_id()) {
            (EditKind::New, _) => plan.to_create.push(edit.new.clone()),
            (EditKind::Unchanged, _) => plan.to_keep.push(edit.new.clone()),
            (EditKind::Modified, Some(old)) => plan.to_update.push(DockUpdate {
                old: old.clone(),
                binding: edit.new.clone(),
            }),
            (EditKind::Modified, None) => plan.to_create.push(edit.new.clone()),
        }
    }
    plan
}
