use windock_common::{DockId, SurfaceHandle};

use crate::embed::EmbeddingController;
use crate::host::TimerId;

/// Liveness-checked reference from a timer back to its dock.
///
/// A dock removed and recreated under the same identity gets a new
/// generation, so ticks from the old search are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockToken {
    pub id: DockId,
    pub generation: u64,
}

/// A dock panel currently registered with the host.
pub(crate) struct ActiveDock {
    pub(crate) name: String,
    pub(crate) generation: u64,
    pub(crate) container: SurfaceHandle,
    pub(crate) controller: EmbeddingController,
    pub(crate) search_timer: Option<TimerId>,
}

/// How a new dock looks for its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CreateMode {
    /// One lookup right away; placeholder on a miss.
    Immediate,
    /// Placeholder first, then a bounded timer-driven search.
    Search,
}
