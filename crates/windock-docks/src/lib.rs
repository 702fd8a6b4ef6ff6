//! Dock lifecycle for embedded desktop windows.
//!
//! - `session`: the edit records a management dialog produces
//! - `reconcile`: diffing edit records against persisted bindings
//! - `embed`: per-dock reparenting state machine and bounded search
//! - `host`: the panel, timer and menu API the host exposes
//! - `manager`: the registry of active docks that ties the pieces together

pub mod embed;
pub mod host;
pub mod manager;
pub mod reconcile;
pub mod session;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use embed::{EmbedState, EmbeddingController, SearchOutcome};
pub use host::{DockHost, HostAction, Placeholder, TimerId};
pub use manager::{DockManager, DockToken};
pub use reconcile::{reconcile, DockUpdate, ReconcilePlan};
pub use session::{BindingEdit, EditKind, EditSession, SessionError};
