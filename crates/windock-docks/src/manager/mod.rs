//! The registry of active docks.
//!
//! `DockManager` owns every `ActiveDock` keyed by identity and the map
//! from running search timers to the docks they serve. The host is passed
//! into each call; nothing here is global.

mod apply;
mod lifecycle;
mod shutdown;
mod startup;
mod types;


use std::collections::HashMap;

use windock_common::{DockId, Translate};
use windock_config::{keys, BindingStore, SearchSettings};
use windock_platform::WindowSystem;

use crate::embed::EmbedState;
use crate::host::{Placeholder, TimerId};

pub use types::DockToken;
pub(crate) use types::{ActiveDock, CreateMode};

pub struct DockManager {
    windows: Box<dyn WindowSystem>,
    store: BindingStore,
    translator: Box<dyn Translate>,
    search: SearchSettings,
    docks: HashMap<DockId, ActiveDock>,
    searches: HashMap<TimerId, DockToken>,
    next_generation: u64,
}

impl DockManager {
    pub fn new(
        windows: Box<dyn WindowSystem>,
        store: BindingStore,
        translator: Box<dyn Translate>,
        search: SearchSettings,
    ) -> Self {
        Self {
            windows,
            store,
            translator,
            search,
            docks: HashMap::new(),
            searches: HashMap::new(),
            next_generation: 1,
        }
    }

    pub fn window_system(&self) -> &dyn WindowSystem {
        self.windows.as_ref()
    }

    pub fn store(&self) -> &BindingStore {
        &self.store
    }

    pub fn translator(&self) -> &dyn Translate {
        self.translator.as_ref()
    }

    pub fn is_active(&self, id: &DockId) -> bool {
        self.docks.contains_key(id)
    }

    /// Identities of all active docks, sorted.
    pub fn active_ids(&self) -> Vec<DockId> {
        let mut ids: Vec<DockId> = self.docks.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn count(&self) -> usize {
        self.docks.len()
    }

    pub fn display_name(&self, id: &DockId) -> Option<&str> {
        self.docks.get(id).map(|d| d.name.as_str())
    }

    pub fn state(&self, id: &DockId) -> Option<EmbedState> {
        self.docks.get(id).map(|d| d.controller.state())
    }

    /// Token for the dock currently registered under `id`.
    pub fn token(&self, id: &DockId) -> Option<DockToken> {
        self.docks.get(id).map(|d| DockToken {
            id: id.clone(),
            generation: d.generation,
        })
    }

    /// Whether `token` still refers to a live dock.
    pub fn is_live(&self, token: &DockToken) -> bool {
        self.docks
            .get(&token.id)
            .is_some_and(|d| d.generation == token.generation)
    }

    fn placeholder(&self, window_title: &str) -> Placeholder {
        Placeholder {
            description: self.translator.translate(keys::BLANK_DOCK_DESCRIPTION),
            capture_label: self.translator.translate(keys::BLANK_DOCK_CAPTURE),
            window_title: window_title.to_string(),
        }
    }

    fn next_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }
}
