use tracing::{debug, info, warn};
use windock_common::DockId;
use windock_config::{keys, BindingStore, Locale};
use windock_docks::{DockHost, DockManager, EditSession, HostAction, ReconcilePlan, TimerId};
use windock_platform::create_window_system;

use crate::dialog::{picker_entries, DialogText, PickerEntry};
use crate::logging;

pub struct WindowDockPlugin {
    manager: DockManager,
    /// The open management dialog, if any.
    session: Option<EditSession>,
}

impl WindowDockPlugin {
    pub fn new(manager: DockManager) -> Self {
        Self {
            manager,
            session: None,
        }
    }

    /// Build the plugin from per-user settings on the native window system.
    ///
    /// Installs the log subscriber as a side effect. Nothing here fails:
    /// unusable settings, locale files or config paths fall back to
    /// defaults with a warning.
    pub fn bootstrap() -> Self {
        let settings = logging::with_startup_logging(|| {
            if let Err(e) = windock_platform::ensure_plugin_dir() {
                warn!("failed to create plugin config directory: {e}");
            }
            windock_config::settings::load_default()
        });
        logging::init(&settings.logging.level);

        let locale_dir = windock_platform::locale_dir().ok();
        let locale = Locale::load(&settings.locale.name, locale_dir.as_deref());
        let store = BindingStore::open_default();
        debug!(store = %store.path().display(), locale = locale.name(), "plugin paths resolved");

        let manager = DockManager::new(
            create_window_system(),
            store,
            Box::new(locale),
            settings.search,
        );
        Self::new(manager)
    }

    pub fn manager(&self) -> &DockManager {
        &self.manager
    }

    /// Module load: add the menu entry and restore persisted docks.
    pub fn on_load(&mut self, host: &mut dyn DockHost) -> usize {
        let label = self.manager.translator().translate(keys::MENU_CUSTOM_WINDOW_DOCKS);
        host.register_menu_action(&label, HostAction::OpenDockManagement);
        let restored = self.manager.restore_on_startup(host);
        info!(version = env!("CARGO_PKG_VERSION"), restored, "window docks plugin loaded");
        restored
    }

    /// Module unload: release every embedded window.
    pub fn on_unload(&mut self, host: &mut dyn DockHost) {
        self.session = None;
        self.manager.shutdown(host);
        info!("window docks plugin unloaded");
    }

    pub fn on_menu_action(&mut self, action: HostAction) -> &mut EditSession {
        match action {
            HostAction::OpenDockManagement => self.open_management(),
        }
    }

    /// Open the management dialog, or return the one already open.
    pub fn open_management(&mut self) -> &mut EditSession {
        let manager = &self.manager;
        self.session
            .get_or_insert_with(|| EditSession::load(&manager.store().load()))
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    pub fn dialog_text(&self) -> DialogText {
        DialogText::new(self.manager.translator())
    }

    pub fn picker_entries(&self) -> Vec<PickerEntry> {
        picker_entries(self.manager.window_system(), self.manager.translator())
    }

    /// Apply button: reconcile, persist, then reload the dialog from the
    /// store. Returns `None` when no dialog is open.
    pub fn apply(&mut self, host: &mut dyn DockHost) -> Option<ReconcilePlan> {
        let session = self.session.as_ref()?;
        let plan = self.manager.apply_changes(host, session);
        self.session = Some(EditSession::load(&self.manager.store().load()));
        Some(plan)
    }

    /// Close button: apply, then end the session.
    pub fn close(&mut self, host: &mut dyn DockHost) -> Option<ReconcilePlan> {
        let plan = self.apply(host);
        self.session = None;
        plan
    }

    /// Per-row detach button: release the window of the row's persisted
    /// dock right away, without an apply.
    pub fn detach_row(&mut self, host: &mut dyn DockHost, row: usize) -> bool {
        let Some(id) = self
            .session
            .as_ref()
            .and_then(|s| s.row(row))
            .and_then(|r| r.old_id())
            .cloned()
        else {
            debug!(row, "detach for a row without a persisted dock");
            return false;
        };
        match self.manager.detach_dock(host, &id) {
            Ok(released) => released,
            Err(e) => {
                warn!(dock_id = %id, "{e}");
                false
            }
        }
    }

    /// Capture button on a dock's placeholder.
    pub fn on_capture_clicked(&mut self, host: &mut dyn DockHost, id: &DockId) -> bool {
        match self.manager.attempt_capture(host, id) {
            Ok(captured) => captured,
            Err(e) => {
                warn!(dock_id = %id, "{e}");
                false
            }
        }
    }

    pub fn on_timer(&mut self, host: &mut dyn DockHost, timer: TimerId) {
        self.manager.on_timer(host, timer);
    }

    pub fn on_container_resized(&mut self, host: &mut dyn DockHost, id: &DockId) {
        if !self.manager.on_container_resized(host, id) {
            debug!(dock_id = %id, "resize for inactive dock");
        }
    }
}
