//! Per-dock embedding state machine.
//!
//! The controller is the only code that mutates foreign windows: style
//! bits, parent, frame and visibility. Every OS failure is logged and
//! swallowed; the controller's state only reflects what it asked for.

mod layout;
mod search;


use tracing::{debug, info, warn};
use windock_common::{Rect, SurfaceHandle, WindowHandle, WindowStyle};
use windock_platform::WindowSystem;

pub use layout::scaled_frame;
pub use search::SearchOutcome;

/// Decorations removed from a window while it lives inside a dock.
pub const EMBED_STRIPPED_STYLE: WindowStyle = WindowStyle::CAPTION
    .union(WindowStyle::THICKFRAME)
    .union(WindowStyle::MINIMIZE)
    .union(WindowStyle::MAXIMIZE)
    .union(WindowStyle::SYSMENU);

/// Style applied to a window when it is handed back to the desktop.
pub const DETACHED_STYLE: WindowStyle =
    WindowStyle::OVERLAPPEDWINDOW.union(WindowStyle::VISIBLE);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedState {
    /// Placeholder content, no window.
    Unattached,
    /// Startup search in progress; `attempts` failed polls so far.
    SearchPending { attempts: u32, max_attempts: u32 },
    Attached(WindowHandle),
}

pub struct EmbeddingController {
    container: SurfaceHandle,
    target_title: String,
    state: EmbedState,
    /// Screen rectangle of the window before it was captured.
    restore_rect: Option<Rect>,
}

impl EmbeddingController {
    pub fn new(container: SurfaceHandle, target_title: impl Into<String>) -> Self {
        Self {
            container,
            target_title: target_title.into(),
            state: EmbedState::Unattached,
            restore_rect: None,
        }
    }

    pub fn state(&self) -> EmbedState {
        self.state
    }

    pub fn container(&self) -> SurfaceHandle {
        self.container
    }

    pub fn target_title(&self) -> &str {
        &self.target_title
    }

    pub fn set_target_title(&mut self, title: impl Into<String>) {
        self.target_title = title.into();
    }

    pub fn handle(&self) -> Option<WindowHandle> {
        match self.state {
            EmbedState::Attached(window) => Some(window),
            _ => None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle().is_some()
    }

    /// Look up the target window by exact title.
    fn lookup(&self, ws: &dyn WindowSystem) -> Option<WindowHandle> {
        if self.target_title.is_empty() {
            return None;
        }
        ws.find_window(&self.target_title)
    }

    /// Capture `window` into the container.
    ///
    /// Re-attaching the window that is already embedded only re-runs the
    /// layout. A different window replaces the current one, which is
    /// released back to the desktop first.
    pub fn attach(&mut self, ws: &dyn WindowSystem, window: WindowHandle) {
        match self.state {
            EmbedState::Attached(current) if current == window => {
                self.relayout(ws);
                return;
            }
            EmbedState::Attached(_) => {
                self.detach(ws);
            }
            _ => {}
        }

        self.restore_rect = match ws.window_rect(window) {
            Ok(rect) => Some(rect),
            Err(e) => {
                warn!(hwnd = %window, "could not read window rect: {e}");
                None
            }
        };

        match ws.style(window) {
            Ok(style) => {
                if let Err(e) = ws.set_style(window, style.difference(EMBED_STRIPPED_STYLE)) {
                    warn!(hwnd = %window, "failed to strip window decorations: {e}");
                }
            }
            Err(e) => warn!(hwnd = %window, "could not read window style: {e}"),
        }

        if let Err(e) = ws.set_parent(window, Some(self.container)) {
            warn!(hwnd = %window, container = %self.container, "failed to reparent window: {e}");
        }

        self.state = EmbedState::Attached(window);
        self.relayout(ws);

        if let Err(e) = ws.show(window) {
            warn!(hwnd = %window, "failed to show embedded window: {e}");
        }
        info!(hwnd = %window, title = %self.target_title, "window attached");
    }

    /// Size the embedded window to the container, rescaled for DPI.
    pub fn relayout(&self, ws: &dyn WindowSystem) {
        let Some(window) = self.handle() else {
            return;
        };
        let client = match ws.client_rect(self.container) {
            Ok(rect) => rect,
            Err(e) => {
                warn!(container = %self.container, "could not read container size: {e}");
                return;
            }
        };
        let container_dpi = ws.surface_dpi(self.container).unwrap_or_default();
        let source_dpi = ws.window_dpi(window).unwrap_or_default();
        let frame = scaled_frame(client, container_dpi, source_dpi);

        if let Err(e) = ws.set_frame(window, frame) {
            warn!(hwnd = %window, "failed to resize embedded window: {e}");
        }
    }

    /// Hand the embedded window back to the desktop.
    ///
    /// Returns `true` when a window was released. Without a handle this
    /// does nothing; a handle whose window is gone is simply forgotten.
    pub fn detach(&mut self, ws: &dyn WindowSystem) -> bool {
        let Some(window) = self.handle() else {
            debug!(title = %self.target_title, "detach without embedded window");
            return false;
        };
        self.state = EmbedState::Unattached;
        let restore_rect = self.restore_rect.take();

        if !ws.is_window(window) {
            debug!(hwnd = %window, "embedded window already destroyed");
            return false;
        }

        if let Err(e) = ws.set_parent(window, None) {
            warn!(hwnd = %window, "failed to reparent window to desktop: {e}");
        }
        if let Err(e) = ws.set_style(window, DETACHED_STYLE) {
            warn!(hwnd = %window, "failed to restore window style: {e}");
        }
        if let Some(rect) = restore_rect {
            if let Err(e) = ws.set_frame(window, rect) {
                warn!(hwnd = %window, "failed to restore window position: {e}");
            }
        }
        if let Err(e) = ws.show(window) {
            warn!(hwnd = %window, "failed to show released window: {e}");
        }
        info!(hwnd = %window, "window detached");
        true
    }

    /// Forget an embedded handle whose window has been destroyed.
    ///
    /// Returns `true` when the state changed.
    pub fn forget_if_gone(&mut self, ws: &dyn WindowSystem) -> bool {
        match self.state {
            EmbedState::Attached(window) if !ws.is_window(window) => {
                debug!(hwnd = %window, "embedded window is gone");
                self.state = EmbedState::Unattached;
                self.restore_rect = None;
                true
            }
            _ => false,
        }
    }

    /// One immediate lookup of the target window; attaches on a match.
    ///
    /// A miss changes nothing, and a pending search keeps running.
    pub fn attempt_capture(&mut self, ws: &dyn WindowSystem) -> bool {
        match self.lookup(ws) {
            Some(window) => {
                self.attach(ws, window);
                true
            }
            None => {
                debug!(title = %self.target_title, "capture found no window");
                false
            }
        }
    }
}
