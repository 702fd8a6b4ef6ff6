//! In-memory doubles for `WindowSystem` and `DockHost`.
//!
//! `FakeWindowSystem` is a cheap handle onto shared state, so a test can
//! give one clone to a `DockManager` and keep another to inspect.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use windock_common::{DockId, Dpi, PlatformError, Rect, SurfaceHandle, WindowHandle, WindowStyle};
use windock_platform::WindowSystem;

use crate::host::{DockHost, HostAction, Placeholder, TimerId};

type PlatformResult<T> = std::result::Result<T, PlatformError>;

/// A mutating call made against the fake window system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCall {
    SetStyle(WindowHandle, WindowStyle),
    SetParent(WindowHandle, Option<SurfaceHandle>),
    SetFrame(WindowHandle, Rect),
    Show(WindowHandle),
}

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub handle: WindowHandle,
    pub title: String,
    /// `None` simulates a process that cannot be opened.
    pub process: Option<String>,
    pub visible: bool,
    pub style: WindowStyle,
    pub rect: Rect,
    pub parent: Option<SurfaceHandle>,
    pub dpi: Option<Dpi>,
}

#[derive(Debug, Default)]
struct FakeState {
    windows: Vec<FakeWindow>,
    surfaces: HashMap<SurfaceHandle, (Rect, Option<Dpi>)>,
    calls: Vec<WindowCall>,
    lookups: u32,
    next_handle: isize,
}

#[derive(Debug, Clone, Default)]
pub struct FakeWindowSystem {
    state: Rc<RefCell<FakeState>>,
}

impl FakeWindowSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a visible, decorated window owned by `process`.
    pub fn open(&self, title: &str, process: &str) -> WindowHandle {
        self.insert(title, Some(process.to_string()), true)
    }

    pub fn open_hidden(&self, title: &str, process: &str) -> WindowHandle {
        self.insert(title, Some(process.to_string()), false)
    }

    /// Open a window whose owning process cannot be queried.
    pub fn open_protected(&self, title: &str) -> WindowHandle {
        self.insert(title, None, true)
    }

    fn insert(&self, title: &str, process: Option<String>, visible: bool) -> WindowHandle {
        let mut state = self.state.borrow_mut();
        state.next_handle += 0x10;
        let handle = WindowHandle(0x1000 + state.next_handle);
        state.windows.push(FakeWindow {
            handle,
            title: title.to_string(),
            process,
            visible,
            style: WindowStyle::OVERLAPPEDWINDOW | WindowStyle::VISIBLE,
            rect: Rect::new(100, 100, 800, 600),
            parent: None,
            dpi: None,
        });
        handle
    }

    /// Destroy a window; its handle goes stale.
    pub fn close(&self, window: WindowHandle) {
        self.state
            .borrow_mut()
            .windows
            .retain(|w| w.handle != window);
    }

    pub fn set_window_dpi(&self, window: WindowHandle, dpi: Dpi) {
        self.update(window, |w| w.dpi = Some(dpi));
    }

    /// Give a container surface a client area and DPI.
    pub fn set_surface(&self, surface: SurfaceHandle, client: Rect, dpi: Option<Dpi>) {
        self.state
            .borrow_mut()
            .surfaces
            .insert(surface, (client, dpi));
    }

    pub fn window(&self, window: WindowHandle) -> Option<FakeWindow> {
        self.find(window)
    }

    /// Every mutating call so far, in order.
    pub fn calls(&self) -> Vec<WindowCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Number of title lookups so far.
    pub fn lookups(&self) -> u32 {
        self.state.borrow().lookups
    }

    fn find(&self, window: WindowHandle) -> Option<FakeWindow> {
        self.state
            .borrow()
            .windows
            .iter()
            .find(|w| w.handle == window)
            .cloned()
    }

    fn update(&self, window: WindowHandle, f: impl FnOnce(&mut FakeWindow)) -> bool {
        let mut state = self.state.borrow_mut();
        match state.windows.iter_mut().find(|w| w.handle == window) {
            Some(w) => {
                f(w);
                true
            }
            None => false,
        }
    }

    fn record(&self, call: WindowCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl WindowSystem for FakeWindowSystem {
    fn top_level_windows(&self) -> PlatformResult<Vec<WindowHandle>> {
        Ok(self
            .state
            .borrow()
            .windows
            .iter()
            .filter(|w| w.parent.is_none())
            .map(|w| w.handle)
            .collect())
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        self.find(window).is_some()
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        self.find(window).is_some_and(|w| w.visible)
    }

    fn window_title(&self, window: WindowHandle) -> Option<String> {
        self.find(window)
            .map(|w| w.title)
            .filter(|t| !t.is_empty())
    }

    fn process_name(&self, window: WindowHandle) -> PlatformResult<String> {
        match self.find(window) {
            Some(FakeWindow {
                process: Some(name),
                ..
            }) => Ok(name),
            Some(_) => Err(PlatformError::WindowSystemError("access denied".into())),
            None => Err(PlatformError::StaleHandle(window.0)),
        }
    }

    fn find_window(&self, title: &str) -> Option<WindowHandle> {
        self.state.borrow_mut().lookups += 1;
        self.state
            .borrow()
            .windows
            .iter()
            .find(|w| w.parent.is_none() && w.title == title)
            .map(|w| w.handle)
    }

    fn style(&self, window: WindowHandle) -> PlatformResult<WindowStyle> {
        self.find(window)
            .map(|w| w.style)
            .ok_or(PlatformError::StaleHandle(window.0))
    }

    fn set_style(&self, window: WindowHandle, style: WindowStyle) -> PlatformResult<()> {
        self.record(WindowCall::SetStyle(window, style));
        if self.update(window, |w| w.style = style) {
            Ok(())
        } else {
            Err(PlatformError::StaleHandle(window.0))
        }
    }

    fn set_parent(&self, window: WindowHandle, parent: Option<SurfaceHandle>) -> PlatformResult<()> {
        self.record(WindowCall::SetParent(window, parent));
        if self.update(window, |w| w.parent = parent) {
            Ok(())
        } else {
            Err(PlatformError::StaleHandle(window.0))
        }
    }

    fn window_rect(&self, window: WindowHandle) -> PlatformResult<Rect> {
        self.find(window)
            .map(|w| w.rect)
            .ok_or(PlatformError::StaleHandle(window.0))
    }

    fn client_rect(&self, surface: SurfaceHandle) -> PlatformResult<Rect> {
        self.state
            .borrow()
            .surfaces
            .get(&surface)
            .map(|(rect, _)| *rect)
            .ok_or_else(|| PlatformError::WindowSystemError(format!("unknown surface {surface}")))
    }

    fn window_dpi(&self, window: WindowHandle) -> Option<Dpi> {
        self.find(window).and_then(|w| w.dpi)
    }

    fn surface_dpi(&self, surface: SurfaceHandle) -> Option<Dpi> {
        self.state
            .borrow()
            .surfaces
            .get(&surface)
            .and_then(|(_, dpi)| *dpi)
    }

    fn set_frame(&self, window: WindowHandle, frame: Rect) -> PlatformResult<()> {
        self.record(WindowCall::SetFrame(window, frame));
        if self.update(window, |w| w.rect = frame) {
            Ok(())
        } else {
            Err(PlatformError::StaleHandle(window.0))
        }
    }

    fn show(&self, window: WindowHandle) -> PlatformResult<()> {
        self.record(WindowCall::Show(window));
        if self.update(window, |w| w.visible = true) {
            Ok(())
        } else {
            Err(PlatformError::StaleHandle(window.0))
        }
    }
}

/// A panel the fake host is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakePanel {
    pub id: DockId,
    pub title: String,
    pub container: SurfaceHandle,
}

/// Records every host call and lets tests inject refusals.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub panels: Vec<FakePanel>,
    /// Total `add_panel` calls, accepted or not.
    pub add_panel_calls: usize,
    pub removed_panels: Vec<DockId>,
    pub released_containers: Vec<SurfaceHandle>,
    pub placeholders: HashMap<SurfaceHandle, Placeholder>,
    pub timers: BTreeMap<TimerId, Duration>,
    pub stopped_timers: Vec<TimerId>,
    pub menu_actions: Vec<(String, HostAction)>,
    /// Refuse every panel registration.
    pub reject_panels: bool,
    /// Refuse to create containers.
    pub no_containers: bool,
    /// Client area and DPI given to every new container.
    pub container_client: Rect,
    next_container: isize,
    next_timer: u64,
    windows: Option<FakeWindowSystem>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            container_client: Rect::new(0, 0, 400, 300),
            ..Self::default()
        }
    }

    /// Register new containers with `windows` so their client areas can
    /// be queried.
    pub fn with_windows(windows: &FakeWindowSystem) -> Self {
        Self {
            windows: Some(windows.clone()),
            ..Self::new()
        }
    }

    pub fn panel(&self, id: &DockId) -> Option<&FakePanel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    pub fn container_of(&self, id: &DockId) -> Option<SurfaceHandle> {
        self.panel(id).map(|p| p.container)
    }

    pub fn placeholder_for(&self, id: &DockId) -> Option<&Placeholder> {
        self.container_of(id)
            .and_then(|c| self.placeholders.get(&c))
    }

    pub fn active_timers(&self) -> Vec<TimerId> {
        self.timers.keys().copied().collect()
    }
}

impl DockHost for FakeHost {
    fn create_container(&mut self, _id: &DockId) -> Option<SurfaceHandle> {
        if self.no_containers {
            return None;
        }
        self.next_container += 1;
        let surface = SurfaceHandle(0x9000 + self.next_container);
        if let Some(windows) = &self.windows {
            windows.set_surface(surface, self.container_client, None);
        }
        Some(surface)
    }

    fn release_container(&mut self, container: SurfaceHandle) {
        self.placeholders.remove(&container);
        self.released_containers.push(container);
    }

    fn add_panel(&mut self, id: &DockId, title: &str, container: SurfaceHandle) -> bool {
        self.add_panel_calls += 1;
        if self.reject_panels || self.panel(id).is_some() {
            return false;
        }
        self.panels.push(FakePanel {
            id: id.clone(),
            title: title.to_string(),
            container,
        });
        true
    }

    fn remove_panel(&mut self, id: &DockId) {
        if let Some(container) = self.container_of(id) {
            self.placeholders.remove(&container);
        }
        self.panels.retain(|p| &p.id != id);
        self.removed_panels.push(id.clone());
    }

    fn show_placeholder(&mut self, container: SurfaceHandle, placeholder: &Placeholder) {
        self.placeholders.insert(container, placeholder.clone());
    }

    fn hide_placeholder(&mut self, container: SurfaceHandle) {
        self.placeholders.remove(&container);
    }

    fn start_timer(&mut self, interval: Duration) -> TimerId {
        self.next_timer += 1;
        let timer = TimerId(self.next_timer);
        self.timers.insert(timer, interval);
        timer
    }

    fn stop_timer(&mut self, timer: TimerId) {
        self.timers.remove(&timer);
        self.stopped_timers.push(timer);
    }

    fn register_menu_action(&mut self, label: &str, action: HostAction) {
        self.menu_actions.push((label.to_string(), action));
    }
}
