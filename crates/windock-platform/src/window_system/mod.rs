use windock_common::errors::PlatformError;
use windock_common::types::{Dpi, Rect, SurfaceHandle, WindowHandle, WindowStyle};

pub mod noop;
#[cfg(target_os = "windows")]
pub mod win32;

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Primitive operations on native window handles.
///
/// Every call runs synchronously on the host UI thread. Callers treat
/// failures against a handle that has since been destroyed as best-effort:
/// they are logged, never escalated.
pub trait WindowSystem {
    /// All top-level windows in OS enumeration order.
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>>;

    fn is_window(&self, window: WindowHandle) -> bool;

    fn is_visible(&self, window: WindowHandle) -> bool;

    /// Title text, `None` when the window has none.
    fn window_title(&self, window: WindowHandle) -> Option<String>;

    /// Executable base name of the owning process. Fails when the process
    /// cannot be opened (access denied, already exited).
    fn process_name(&self, window: WindowHandle) -> Result<String>;

    /// Locate a top-level window whose title equals `title`.
    fn find_window(&self, title: &str) -> Option<WindowHandle>;

    fn style(&self, window: WindowHandle) -> Result<WindowStyle>;

    fn set_style(&self, window: WindowHandle, style: WindowStyle) -> Result<()>;

    /// Reparent under `parent`, or back to the desktop root when `None`.
    fn set_parent(&self, window: WindowHandle, parent: Option<SurfaceHandle>) -> Result<()>;

    /// Outer rectangle in screen coordinates.
    fn window_rect(&self, window: WindowHandle) -> Result<Rect>;

    /// Client area of a host container surface.
    fn client_rect(&self, surface: SurfaceHandle) -> Result<Rect>;

    /// Effective DPI of the monitor nearest to the window.
    fn window_dpi(&self, window: WindowHandle) -> Option<Dpi>;

    /// Effective DPI of the monitor nearest to the surface.
    fn surface_dpi(&self, surface: SurfaceHandle) -> Option<Dpi>;

    /// Move and resize without changing z-order or activation.
    fn set_frame(&self, window: WindowHandle, frame: Rect) -> Result<()>;

    fn show(&self, window: WindowHandle) -> Result<()>;
}

/// Create the platform-appropriate WindowSystem.
///
/// On Windows: returns the Win32 implementation.
/// On other platforms: returns a no-op implementation.
pub fn create_window_system() -> Box<dyn WindowSystem> {
    #[cfg(target_os = "windows")]
    {
        Box::new(win32::Win32WindowSystem::new())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(noop::NoopWindowSystem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_window_system_returns_impl() {
        let ws = create_window_system();
        // Enumeration succeeds even where embedding is unsupported
        assert!(ws.top_level_windows().is_ok());
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn fallback_finds_nothing() {
        let ws = create_window_system();
        assert!(ws.find_window("Anything").is_none());
    }
}
