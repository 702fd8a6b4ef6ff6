//! No-op WindowSystem implementation.
//!
//! Used on targets without window reparenting. Listing and lookups return
//! nothing, so every dock stays on its placeholder.

use windock_common::errors::PlatformError;
use windock_common::types::{Dpi, Rect, SurfaceHandle, WindowHandle, WindowStyle};

use super::{Result, WindowSystem};

pub struct NoopWindowSystem;

impl WindowSystem for NoopWindowSystem {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>> {
        Ok(Vec::new())
    }

    fn is_window(&self, _window: WindowHandle) -> bool {
        false
    }

    fn is_visible(&self, _window: WindowHandle) -> bool {
        false
    }

    fn window_title(&self, _window: WindowHandle) -> Option<String> {
        None
    }

    fn process_name(&self, window: WindowHandle) -> Result<String> {
        Err(PlatformError::StaleHandle(window.0))
    }

    fn find_window(&self, _title: &str) -> Option<WindowHandle> {
        None
    }

    fn style(&self, window: WindowHandle) -> Result<WindowStyle> {
        Err(PlatformError::StaleHandle(window.0))
    }

    fn set_style(&self, _window: WindowHandle, _style: WindowStyle) -> Result<()> {
        Err(PlatformError::NotSupported("window styles".into()))
    }

    fn set_parent(&self, _window: WindowHandle, _parent: Option<SurfaceHandle>) -> Result<()> {
        Err(PlatformError::NotSupported("reparenting".into()))
    }

    fn window_rect(&self, window: WindowHandle) -> Result<Rect> {
        Err(PlatformError::StaleHandle(window.0))
    }

    fn client_rect(&self, _surface: SurfaceHandle) -> Result<Rect> {
        Err(PlatformError::NotSupported("container surfaces".into()))
    }

    fn window_dpi(&self, _window: WindowHandle) -> Option<Dpi> {
        None
    }

    fn surface_dpi(&self, _surface: SurfaceHandle) -> Option<Dpi> {
        None
    }

    fn set_frame(&self, _window: WindowHandle, _frame: Rect) -> Result<()> {
        Err(PlatformError::NotSupported("window placement".into()))
    }

    fn show(&self, _window: WindowHandle) -> Result<()> {
        Err(PlatformError::NotSupported("window visibility".into()))
    }
}
