use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer rectangle in physical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from Win32-style edges.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }
}

/// Effective dots-per-inch of a monitor, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dpi {
    pub x: u32,
    pub y: u32,
}

impl Dpi {
    /// The OS baseline when a monitor cannot be queried.
    pub const BASELINE: Dpi = Dpi { x: 96, y: 96 };

    pub fn uniform(dpi: u32) -> Self {
        Self { x: dpi, y: dpi }
    }
}

impl Default for Dpi {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Opaque handle of a foreign top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Native surface of a host-owned dock container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub isize);

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

bitflags::bitflags! {
    /// Window style bits. Values match the Win32 `WS_*` constants.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct WindowStyle: u32 {
        const MAXIMIZEBOX = 0x0001_0000;
        const MINIMIZEBOX = 0x0002_0000;
        const THICKFRAME = 0x0004_0000;
        const SYSMENU = 0x0008_0000;
        const CAPTION = 0x00C0_0000;
        const MAXIMIZE = 0x0100_0000;
        const VISIBLE = 0x1000_0000;
        const MINIMIZE = 0x2000_0000;
        const OVERLAPPEDWINDOW = Self::CAPTION.bits()
            | Self::SYSMENU.bits()
            | Self::THICKFRAME.bits()
            | Self::MINIMIZEBOX.bits()
            | Self::MAXIMIZEBOX.bits();

        // Styles read back from the OS carry bits not named here.
        const _ = !0;
    }
}
