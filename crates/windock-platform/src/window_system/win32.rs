//! Win32 WindowSystem implementation.
//!
//! Thin wrappers over `user32`/`shcore` calls. Each method converts the
//! opaque handle back into an `HWND` and maps API failures into
//! `PlatformError` so callers can log them and move on.

use std::ffi::c_void;

use windock_common::errors::PlatformError;
use windock_common::types::{Dpi, Rect, SurfaceHandle, WindowHandle, WindowStyle};
use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::{CloseHandle, BOOL, FALSE, HWND, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{MonitorFromWindow, MONITOR_DEFAULTTONEAREST};
use windows::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_FORMAT,
    PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows::Win32::UI::HiDpi::{GetDpiForMonitor, MDT_EFFECTIVE_DPI};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, FindWindowW, GetClientRect, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindow, IsWindowVisible, SetParent, SetWindowPos, ShowWindow,
    GWL_STYLE, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOZORDER, SW_SHOW,
};
#[cfg(target_pointer_width = "32")]
use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongW, SetWindowLongW};
#[cfg(target_pointer_width = "64")]
use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, SetWindowLongPtrW};

use super::{Result, WindowSystem};

/// Win32-based window system.
#[derive(Default)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut c_void)
}

// The `Ptr` variants only exist on 64-bit targets.
#[cfg(target_pointer_width = "64")]
fn read_style_bits(window: HWND) -> u32 {
    unsafe { GetWindowLongPtrW(window, GWL_STYLE) as u32 }
}

#[cfg(target_pointer_width = "32")]
fn read_style_bits(window: HWND) -> u32 {
    unsafe { GetWindowLongW(window, GWL_STYLE) as u32 }
}

#[cfg(target_pointer_width = "64")]
fn write_style_bits(window: HWND, bits: u32) {
    unsafe { SetWindowLongPtrW(window, GWL_STYLE, bits as isize) };
}

#[cfg(target_pointer_width = "32")]
fn write_style_bits(window: HWND, bits: u32) {
    unsafe { SetWindowLongW(window, GWL_STYLE, bits as i32) };
}

fn surface_hwnd(surface: SurfaceHandle) -> HWND {
    HWND(surface.0 as *mut c_void)
}

fn api_error(call: &str, err: windows::core::Error) -> PlatformError {
    PlatformError::WindowSystemError(format!("{call} failed: {err}"))
}

unsafe extern "system" fn collect_hwnd(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = &mut *(lparam.0 as *mut Vec<WindowHandle>);
    handles.push(WindowHandle(hwnd.0 as isize));
    TRUE
}

fn monitor_dpi(hwnd: HWND) -> Option<Dpi> {
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
    if monitor.0.is_null() {
        return None;
    }
    let (mut x, mut y) = (0u32, 0u32);
    unsafe { GetDpiForMonitor(monitor, MDT_EFFECTIVE_DPI, &mut x, &mut y) }.ok()?;
    Some(Dpi { x, y })
}

impl WindowSystem for Win32WindowSystem {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>> {
        let mut handles: Vec<WindowHandle> = Vec::new();
        unsafe {
            EnumWindows(
                Some(collect_hwnd),
                LPARAM(&mut handles as *mut Vec<WindowHandle> as isize),
            )
        }
        .map_err(|e| api_error("EnumWindows", e))?;
        Ok(handles)
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        window.0 != 0 && unsafe { IsWindow(hwnd(window)) }.as_bool()
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        unsafe { IsWindowVisible(hwnd(window)) }.as_bool()
    }

    fn window_title(&self, window: WindowHandle) -> Option<String> {
        let len = unsafe { GetWindowTextLengthW(hwnd(window)) };
        if len <= 0 {
            return None;
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = unsafe { GetWindowTextW(hwnd(window), &mut buf) };
        if copied <= 0 {
            return None;
        }
        Some(String::from_utf16_lossy(&buf[..copied as usize]))
    }

    fn process_name(&self, window: WindowHandle) -> Result<String> {
        let mut pid: u32 = 0;
        unsafe { GetWindowThreadProcessId(hwnd(window), Some(&mut pid)) };
        if pid == 0 {
            return Err(PlatformError::StaleHandle(window.0));
        }

        let process = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, FALSE, pid) }
            .map_err(|e| api_error("OpenProcess", e))?;
        let mut buf = [0u16; 1024];
        let mut len = buf.len() as u32;
        let queried = unsafe {
            QueryFullProcessImageNameW(
                process,
                PROCESS_NAME_FORMAT(0),
                PWSTR(buf.as_mut_ptr()),
                &mut len,
            )
        };
        let _ = unsafe { CloseHandle(process) };
        queried.map_err(|e| api_error("QueryFullProcessImageNameW", e))?;

        let path = String::from_utf16_lossy(&buf[..len as usize]);
        Ok(path.rsplit('\\').next().unwrap_or(&path).to_string())
    }

    fn find_window(&self, title: &str) -> Option<WindowHandle> {
        let wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();
        let found = unsafe { FindWindowW(PCWSTR::null(), PCWSTR(wide.as_ptr())) }.ok()?;
        if found.0.is_null() {
            None
        } else {
            Some(WindowHandle(found.0 as isize))
        }
    }

    fn style(&self, window: WindowHandle) -> Result<WindowStyle> {
        if !self.is_window(window) {
            return Err(PlatformError::StaleHandle(window.0));
        }
        Ok(WindowStyle::from_bits_retain(read_style_bits(hwnd(window))))
    }

    fn set_style(&self, window: WindowHandle, style: WindowStyle) -> Result<()> {
        if !self.is_window(window) {
            return Err(PlatformError::StaleHandle(window.0));
        }
        write_style_bits(hwnd(window), style.bits());
        Ok(())
    }

    fn set_parent(&self, window: WindowHandle, parent: Option<SurfaceHandle>) -> Result<()> {
        let new_parent = parent.map(surface_hwnd).unwrap_or_default();
        unsafe { SetParent(hwnd(window), new_parent) }
            .map(|_| ())
            .map_err(|e| api_error("SetParent", e))
    }

    fn window_rect(&self, window: WindowHandle) -> Result<Rect> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd(window), &mut rect) }
            .map_err(|e| api_error("GetWindowRect", e))?;
        Ok(Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom))
    }

    fn client_rect(&self, surface: SurfaceHandle) -> Result<Rect> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(surface_hwnd(surface), &mut rect) }
            .map_err(|e| api_error("GetClientRect", e))?;
        Ok(Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom))
    }

    fn window_dpi(&self, window: WindowHandle) -> Option<Dpi> {
        monitor_dpi(hwnd(window))
    }

    fn surface_dpi(&self, surface: SurfaceHandle) -> Option<Dpi> {
        monitor_dpi(surface_hwnd(surface))
    }

    fn set_frame(&self, window: WindowHandle, frame: Rect) -> Result<()> {
        unsafe {
            SetWindowPos(
                hwnd(window),
                HWND::default(),
                frame.x,
                frame.y,
                frame.width,
                frame.height,
                SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED,
            )
        }
        .map_err(|e| api_error("SetWindowPos", e))
    }

    fn show(&self, window: WindowHandle) -> Result<()> {
        if !self.is_window(window) {
            return Err(PlatformError::StaleHandle(window.0));
        }
        // Return value is the previous visibility, not an error flag
        let _ = unsafe { ShowWindow(hwnd(window), SW_SHOW) };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_desktop() {
        let ws = Win32WindowSystem::new();
        assert!(ws.top_level_windows().is_ok());
    }

    #[test]
    fn null_handle_is_not_a_window() {
        let ws = Win32WindowSystem::new();
        assert!(!ws.is_window(WindowHandle(0)));
        assert!(matches!(
            ws.style(WindowHandle(0)),
            Err(PlatformError::StaleHandle(0))
        ));
    }

    #[test]
    fn live_window_style_is_readable() {
        let ws = Win32WindowSystem::new();
        let windows = ws.top_level_windows().unwrap();
        if let Some(&window) = windows.iter().find(|&&w| ws.is_visible(w)) {
            let style = ws.style(window).unwrap();
            assert!(style.contains(WindowStyle::VISIBLE));
        }
    }

    #[test]
    fn unknown_title_is_not_found() {
        let ws = Win32WindowSystem::new();
        assert!(ws
            .find_window("windock test window that does not exist 7f3a")
            .is_none());
    }
}
