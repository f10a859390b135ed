use snapfix_core::{ProbeResult, Rect, ScreenArea};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetForegroundWindow, GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW,
    IsWindowVisible, WS_CAPTION,
};

use crate::{frame, monitor};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// Supplies the geometry half of the
/// [`ChromeWindow`](snapfix_core::ChromeWindow) contract; the padding half
/// lives with whoever owns the chrome container, so embedders wrap this
/// type and delegate the geometry calls to it.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a `Window` from a raw handle value (pointer-sized integer).
    ///
    /// Lets callers construct a `Window` without depending on the
    /// `windows` crate directly.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the currently focused top-level window, if any.
    pub fn foreground() -> Option<Self> {
        // SAFETY: GetForegroundWindow returns a null HWND when no window
        // has focus.
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            None
        } else {
            Some(Self { hwnd })
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the raw handle as a pointer-sized integer.
    pub fn raw(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// The window's outer rectangle in screen coordinates, including the
    /// invisible resize border.
    pub fn outer_rect(&self) -> ProbeResult<Rect> {
        let rc = frame::outer_rect(self.hwnd)?;
        Ok(monitor::to_rect(&rc))
    }

    /// A fresh snapshot of the hosting monitor.
    pub fn screen_area(&self) -> ProbeResult<ScreenArea> {
        monitor::screen_area_for_window(self.hwnd)
    }

    /// Returns whether the window has had its standard caption stripped,
    /// i.e. is drawing borderless custom chrome.
    pub fn is_borderless(&self) -> bool {
        // SAFETY: GetWindowLongPtrW is a read-only style query.
        let style = unsafe { GetWindowLongPtrW(self.hwnd, GWL_STYLE) } as u32;
        (style & WS_CAPTION.0) != WS_CAPTION.0
    }

    /// Returns the window title, for diagnostics output.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW read window text
        // without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }
}
