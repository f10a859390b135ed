use std::mem;

use snapfix_core::{ProbeError, ProbeResult};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::GetWindowRect;

/// Returns the outer bounds of a window in screen coordinates.
///
/// `GetWindowRect` on Windows 10/11 includes the invisible drop-shadow
/// border, which is exactly the rectangle the snap classifier's outward
/// tolerance is calibrated against. DWM extended frame bounds are used as
/// the fallback when the plain query fails.
pub fn outer_rect(hwnd: HWND) -> ProbeResult<RECT> {
    let mut rect = RECT::default();
    if unsafe { GetWindowRect(hwnd, &mut rect) }.is_ok() {
        return Ok(rect);
    }

    let result = unsafe {
        DwmGetWindowAttribute(
            hwnd,
            DWMWA_EXTENDED_FRAME_BOUNDS,
            &mut rect as *mut RECT as *mut _,
            mem::size_of::<RECT>() as u32,
        )
    };
    result.map_err(|e| ProbeError::Window(e.to_string()))?;
    Ok(rect)
}
