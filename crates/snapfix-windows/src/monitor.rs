use std::mem;

use snapfix_core::{ProbeError, ProbeResult, Rect, ScreenArea};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITORINFO, MONITORINFOEXW,
    MonitorFromWindow,
};

/// Returns the monitor snapshot for the monitor hosting the given window.
///
/// Bounds, work area, and device name come from a single `GetMonitorInfoW`
/// call; nothing is cached because monitor and taskbar geometry can change
/// between adjustments.
pub fn screen_area_for_window(hwnd: HWND) -> ProbeResult<ScreenArea> {
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
    screen_area_for_monitor(monitor)
}

/// Queries bounds, work area, and device name for a monitor handle.
pub fn screen_area_for_monitor(monitor: HMONITOR) -> ProbeResult<ScreenArea> {
    let mut info = MONITORINFOEXW {
        monitorInfo: MONITORINFO {
            cbSize: mem::size_of::<MONITORINFOEXW>() as u32,
            ..Default::default()
        },
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the struct according to cbSize; with
    // the MONITORINFOEXW size it also writes the device name.
    let success =
        unsafe { GetMonitorInfoW(monitor, &mut info as *mut MONITORINFOEXW as *mut MONITORINFO) };
    if !success.as_bool() {
        return Err(ProbeError::Monitor("GetMonitorInfoW failed".into()));
    }

    let name_len = info
        .szDevice
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(info.szDevice.len());
    let name = String::from_utf16_lossy(&info.szDevice[..name_len]);

    Ok(ScreenArea {
        name,
        bounds: to_rect(&info.monitorInfo.rcMonitor),
        work_area: to_rect(&info.monitorInfo.rcWork),
    })
}

/// Converts a Win32 `RECT` (integer LTRB) to the core float rectangle.
pub fn to_rect(rc: &RECT) -> Rect {
    Rect::new(
        f64::from(rc.left),
        f64::from(rc.top),
        f64::from(rc.right),
        f64::from(rc.bottom),
    )
}
