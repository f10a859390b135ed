//! Taskbar shell probe.
//!
//! Locates the `Shell_TrayWnd` window and asks the shell's appbar protocol
//! for its docked edge, bounds, and auto-hide state. Everything is queried
//! fresh per call; the taskbar can move or change modes at any time.

use std::mem;

use snapfix_core::{Edge, ProbeError, ProbeResult, ShellProbe, TaskbarInfo};
use windows::Win32::Graphics::Gdi::{MONITOR_DEFAULTTONEAREST, MonitorFromWindow};
use windows::Win32::UI::Shell::{
    ABE_BOTTOM, ABE_LEFT, ABE_RIGHT, ABE_TOP, ABM_GETSTATE, ABM_GETTASKBARPOS, ABS_AUTOHIDE,
    APPBARDATA, SHAppBarMessage,
};
use windows::Win32::UI::WindowsAndMessaging::FindWindowW;
use windows::core::w;

use crate::monitor;

/// Win32 implementation of [`ShellProbe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Taskbar;

impl ShellProbe for Taskbar {
    fn taskbar(&self) -> ProbeResult<TaskbarInfo> {
        // SAFETY: FindWindowW is a read-only lookup by class name.
        let hwnd = unsafe { FindWindowW(w!("Shell_TrayWnd"), None) }
            .map_err(|_| ProbeError::TaskbarNotFound)?;
        if hwnd.is_invalid() {
            return Err(ProbeError::TaskbarNotFound);
        }

        let mut data = APPBARDATA {
            cbSize: mem::size_of::<APPBARDATA>() as u32,
            hWnd: hwnd,
            ..Default::default()
        };

        // SAFETY: SHAppBarMessage with ABM_GETTASKBARPOS fills uEdge and rc.
        // A zero return means the shell refused the query.
        let ok = unsafe { SHAppBarMessage(ABM_GETTASKBARPOS, &mut data) };
        if ok == 0 {
            return Err(ProbeError::TaskbarNotFound);
        }
        let edge = match data.uEdge {
            e if e == ABE_LEFT => Edge::Left,
            e if e == ABE_TOP => Edge::Top,
            e if e == ABE_RIGHT => Edge::Right,
            e if e == ABE_BOTTOM => Edge::Bottom,
            _ => Edge::Bottom,
        };
        let bounds = monitor::to_rect(&data.rc);

        // SAFETY: ABM_GETSTATE returns the state flags in the result value
        // and ignores the rest of the struct.
        let mut state_data = APPBARDATA {
            cbSize: mem::size_of::<APPBARDATA>() as u32,
            ..Default::default()
        };
        let state = unsafe { SHAppBarMessage(ABM_GETSTATE, &mut state_data) } as u32;
        let auto_hide = state & ABS_AUTOHIDE == ABS_AUTOHIDE;

        // The taskbar's hosting monitor, so callers can match it against a
        // window's monitor by device name.
        let hmonitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
        let screen_name = monitor::screen_area_for_monitor(hmonitor)?.name;

        Ok(TaskbarInfo {
            bounds,
            edge,
            auto_hide,
            screen_name,
        })
    }
}
