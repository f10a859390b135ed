use std::fmt;

use crate::Rect;

/// A snapshot of the monitor hosting a window.
///
/// Re-queried on every adjustment: monitor layout and taskbar geometry can
/// change between calls, so nothing here is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenArea {
    /// Monitor device name (e.g. `\\.\DISPLAY1`). Used to match a window
    /// against the taskbar's hosting monitor.
    pub name: String,
    /// Full physical monitor rectangle.
    pub bounds: Rect,
    /// The sub-rectangle excluding docked bars. Snap targets are computed
    /// against this.
    pub work_area: Rect,
}

/// The screen edge a docked bar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        };
        f.write_str(s)
    }
}

/// A snapshot of the system taskbar, built fresh on each proximity check.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskbarInfo {
    /// Taskbar bounding rectangle in screen coordinates.
    pub bounds: Rect,
    /// The monitor edge the taskbar is docked to.
    pub edge: Edge,
    /// Whether the taskbar hides itself until the pointer approaches its edge.
    pub auto_hide: bool,
    /// Device name of the monitor hosting the taskbar.
    pub screen_name: String,
}
