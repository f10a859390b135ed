use std::fmt;

/// A platform-agnostic window lifecycle event.
///
/// These carry no geometry payload: they only mean "recompute now". The
/// adjuster re-reads the window's rectangle itself, after the settle delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window finished moving or resizing.
    Moved { hwnd: usize },

    /// The window's state changed (maximized, restored, minimized).
    StateChanged { hwnd: usize },

    /// The window was destroyed; its controller should be dropped.
    Destroyed { hwnd: usize },
}

impl WindowEvent {
    /// Returns the window handle associated with this event.
    pub fn hwnd(&self) -> usize {
        match self {
            Self::Moved { hwnd } | Self::StateChanged { hwnd } | Self::Destroyed { hwnd } => *hwnd,
        }
    }
}

impl fmt::Display for WindowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { hwnd } => write!(f, "moved 0x{hwnd:X}"),
            Self::StateChanged { hwnd } => write!(f, "state-changed 0x{hwnd:X}"),
            Self::Destroyed { hwnd } => write!(f, "destroyed 0x{hwnd:X}"),
        }
    }
}
