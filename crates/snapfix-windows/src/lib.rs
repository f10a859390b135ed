//! Win32 implementations of the Snapfix capability traits.
//!
//! Everything here is Windows-only; on other targets the crate compiles to
//! an empty library so workspace-wide builds and tests still work.

/// Ctrl+C handling for the CLI.
#[cfg(windows)]
pub mod ctrl_c;

/// Cursor position queries.
#[cfg(windows)]
pub mod cursor;

/// Process DPI awareness.
#[cfg(windows)]
pub mod dpi;

/// WinEvent translation to core window events.
#[cfg(windows)]
pub mod event;

/// WinEvent hook thread feeding move/resize events.
#[cfg(windows)]
pub mod event_loop;

/// DWM extended frame bounds.
#[cfg(windows)]
pub mod frame;

/// Synthesized keyboard input via `SendInput`.
#[cfg(windows)]
pub mod input;

/// Monitor bounds and work-area queries.
#[cfg(windows)]
pub mod monitor;

/// Delayed task execution off the UI thread.
#[cfg(windows)]
pub mod scheduler;

/// Taskbar shell probe.
#[cfg(windows)]
pub mod taskbar;

/// Window type wrapping a Win32 `HWND`.
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub use input::KeySender;
#[cfg(windows)]
pub use scheduler::DelayedExecutor;
#[cfg(windows)]
pub use taskbar::Taskbar;
#[cfg(windows)]
pub use window::Window;
