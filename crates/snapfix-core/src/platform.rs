//! Capability traits implemented by platform crates.
//!
//! The controllers depend only on these, never on shell or input APIs
//! directly, so every platform call site has exactly one implementation per
//! target and a deterministic fake in tests.

use std::time::Duration;

use crate::{ProbeResult, TaskbarInfo};

/// Queries the OS shell for the system taskbar.
pub trait ShellProbe {
    /// Locates the taskbar and reads its bounds, docked edge, auto-hide
    /// state, and hosting monitor name. Fails with
    /// [`ProbeError::TaskbarNotFound`](crate::ProbeError::TaskbarNotFound)
    /// when the taskbar window cannot be found.
    fn taskbar(&self) -> ProbeResult<TaskbarInfo>;
}

/// A key in a synthesized chord.
///
/// Only the keys the reveal sequence needs: the platform exposes no direct
/// "show taskbar" call, so the revealer presses the shell's focus-taskbar
/// shortcut and then dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordKey {
    /// The left OS key (Win).
    LeftMeta,
    /// The letter T.
    T,
    /// Escape.
    Escape,
}

/// Synthesizes keyboard input.
pub trait InputSynth {
    /// Presses every key in order, then releases them in reverse order.
    fn key_chord(&self, keys: &[ChordKey]);
}

/// Low-priority deferred task execution.
///
/// The host guarantees the task runs strictly after the current layout pass
/// has settled, never synchronously inside the triggering event.
pub trait Scheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>);
}
