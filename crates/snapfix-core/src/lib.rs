pub mod adjuster;
pub mod config;
pub mod error;
pub mod event;
pub mod log;
pub mod padding;
pub mod platform;
pub mod rect;
pub mod reveal;
pub mod screen;
pub mod snap;
pub mod thickness;
pub mod window;

pub use adjuster::PaddingAdjuster;
pub use error::{ProbeError, ProbeResult};
pub use event::WindowEvent;
pub use platform::{ChordKey, InputSynth, Scheduler, ShellProbe};
pub use rect::{Point, Rect};
pub use reveal::TaskbarRevealer;
pub use screen::{Edge, ScreenArea, TaskbarInfo};
pub use snap::{SnapSide, SnapTolerances};
pub use thickness::Thickness;
pub use window::ChromeWindow;
