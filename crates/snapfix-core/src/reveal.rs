//! Auto-hidden taskbar reveal.
//!
//! A borderless window that covers the whole working area also swallows the
//! pointer motion the shell normally uses to un-hide its taskbar. When the
//! pointer reaches the window's outer edge on the taskbar's side, the shell
//! has to be prodded through its keyboard shortcut instead: there is no
//! direct "show taskbar" call, only the input side channel.

use std::thread;
use std::time::Duration;

use crate::config::RevealConfig;
use crate::platform::{ChordKey, InputSynth, ShellProbe};
use crate::screen::{Edge, ScreenArea};
use crate::{Point, log_debug};

/// Decides when to synthesize the reveal sequence.
///
/// Stateless between calls: the taskbar is re-queried on every pointer
/// check because its edge and auto-hide setting can change at any time.
pub struct TaskbarRevealer<P, I> {
    probe: P,
    input: I,
    config: RevealConfig,
}

impl<P: ShellProbe, I: InputSynth> TaskbarRevealer<P, I> {
    pub fn new(probe: P, input: I, config: RevealConfig) -> Self {
        Self {
            probe,
            input,
            config,
        }
    }

    /// Handles pointer movement near the window's outer edge.
    ///
    /// `area` is the hosting monitor of the window under the pointer;
    /// `point` is the pointer position in screen coordinates. Fires the
    /// reveal sequence only when the taskbar auto-hides, shares the
    /// window's monitor, and the pointer is within the configured distance
    /// of its docked edge. A missing taskbar means no reveal is possible
    /// and is not an error.
    pub fn on_pointer_move(&self, area: &ScreenArea, point: Point) {
        let Ok(taskbar) = self.probe.taskbar() else {
            return;
        };
        if !taskbar.auto_hide || taskbar.screen_name != area.name {
            return;
        }

        let bounds = &area.bounds;
        let distance = match taskbar.edge {
            Edge::Left => (point.x - bounds.left).abs(),
            Edge::Top => (point.y - bounds.top).abs(),
            Edge::Right => (point.x - bounds.right).abs(),
            Edge::Bottom => (point.y - bounds.bottom).abs(),
        };
        if distance > self.config.proximity {
            return;
        }

        log_debug!("revealing {} taskbar on {}", taskbar.edge, taskbar.screen_name);
        self.reveal();
    }

    /// Summons the taskbar, waits for the shell to animate it in, then
    /// dismisses the focus the shortcut gave it.
    ///
    /// The pause blocks only the caller, which already runs outside the
    /// window's primary event processing.
    pub fn reveal(&self) {
        self.input.key_chord(&[ChordKey::LeftMeta, ChordKey::T]);
        thread::sleep(Duration::from_millis(self.config.pause_ms));
        self.input.key_chord(&[ChordKey::Escape]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProbeError, ProbeResult, Rect, TaskbarInfo};
    use std::sync::{Arc, Mutex};

    struct FakeProbe {
        result: ProbeResult<TaskbarInfo>,
    }

    impl ShellProbe for FakeProbe {
        fn taskbar(&self) -> ProbeResult<TaskbarInfo> {
            match &self.result {
                Ok(info) => Ok(info.clone()),
                Err(ProbeError::TaskbarNotFound) => Err(ProbeError::TaskbarNotFound),
                Err(e) => Err(ProbeError::Monitor(e.to_string())),
            }
        }
    }

    #[derive(Clone, Default)]
    struct ChordRecorder {
        chords: Arc<Mutex<Vec<Vec<ChordKey>>>>,
    }

    impl InputSynth for ChordRecorder {
        fn key_chord(&self, keys: &[ChordKey]) {
            self.chords.lock().unwrap().push(keys.to_vec());
        }
    }

    fn primary() -> ScreenArea {
        ScreenArea {
            name: r"\\.\DISPLAY1".into(),
            bounds: Rect::new(0.0, 0.0, 1920.0, 1080.0),
            work_area: Rect::new(0.0, 0.0, 1920.0, 1040.0),
        }
    }

    fn bottom_taskbar(auto_hide: bool) -> TaskbarInfo {
        TaskbarInfo {
            bounds: Rect::new(0.0, 1040.0, 1920.0, 1080.0),
            edge: Edge::Bottom,
            auto_hide,
            screen_name: r"\\.\DISPLAY1".into(),
        }
    }

    fn revealer(
        taskbar: ProbeResult<TaskbarInfo>,
    ) -> (TaskbarRevealer<FakeProbe, ChordRecorder>, ChordRecorder) {
        let recorder = ChordRecorder::default();
        let config = RevealConfig {
            pause_ms: 0, // keep tests fast
            ..Default::default()
        };
        let revealer = TaskbarRevealer::new(FakeProbe { result: taskbar }, recorder.clone(), config);
        (revealer, recorder)
    }

    #[test]
    fn fires_summon_then_dismiss_at_bottom_edge() {
        let (revealer, recorder) = revealer(Ok(bottom_taskbar(true)));

        revealer.on_pointer_move(&primary(), Point::new(500.0, 1079.0));

        let chords = recorder.chords.lock().unwrap();
        assert_eq!(
            *chords,
            vec![
                vec![ChordKey::LeftMeta, ChordKey::T],
                vec![ChordKey::Escape]
            ]
        );
    }

    #[test]
    fn ignores_pointer_away_from_edge() {
        let (revealer, recorder) = revealer(Ok(bottom_taskbar(true)));

        revealer.on_pointer_move(&primary(), Point::new(500.0, 1077.0));

        assert!(recorder.chords.lock().unwrap().is_empty());
    }

    #[test]
    fn never_fires_when_taskbar_is_pinned() {
        let (revealer, recorder) = revealer(Ok(bottom_taskbar(false)));

        revealer.on_pointer_move(&primary(), Point::new(500.0, 1080.0));

        assert!(recorder.chords.lock().unwrap().is_empty());
    }

    #[test]
    fn ignores_taskbar_on_another_monitor() {
        let mut taskbar = bottom_taskbar(true);
        taskbar.screen_name = r"\\.\DISPLAY2".into();
        let (revealer, recorder) = revealer(Ok(taskbar));

        revealer.on_pointer_move(&primary(), Point::new(500.0, 1080.0));

        assert!(recorder.chords.lock().unwrap().is_empty());
    }

    #[test]
    fn edge_must_match_pointer_side() {
        let mut taskbar = bottom_taskbar(true);
        taskbar.edge = Edge::Left;
        taskbar.bounds = Rect::new(0.0, 0.0, 40.0, 1080.0);
        let (revealer, recorder) = revealer(Ok(taskbar));

        // Bottom edge pointer, left-docked taskbar: no reveal.
        revealer.on_pointer_move(&primary(), Point::new(500.0, 1080.0));
        assert!(recorder.chords.lock().unwrap().is_empty());

        // Left edge pointer does fire.
        revealer.on_pointer_move(&primary(), Point::new(1.0, 500.0));
        assert_eq!(recorder.chords.lock().unwrap().len(), 2);
    }

    #[test]
    fn missing_taskbar_is_silent() {
        let (revealer, recorder) = revealer(Err(ProbeError::TaskbarNotFound));

        revealer.on_pointer_move(&primary(), Point::new(500.0, 1080.0));

        assert!(recorder.chords.lock().unwrap().is_empty());
    }
}
