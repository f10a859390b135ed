//! Reactive padding adjustment for a borderless custom-chrome window.
//!
//! The host sizes a maximized borderless window against the full display
//! instead of the working area, and leaves the decorative border visible on
//! snapped edges. On every move/resize event the adjuster re-reads the
//! window's geometry, classifies its snap position, and pads the chrome
//! container so the window visually lands on the ideal snap rectangle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::SnapConfig;
use crate::platform::Scheduler;
use crate::snap::{self, SnapSide};
use crate::window::ChromeWindow;
use crate::{ProbeResult, Thickness, log_debug, log_warn, padding};

/// Coalescing state for one window's scheduled adjustments.
///
/// Every trigger bumps the generation; a deferred run whose token no longer
/// matches was superseded by a newer trigger and drops out. Only the most
/// recent settled geometry is ever applied, and there is no guard flag to
/// clear on early exit.
struct AdjustmentSession {
    generation: AtomicU64,
}

type SnapListener = Box<dyn Fn(SnapSide) + Send + Sync>;

/// Per-window padding controller.
///
/// Construct one per managed window and drop it with the window. The
/// controller owns its own session state and subscriber list; nothing is
/// shared across windows.
pub struct PaddingAdjuster<W, S> {
    inner: Arc<Inner<W>>,
    scheduler: S,
}

struct Inner<W> {
    window: W,
    config: SnapConfig,
    session: AdjustmentSession,
    listeners: Mutex<Vec<SnapListener>>,
}

impl<W, S> PaddingAdjuster<W, S>
where
    W: ChromeWindow + Send + Sync + 'static,
    S: Scheduler,
{
    pub fn new(window: W, config: SnapConfig, scheduler: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                window,
                config,
                session: AdjustmentSession {
                    generation: AtomicU64::new(0),
                },
                listeners: Mutex::new(Vec::new()),
            }),
            scheduler,
        }
    }

    /// Registers a listener for snap transitions.
    ///
    /// Called with the new [`SnapSide`] after an adjustment lands on a
    /// snapped position. Never called for `SnapSide::None`.
    pub fn subscribe(&self, listener: impl Fn(SnapSide) + Send + Sync + 'static) {
        if let Ok(mut listeners) = self.inner.listeners.lock() {
            listeners.push(Box::new(listener));
        }
    }

    /// Handles a move/resize/state-change notification from the host.
    ///
    /// Schedules the adjustment to run after the settle delay, once the
    /// host's layout pass has finished; geometry read synchronously inside
    /// the event can be stale. Rapid event bursts coalesce: each call
    /// supersedes any still-pending adjustment.
    pub fn on_window_moved_or_resized(&self) {
        if !self.inner.window.is_chrome_styled() {
            return;
        }
        let token = self.inner.session.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);
        self.scheduler.defer(
            Duration::from_millis(self.inner.config.settle_ms),
            Box::new(move || inner.run(token)),
        );
    }
}

impl<W: ChromeWindow> Inner<W> {
    fn run(&self, token: u64) {
        if self.session.generation.load(Ordering::SeqCst) != token {
            // Superseded; a newer trigger owns the adjustment now.
            return;
        }
        match self.adjust() {
            Ok(SnapSide::None) => {}
            Ok(side) => self.notify(side),
            Err(e) => {
                // Soft failure: stay on the current padding and wait for
                // the next geometry event.
                log_warn!("adjustment skipped: {e}");
            }
        }
    }

    fn adjust(&self) -> ProbeResult<SnapSide> {
        let outer = self.window.outer_rect()?;
        let area = self.window.screen_area()?;
        let side = snap::classify(&outer, &area, &self.config.tolerances);

        let padding = match side {
            SnapSide::None => Thickness::DEFAULT_BORDER,
            _ => {
                let target = snap::build_target_rect(side, &area, &outer);
                padding::derive(&outer, &target, side, &Thickness::DEFAULT_BORDER)
            }
        };

        // Skip the write when nothing changed; every padding assignment
        // costs the host a full layout pass.
        if padding != self.window.padding() {
            self.window.set_padding(padding);
        }

        log_debug!(
            "adjusted to {side}: outer({},{} {}x{}) on {}",
            outer.left,
            outer.top,
            outer.width(),
            outer.height(),
            area.name
        );
        Ok(side)
    }

    fn notify(&self, side: SnapSide) {
        let Ok(listeners) = self.listeners.lock() else {
            return;
        };
        for listener in listeners.iter() {
            listener(side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProbeError, Rect, ScreenArea};
    use std::sync::atomic::AtomicUsize;

    /// In-memory window: geometry and padding behind mutexes, with a
    /// counter for padding writes.
    struct FakeWindow {
        rect: Mutex<Rect>,
        padding: Mutex<Thickness>,
        chrome_styled: bool,
        fail_geometry: bool,
        writes: AtomicUsize,
    }

    impl FakeWindow {
        fn new(rect: Rect) -> Arc<Self> {
            Arc::new(Self {
                rect: Mutex::new(rect),
                padding: Mutex::new(Thickness::DEFAULT_BORDER),
                chrome_styled: true,
                fail_geometry: false,
                writes: AtomicUsize::new(0),
            })
        }

        fn move_to(&self, rect: Rect) {
            *self.rect.lock().unwrap() = rect;
        }
    }

    impl ChromeWindow for Arc<FakeWindow> {
        fn outer_rect(&self) -> ProbeResult<Rect> {
            if self.fail_geometry {
                return Err(ProbeError::Window("display lost".into()));
            }
            Ok(*self.rect.lock().unwrap())
        }

        fn screen_area(&self) -> ProbeResult<ScreenArea> {
            Ok(ScreenArea {
                name: r"\\.\DISPLAY1".into(),
                bounds: Rect::new(0.0, 0.0, 1920.0, 1120.0),
                work_area: Rect::new(0.0, 0.0, 1920.0, 1080.0),
            })
        }

        fn is_chrome_styled(&self) -> bool {
            self.chrome_styled
        }

        fn padding(&self) -> Thickness {
            *self.padding.lock().unwrap()
        }

        fn set_padding(&self, padding: Thickness) {
            *self.padding.lock().unwrap() = padding;
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Scheduler that queues tasks until the test drains them, standing in
    /// for the host's deferred execution.
    #[derive(Clone, Default)]
    struct QueueScheduler {
        tasks: Arc<Mutex<Vec<Box<dyn FnOnce() + Send>>>>,
    }

    impl QueueScheduler {
        fn run_all(&self) {
            let drained: Vec<_> = self.tasks.lock().unwrap().drain(..).collect();
            for task in drained {
                task();
            }
        }

        fn pending(&self) -> usize {
            self.tasks.lock().unwrap().len()
        }
    }

    impl Scheduler for QueueScheduler {
        fn defer(&self, _delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
            self.tasks.lock().unwrap().push(task);
        }
    }

    fn adjuster(
        window: Arc<FakeWindow>,
    ) -> (PaddingAdjuster<Arc<FakeWindow>, QueueScheduler>, QueueScheduler) {
        let scheduler = QueueScheduler::default();
        let adjuster = PaddingAdjuster::new(window, SnapConfig::default(), scheduler.clone());
        (adjuster, scheduler)
    }

    #[test]
    fn maximized_window_is_inset_to_work_area() {
        let window = FakeWindow::new(Rect::new(-8.0, -8.0, 1928.0, 1088.0));
        let (adjuster, scheduler) = adjuster(Arc::clone(&window));

        adjuster.on_window_moved_or_resized();
        scheduler.run_all();

        assert_eq!(window.padding(), Thickness::uniform(8.0));
    }

    #[test]
    fn unsnapped_window_gets_default_border() {
        let window = FakeWindow::new(Rect::new(200.0, 150.0, 900.0, 700.0));
        *window.padding.lock().unwrap() = Thickness::uniform(0.0);
        let (adjuster, scheduler) = adjuster(Arc::clone(&window));

        adjuster.on_window_moved_or_resized();
        scheduler.run_all();

        assert_eq!(window.padding(), Thickness::DEFAULT_BORDER);
    }

    #[test]
    fn normally_framed_window_is_ignored() {
        let mut inner = FakeWindow::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
        Arc::get_mut(&mut inner).unwrap().chrome_styled = false;
        let (adjuster, scheduler) = adjuster(inner);

        adjuster.on_window_moved_or_resized();

        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn burst_of_triggers_applies_latest_geometry_once() {
        // Window starts half-snapped, then the user keeps dragging to
        // maximized before the first adjustment has run.
        let window = FakeWindow::new(Rect::new(0.0, 0.0, 960.0, 1080.0));
        let (adjuster, scheduler) = adjuster(Arc::clone(&window));

        adjuster.on_window_moved_or_resized();
        window.move_to(Rect::new(-8.0, -8.0, 1928.0, 1088.0));
        adjuster.on_window_moved_or_resized();
        scheduler.run_all();

        assert_eq!(window.writes.load(Ordering::SeqCst), 1);
        assert_eq!(window.padding(), Thickness::uniform(8.0));
    }

    #[test]
    fn unchanged_padding_is_not_rewritten() {
        let window = FakeWindow::new(Rect::new(-8.0, -8.0, 1928.0, 1088.0));
        let (adjuster, scheduler) = adjuster(Arc::clone(&window));

        adjuster.on_window_moved_or_resized();
        scheduler.run_all();
        adjuster.on_window_moved_or_resized();
        scheduler.run_all();

        assert_eq!(window.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn snap_transition_notifies_subscribers() {
        let window = FakeWindow::new(Rect::new(0.0, 0.0, 958.0, 1080.0));
        let (adjuster, scheduler) = adjuster(window);
        let seen: Arc<Mutex<Vec<SnapSide>>> = Arc::default();
        let sink = Arc::clone(&seen);
        adjuster.subscribe(move |side| sink.lock().unwrap().push(side));

        adjuster.on_window_moved_or_resized();
        scheduler.run_all();

        assert_eq!(*seen.lock().unwrap(), vec![SnapSide::LeftHalf]);
    }

    #[test]
    fn unsnapped_position_does_not_notify() {
        let window = FakeWindow::new(Rect::new(200.0, 150.0, 900.0, 700.0));
        let (adjuster, scheduler) = adjuster(window);
        let seen: Arc<Mutex<Vec<SnapSide>>> = Arc::default();
        let sink = Arc::clone(&seen);
        adjuster.subscribe(move |side| sink.lock().unwrap().push(side));

        adjuster.on_window_moved_or_resized();
        scheduler.run_all();

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn geometry_failure_is_soft() {
        let mut inner = FakeWindow::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
        Arc::get_mut(&mut inner).unwrap().fail_geometry = true;
        let window = inner;
        let (adjuster, scheduler) = adjuster(Arc::clone(&window));

        adjuster.on_window_moved_or_resized();
        scheduler.run_all();

        // No padding write, no panic; the next event will retry.
        assert_eq!(window.writes.load(Ordering::SeqCst), 0);
    }
}
