use clap::Args;

use snapfix_core::config::Config;

/// Arguments for the `watch` subcommand.
#[derive(Args)]
pub struct WatchArgs {
    /// Window handle (decimal or hex with 0x prefix); defaults to the
    /// foreground window
    #[arg(long)]
    pub hwnd: Option<String>,
}

/// Runs the full adjustment pipeline against a live window, printing the
/// snap classification and derived padding instead of mutating any chrome.
///
/// Calibration aid: drag the window around, watch which class each position
/// lands in, and tune the tolerances in `config.toml` until they match the
/// host's snap geometry. The pointer is also polled for taskbar proximity,
/// so auto-hide reveal can be verified in the same session.
#[cfg(windows)]
pub fn execute(args: &WatchArgs, config: &Config) {
    use std::sync::{Mutex, mpsc};
    use std::time::Duration;

    use snapfix_core::{
        ChromeWindow, PaddingAdjuster, ProbeResult, Rect, ScreenArea, TaskbarRevealer, Thickness,
        WindowEvent,
    };
    use snapfix_windows::{
        DelayedExecutor, KeySender, Taskbar, Window, ctrl_c, cursor, dpi, event_loop,
    };

    dpi::enable_dpi_awareness();

    let target = match &args.hwnd {
        Some(s) => Window::from_raw(super::parse_hwnd(s)),
        None => match Window::foreground() {
            Some(w) => w,
            None => {
                eprintln!("Error: no foreground window.");
                std::process::exit(1);
            }
        },
    };
    let handle = target.raw();
    println!(
        "Watching 0x{handle:X} \"{}\" (press Ctrl+C to stop)...\n",
        target.title()
    );

    /// Real geometry, in-memory chrome padding: watch observes windows it
    /// does not own, so padding writes go to the console instead of a
    /// chrome container.
    struct Observed {
        handle: usize,
        padding: Mutex<Thickness>,
    }

    impl ChromeWindow for Observed {
        fn outer_rect(&self) -> ProbeResult<Rect> {
            Window::from_raw(self.handle).outer_rect()
        }

        fn screen_area(&self) -> ProbeResult<ScreenArea> {
            Window::from_raw(self.handle).screen_area()
        }

        fn is_chrome_styled(&self) -> bool {
            // Observe any window, chrome or not.
            true
        }

        fn padding(&self) -> Thickness {
            *self.padding.lock().unwrap()
        }

        fn set_padding(&self, padding: Thickness) {
            *self.padding.lock().unwrap() = padding;
            println!(
                "padding -> L:{} T:{} R:{} B:{}",
                padding.left, padding.top, padding.right, padding.bottom
            );
        }
    }

    let (executor, executor_handle) = DelayedExecutor::spawn();
    let adjuster = PaddingAdjuster::new(
        Observed {
            handle,
            padding: Mutex::new(Thickness::DEFAULT_BORDER),
        },
        config.snap.clone(),
        executor,
    );
    adjuster.subscribe(|side| println!("snap -> {side}"));

    let revealer = TaskbarRevealer::new(Taskbar, KeySender, config.reveal.clone());

    let (event_tx, event_rx) = mpsc::channel();
    let hook = match event_loop::start(event_tx) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start event hook: {e}");
            return;
        }
    };

    // Set up Ctrl+C handler to stop the loop cleanly.
    let (stop_tx, stop_rx) = mpsc::channel();
    ctrl_c::set_handler(stop_tx);

    loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }

        match event_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) if event.hwnd() == handle => match event {
                WindowEvent::Moved { .. } | WindowEvent::StateChanged { .. } => {
                    adjuster.on_window_moved_or_resized();
                }
                WindowEvent::Destroyed { .. } => {
                    println!("Window destroyed.");
                    break;
                }
            },
            Ok(_) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // Idle: poll the pointer for taskbar proximity.
                if let (Ok(point), Ok(area)) =
                    (cursor::position(), Window::from_raw(handle).screen_area())
                {
                    revealer.on_pointer_move(&area, point);
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    hook.stop();
    drop(adjuster);
    executor_handle.join();
}

#[cfg(not(windows))]
pub fn execute(_args: &WatchArgs, _config: &Config) {
    eprintln!("Watching live windows requires Windows.");
}
