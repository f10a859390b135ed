//! WinEvent hook thread.
//!
//! Registers a system-wide window event hook and forwards translated
//! move/resize/state events over a channel. The adjuster pipeline and the
//! `watch` diagnostic both consume this feed.

use std::sync::mpsc::Sender;
use std::thread;

use snapfix_core::{ProbeError, ProbeResult, WindowEvent};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, PostThreadMessageW, TranslateMessage, WM_QUIT,
    WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS,
};

use crate::event;

/// Minimum event code we listen for (EVENT_SYSTEM_MOVESIZEEND = 0x000B).
const EVENT_MIN: u32 = 0x000B;

/// Maximum event code we listen for (EVENT_OBJECT_LOCATIONCHANGE = 0x800B).
const EVENT_MAX: u32 = 0x800B;

// Thread-local sender for the WinEvent callback.
thread_local! {
    static EVENT_SENDER: std::cell::RefCell<Option<Sender<WindowEvent>>> =
        const { std::cell::RefCell::new(None) };
}

/// Starts the Win32 event hook on a new thread.
///
/// Translated events are sent through `event_tx` until the returned
/// [`EventLoopHandle`] is stopped.
pub fn start(event_tx: Sender<WindowEvent>) -> ProbeResult<EventLoopHandle> {
    let (ready_tx, ready_rx) = std::sync::mpsc::channel::<Result<u32, String>>();

    let handle = thread::spawn(move || {
        EVENT_SENDER.with(|cell| {
            *cell.borrow_mut() = Some(event_tx);
        });

        let thread_id = unsafe { windows::Win32::System::Threading::GetCurrentThreadId() };

        // SAFETY: SetWinEventHook registers our callback for system-wide
        // window events. WINEVENT_OUTOFCONTEXT means the callback runs in
        // our process. WINEVENT_SKIPOWNPROCESS ignores our own windows.
        let hook = unsafe {
            SetWinEventHook(
                EVENT_MIN,
                EVENT_MAX,
                None,
                Some(win_event_proc),
                0,
                0,
                WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
            )
        };

        if hook.is_invalid() {
            let _ = ready_tx.send(Err("failed to set WinEvent hook".to_string()));
            return;
        }

        let _ = ready_tx.send(Ok(thread_id));

        run_message_pump();

        unsafe {
            let _ = UnhookWinEvent(hook);
        }
    });

    let thread_id: u32 = ready_rx
        .recv()
        .map_err(|_| ProbeError::Window("event hook thread exited unexpectedly".into()))?
        .map_err(ProbeError::Window)?;

    Ok(EventLoopHandle { thread_id, handle })
}

/// Handle for stopping the event hook thread.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
}

impl EventLoopHandle {
    /// Signals the hook thread to stop and waits for it to finish.
    pub fn stop(self) {
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// The Win32 message pump. WinEvent callbacks fire from inside
/// `GetMessageW`; the pump blocks until WM_QUIT arrives.
fn run_message_pump() {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// The WinEvent callback.
unsafe extern "system" fn win_event_proc(
    _hook: HWINEVENTHOOK,
    event: u32,
    hwnd: windows::Win32::Foundation::HWND,
    id_object: i32,
    _id_child: i32,
    _event_thread: u32,
    _event_time: u32,
) {
    if let Some(window_event) = event::translate(event, hwnd, id_object) {
        EVENT_SENDER.with(|cell| {
            if let Some(sender) = cell.borrow().as_ref() {
                let _ = sender.send(window_event);
            }
        });
    }
}
