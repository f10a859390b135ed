use snapfix_core::WindowEvent;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_OBJECT_DESTROY, EVENT_OBJECT_LOCATIONCHANGE, EVENT_SYSTEM_MINIMIZEEND,
    EVENT_SYSTEM_MINIMIZESTART, EVENT_SYSTEM_MOVESIZEEND,
};

/// Object ID indicating the event applies to the window itself,
/// not a child element like a scrollbar or menu item.
const OBJID_WINDOW: i32 = 0;

/// Translates a raw Win32 event into a platform-agnostic `WindowEvent`.
///
/// Returns `None` for events the adjuster doesn't react to. Location
/// changes and move/size completions both map to `Moved`: the event
/// carries no geometry, it only means "recompute now".
pub fn translate(event: u32, hwnd: HWND, id_object: i32) -> Option<WindowEvent> {
    // Ignore events on child objects (scrollbars, buttons, etc.).
    if id_object != OBJID_WINDOW {
        return None;
    }

    let hwnd_val = hwnd.0 as usize;

    match event {
        e if e == EVENT_SYSTEM_MOVESIZEEND || e == EVENT_OBJECT_LOCATIONCHANGE => {
            Some(WindowEvent::Moved { hwnd: hwnd_val })
        }
        e if e == EVENT_SYSTEM_MINIMIZESTART || e == EVENT_SYSTEM_MINIMIZEEND => {
            Some(WindowEvent::StateChanged { hwnd: hwnd_val })
        }
        e if e == EVENT_OBJECT_DESTROY => Some(WindowEvent::Destroyed { hwnd: hwnd_val }),
        _ => None,
    }
}
