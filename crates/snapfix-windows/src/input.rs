//! Synthesized keyboard input via `SendInput`.

use std::mem;

use snapfix_core::{ChordKey, InputSynth};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_KEYUP, SendInput,
    VIRTUAL_KEY, VK_ESCAPE, VK_LWIN,
};

/// Win32 implementation of [`InputSynth`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySender;

/// Maps a chord key to its Windows virtual-key code.
fn virtual_key(key: ChordKey) -> VIRTUAL_KEY {
    match key {
        ChordKey::LeftMeta => VK_LWIN,
        ChordKey::T => VIRTUAL_KEY(u16::from(b'T')),
        ChordKey::Escape => VK_ESCAPE,
    }
}

fn key_event(vk: VIRTUAL_KEY, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

impl InputSynth for KeySender {
    /// Presses every key in order, then releases them in reverse order, in
    /// one `SendInput` batch so no real keystroke can interleave.
    fn key_chord(&self, keys: &[ChordKey]) {
        let mut inputs: Vec<INPUT> = Vec::with_capacity(keys.len() * 2);
        for key in keys {
            inputs.push(key_event(virtual_key(*key), KEYBD_EVENT_FLAGS(0)));
        }
        for key in keys.iter().rev() {
            inputs.push(key_event(virtual_key(*key), KEYEVENTF_KEYUP));
        }

        // SAFETY: SendInput reads the slice and injects the events into the
        // system input queue.
        unsafe {
            SendInput(&inputs, mem::size_of::<INPUT>() as i32);
        }
    }
}
