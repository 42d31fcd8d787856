use log::warn;

use crate::io::Input;

/// # Keypad
/// Tracks which of the 16 hexadecimal keys are held down.
///
/// Hosts press and release keys as their input events arrive; the interpreter
/// reads it through `Input`.
#[derive(Debug, Default, Clone)]
pub struct Keypad {
    pressed: [bool; 16],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as held. Codes above 0xF are ignored.
    pub fn press(&mut self, key: u8) {
        self.set(key, true);
    }

    /// Mark `key` as released. Codes above 0xF are ignored.
    pub fn release(&mut self, key: u8) {
        self.set(key, false);
    }

    fn set(&mut self, key: u8, down: bool) {
        match self.pressed.get_mut(key as usize) {
            Some(state) => *state = down,
            None => warn!("ignoring key {:#04X}, the keypad only has keys 0x0-0xF", key),
        }
    }
}

impl Input for Keypad {
    fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }
}
