//! Keyboard modifier state tracking.

use super::events::Key;

/// Keyboard modifier state.
///
/// Tracks which modifier keys are currently held so key chords can be matched
/// against the keybinding table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the state for a modifier key. Returns `false` for other keys.
    pub fn set(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::Shift => self.shift = pressed,
            Key::Ctrl => self.ctrl = pressed,
            Key::Alt => self.alt = pressed,
            _ => return false,
        }
        true
    }
}
