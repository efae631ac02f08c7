//! Generic input event types.

/// Generic key representation.
///
/// Hosts map their native key codes to these values so the router can look
/// them up in the keybinding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    Escape,
    Return,
    Backspace,
    Tab,
    Space,
    Shift,
    Ctrl,
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Resolves a key name as written in keybindings ("Escape", "z", "+").
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Char(c);
        }

        match name.to_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            _ => Key::Unknown,
        }
    }

    /// Name used for keybinding lookup, or `None` for modifiers and unknown keys.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Tab => Some("Tab".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary drawing button
    Left,
    /// Cancels the gesture in progress
    Right,
    /// Currently unused
    Middle,
}
