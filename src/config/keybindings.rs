//! Keybinding configuration types and parsing.
//!
//! Every control the sketching surface exposes (undo, redo, clear, tool
//! selection) is an [`Action`] that can be bound to one or more key chords.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // History
    Undo,
    Redo,
    ClearCanvas,
    CancelStroke,

    // Tool selection
    SelectPen,
    SelectThin,
    SelectThick,
    NextSticker,

    // Thickness controls
    IncreaseThickness,
    DecreaseThickness,
}

/// Errors raised while building the keybinding table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeybindingError {
    #[error("Empty keybinding string")]
    Empty,

    #[error("No key specified in '{0}'")]
    MissingKey(String),

    #[error("Duplicate keybinding '{binding}' assigned to both {first:?} and {second:?}")]
    Duplicate {
        binding: String,
        first: Action,
        second: Action,
    },
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Escape".
    ///
    /// Modifiers may appear in any order and spaces around '+' are allowed.
    /// The key name is stored lowercased so that lookups and duplicate
    /// detection are case-insensitive. A trailing "++" binds the '+' key.
    pub fn parse(s: &str) -> Result<Self, KeybindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeybindingError::Empty);
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(KeybindingError::MissingKey(s.to_string()));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the key is '+' itself
        let key = key_parts.join("+");
        if key.is_empty() {
            return Err(KeybindingError::MissingKey(s.to_string()));
        }
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key.to_lowercase()
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the given key and modifier state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// clear_canvas = ["E"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_cancel_stroke")]
    pub cancel_stroke: Vec<String>,

    #[serde(default = "default_select_pen")]
    pub select_pen: Vec<String>,

    #[serde(default = "default_select_thin")]
    pub select_thin: Vec<String>,

    #[serde(default = "default_select_thick")]
    pub select_thick: Vec<String>,

    #[serde(default = "default_next_sticker")]
    pub next_sticker: Vec<String>,

    #[serde(default = "default_increase_thickness")]
    pub increase_thickness: Vec<String>,

    #[serde(default = "default_decrease_thickness")]
    pub decrease_thickness: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            redo: default_redo(),
            clear_canvas: default_clear_canvas(),
            cancel_stroke: default_cancel_stroke(),
            select_pen: default_select_pen(),
            select_thin: default_select_thin(),
            select_thick: default_select_thick(),
            next_sticker: default_next_sticker(),
            increase_thickness: default_increase_thickness(),
            decrease_thickness: default_decrease_thickness(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    ///
    /// Fails if any keybinding string is invalid or if the same chord is bound
    /// twice (modifier order does not matter).
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, KeybindingError> {
        let groups: [(&[String], Action); 10] = [
            (&self.undo, Action::Undo),
            (&self.redo, Action::Redo),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.cancel_stroke, Action::CancelStroke),
            (&self.select_pen, Action::SelectPen),
            (&self.select_thin, Action::SelectThin),
            (&self.select_thick, Action::SelectThick),
            (&self.next_sticker, Action::NextSticker),
            (&self.increase_thickness, Action::IncreaseThickness),
            (&self.decrease_thickness, Action::DecreaseThickness),
        ];

        let mut map = HashMap::new();
        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action) {
                    return Err(KeybindingError::Duplicate {
                        binding: binding_str.clone(),
                        first: existing,
                        second: action,
                    });
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_cancel_stroke() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_select_pen() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_select_thin() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_select_thick() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_next_sticker() -> Vec<String> {
    vec!["S".to_string()]
}

fn default_increase_thickness() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_decrease_thickness() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}
