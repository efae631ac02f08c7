//! Input script replay.
//!
//! A script is a plain-text list of host events, one per line, that the
//! command-line host feeds through [`InputState`] in order:
//!
//! ```text
//! # comments and blank lines are ignored
//! thick
//! down 10 10
//! move 40 40
//! up
//! sticker 0
//! down 60 60
//! up
//! key Ctrl+Z
//! ```

use crate::config::{Action, KeyBinding, KeybindingError};
use crate::input::{InputState, Key, MouseButton};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One host event.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    /// Release; without coordinates the last known pointer position is used,
    /// or the release happens off the canvas if the pointer has left
    Up { at: Option<(f64, f64)> },
    Leave,
    /// Right-button press
    Cancel,
    Undo,
    Redo,
    Clear,
    Thin,
    Thick,
    Pen,
    Thickness(f64),
    Sticker(usize),
    Key(KeyBinding),
}

/// Errors raised while loading or parsing a script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    BadArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: {source}")]
    BadKey {
        line: usize,
        #[source]
        source: KeybindingError,
    },
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ReplayError> {
    let source = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&source)
}

/// Parses script text into events.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ReplayError> {
    let mut events = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let mut tokens = content.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        let bad = |expected: &'static str| ReplayError::BadArguments {
            line,
            command: command.to_string(),
            expected,
        };
        let bare = |event: ScriptEvent| {
            if args.is_empty() {
                Ok(event)
            } else {
                Err(bad("no arguments"))
            }
        };

        let event = match command.to_lowercase().as_str() {
            "down" => {
                let (x, y) = parse_xy(&args).ok_or_else(|| bad("two coordinates"))?;
                ScriptEvent::Down { x, y }
            }
            "move" => {
                let (x, y) = parse_xy(&args).ok_or_else(|| bad("two coordinates"))?;
                ScriptEvent::Move { x, y }
            }
            "up" => {
                if args.is_empty() {
                    ScriptEvent::Up { at: None }
                } else {
                    let at = parse_xy(&args)
                        .ok_or_else(|| bad("no arguments or two coordinates"))?;
                    ScriptEvent::Up { at: Some(at) }
                }
            }
            "leave" => bare(ScriptEvent::Leave)?,
            "cancel" => bare(ScriptEvent::Cancel)?,
            "undo" => bare(ScriptEvent::Undo)?,
            "redo" => bare(ScriptEvent::Redo)?,
            "clear" => bare(ScriptEvent::Clear)?,
            "thin" => bare(ScriptEvent::Thin)?,
            "thick" => bare(ScriptEvent::Thick)?,
            "pen" => bare(ScriptEvent::Pen)?,
            "thickness" => match args.as_slice() {
                [value] => value
                    .parse::<f64>()
                    .ok()
                    .filter(|t| t.is_finite())
                    .map(ScriptEvent::Thickness)
                    .ok_or_else(|| bad("a number"))?,
                _ => return Err(bad("a number")),
            },
            "sticker" => match args.as_slice() {
                [value] => value
                    .parse::<usize>()
                    .map(ScriptEvent::Sticker)
                    .map_err(|_| bad("a palette index"))?,
                _ => return Err(bad("a palette index")),
            },
            "key" => {
                if args.is_empty() {
                    return Err(bad("a key chord"));
                }
                let binding = KeyBinding::parse(&args.join(" "))
                    .map_err(|source| ReplayError::BadKey { line, source })?;
                ScriptEvent::Key(binding)
            }
            _ => {
                return Err(ReplayError::UnknownCommand {
                    line,
                    command: command.to_string(),
                });
            }
        };

        events.push(event);
    }

    Ok(events)
}

fn parse_xy(args: &[&str]) -> Option<(f64, f64)> {
    match args {
        [x, y] => {
            let x = x.parse::<f64>().ok().filter(|v| v.is_finite())?;
            let y = y.parse::<f64>().ok().filter(|v| v.is_finite())?;
            Some((x, y))
        }
        _ => None,
    }
}

/// Feeds one event through the input router.
pub fn apply_event(state: &mut InputState, event: &ScriptEvent) {
    match event {
        ScriptEvent::Down { x, y } => state.on_mouse_press(MouseButton::Left, *x, *y),
        ScriptEvent::Move { x, y } => state.on_mouse_motion(*x, *y),
        ScriptEvent::Up { at } => match at.or_else(|| state.pointer().map(|p| (p.x, p.y))) {
            Some((x, y)) => state.on_mouse_release(MouseButton::Left, x, y),
            None => state.on_mouse_release_outside(MouseButton::Left),
        },
        ScriptEvent::Leave => state.on_mouse_leave(),
        ScriptEvent::Cancel => match state.pointer() {
            Some(at) => state.on_mouse_press(MouseButton::Right, at.x, at.y),
            None => state.handle_action(Action::CancelStroke),
        },
        ScriptEvent::Undo => state.handle_action(Action::Undo),
        ScriptEvent::Redo => state.handle_action(Action::Redo),
        ScriptEvent::Clear => state.handle_action(Action::ClearCanvas),
        ScriptEvent::Thin => state.handle_action(Action::SelectThin),
        ScriptEvent::Thick => state.handle_action(Action::SelectThick),
        ScriptEvent::Pen => state.handle_action(Action::SelectPen),
        ScriptEvent::Thickness(value) => state.select_pen(*value),
        ScriptEvent::Sticker(index) => {
            state.select_sticker(*index);
        }
        ScriptEvent::Key(binding) => press_binding(state, binding),
    }
}

fn press_binding(state: &mut InputState, binding: &KeyBinding) {
    let key = Key::from_name(&binding.key);
    if key == Key::Unknown {
        warn!("Unrecognized key '{}' in script", binding.key);
        return;
    }

    let held: Vec<Key> = [
        (binding.ctrl, Key::Ctrl),
        (binding.shift, Key::Shift),
        (binding.alt, Key::Alt),
    ]
    .into_iter()
    .filter_map(|(on, key)| on.then_some(key))
    .collect();

    for modifier in &held {
        state.on_key_press(*modifier);
    }
    state.on_key_press(key);
    state.on_key_release(key);
    for modifier in held.iter().rev() {
        state.on_key_release(*modifier);
    }
}

/// Replays every event in order.
pub fn replay(state: &mut InputState, events: &[ScriptEvent]) {
    for event in events {
        apply_event(state, event);
    }
    debug!(
        "Replayed {} events ({} committed, {} undone)",
        events.len(),
        state.history().done().len(),
        state.history().undone().len()
    );
}
