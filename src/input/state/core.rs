//! Input router state: history ownership, tool selection, and preview.

use crate::config::{Action, Config, KeyBinding, KeybindingError};
use crate::draw::{DrawStyle, History, Point, Preview, RenderSettings, Surface, redraw};
use crate::input::{modifiers::Modifiers, tool::Tool};
use log::{debug, warn};
use std::collections::HashMap;

/// Smallest and largest pen thickness reachable through adjustments.
pub const MIN_THICKNESS: f64 = 1.0;
pub const MAX_THICKNESS: f64 = 20.0;

/// Main input state containing all drawing session state.
///
/// Owns the [`History`] exclusively: every mutation flows through the event
/// handlers here, one event at a time. The host feeds pointer, key, and
/// control events in arrival order and calls [`InputState::render`] whenever
/// [`InputState::needs_redraw`] is set.
pub struct InputState {
    /// Committed, undone, and in-progress drawables
    history: History,
    /// Hover indicator, only present while idle and the pointer is over the canvas
    preview: Option<Preview>,
    /// Last known pointer position over the canvas
    pointer: Option<Point>,
    /// Currently selected tool
    pub tool: Tool,
    /// Current pen thickness in pixels
    pub current_thickness: f64,
    /// Thickness of the thin preset
    pub thin_thickness: f64,
    /// Thickness of the thick preset
    pub thick_thickness: f64,
    /// Amount added/removed by thickness adjustments
    pub thickness_step: f64,
    /// Sticker palette (never empty)
    stickers: Vec<String>,
    /// Index into `stickers` of the selected glyph
    sticker_index: usize,
    /// Font size given to new stickers
    pub sticker_size: f64,
    /// Whether the hover preview is shown at all
    pub preview_enabled: bool,
    /// Frame-wide rendering parameters
    pub render_settings: RenderSettings,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Keybinding action map for lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates an input state from validated configuration.
    ///
    /// # Errors
    /// Fails if the configured keybindings are invalid or collide.
    pub fn from_config(config: &Config) -> Result<Self, KeybindingError> {
        let action_map = config.keybindings.build_action_map()?;
        let stickers = if config.drawing.stickers.is_empty() {
            Config::default().drawing.stickers
        } else {
            config.drawing.stickers.clone()
        };

        Ok(Self {
            history: History::with_limit(config.history.max_strokes),
            preview: None,
            pointer: None,
            tool: Tool::Pen,
            current_thickness: clamp_thickness(config.drawing.default_thickness),
            thin_thickness: config.drawing.thin_thickness,
            thick_thickness: config.drawing.thick_thickness,
            thickness_step: config.drawing.thickness_step,
            stickers,
            sticker_index: 0,
            sticker_size: config.drawing.sticker_size,
            preview_enabled: config.preview.enabled,
            render_settings: config.render_settings(),
            modifiers: Modifiers::new(),
            needs_redraw: true,
            action_map,
        })
    }

    /// The drawing history (read-only; mutate through events and actions).
    pub fn history(&self) -> &History {
        &self.history
    }

    pub(super) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Current hover preview, if any.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Last known pointer position, `None` after the pointer left the canvas.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub(super) fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Sticker palette in selection order.
    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    /// Glyph the sticker tool currently places.
    pub fn current_sticker(&self) -> &str {
        &self.stickers[self.sticker_index]
    }

    /// Style the next gesture will be created with.
    pub fn current_style(&self) -> DrawStyle {
        match self.tool {
            Tool::Pen => DrawStyle::Stroke {
                thickness: self.current_thickness,
            },
            Tool::Sticker => DrawStyle::Sticker {
                glyph: self.current_sticker().to_string(),
                size: self.sticker_size,
            },
        }
    }

    /// Replaces the preview to match the current tool at the pointer.
    ///
    /// No preview is shown while a gesture is open, when the pointer is off
    /// the canvas, or when previews are disabled.
    pub(super) fn refresh_preview(&mut self) {
        let next = match self.pointer {
            Some(at) if self.preview_enabled && !self.history.is_drawing() => {
                Some(Preview::for_style(&self.current_style(), at))
            }
            _ => None,
        };

        if next != self.preview {
            self.preview = next;
            self.needs_redraw = true;
        }
    }

    /// Selects the pen with an explicit thickness, clamped to the valid range.
    ///
    /// NaN selects the minimum thickness.
    pub fn select_pen(&mut self, thickness: f64) {
        self.tool = Tool::Pen;
        self.current_thickness = clamp_thickness(thickness);
        debug!("Pen selected ({:.1}px)", self.current_thickness);
        self.refresh_preview();
    }

    /// Adjusts the pen thickness by `delta`, clamping to the valid range.
    pub fn adjust_thickness(&mut self, delta: f64) {
        self.select_pen(self.current_thickness + delta);
    }

    /// Selects a sticker from the palette by index.
    ///
    /// Returns `false` (selection unchanged) for out-of-range indices.
    pub fn select_sticker(&mut self, index: usize) -> bool {
        if index >= self.stickers.len() {
            warn!(
                "Sticker index {} out of range (palette has {})",
                index,
                self.stickers.len()
            );
            return false;
        }

        self.tool = Tool::Sticker;
        self.sticker_index = index;
        debug!("Sticker selected: {}", self.current_sticker());
        self.refresh_preview();
        true
    }

    /// Selects the sticker tool, advancing to the next glyph if it was
    /// already selected.
    pub fn next_sticker(&mut self) {
        let index = if self.tool == Tool::Sticker {
            (self.sticker_index + 1) % self.stickers.len()
        } else {
            self.sticker_index
        };
        self.select_sticker(index);
    }

    /// Look up an action for the given key name and current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }

    /// Redraws the full frame onto `surface` and clears the redraw flag.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        redraw(
            surface,
            &self.history,
            self.preview.as_ref(),
            &self.render_settings,
        );
        self.needs_redraw = false;
    }
}

fn clamp_thickness(thickness: f64) -> f64 {
    // NaN survives `clamp`
    if thickness.is_nan() {
        MIN_THICKNESS
    } else {
        thickness.clamp(MIN_THICKNESS, MAX_THICKNESS)
    }
}
