//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Color the canvas is cleared to before every redraw
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background_color: default_background_color(),
        }
    }
}

/// Drawing tool settings.
///
/// Controls the pen presets and the sticker palette available to the input
/// router. Thickness can still be adjusted at runtime with keybindings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Ink color for strokes and stickers
    #[serde(default = "default_ink_color")]
    pub ink_color: ColorSpec,

    /// Pen thickness selected at startup (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Thickness of the "thin" pen preset (valid range: 1.0 - 20.0)
    #[serde(default = "default_thin_thickness")]
    pub thin_thickness: f64,

    /// Thickness of the "thick" pen preset (valid range: 1.0 - 20.0)
    #[serde(default = "default_thick_thickness")]
    pub thick_thickness: f64,

    /// Amount added/removed by the thickness adjustment actions
    #[serde(default = "default_thickness_step")]
    pub thickness_step: f64,

    /// Sticker glyphs, cycled with the next-sticker action
    #[serde(default = "default_stickers")]
    pub stickers: Vec<String>,

    /// Sticker font size in pixels (valid range: 8.0 - 128.0)
    #[serde(default = "default_sticker_size")]
    pub sticker_size: f64,

    /// Font family used to lay out sticker glyphs
    #[serde(default = "default_sticker_font")]
    pub sticker_font: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            ink_color: default_ink_color(),
            default_thickness: default_thickness(),
            thin_thickness: default_thin_thickness(),
            thick_thickness: default_thick_thickness(),
            thickness_step: default_thickness_step(),
            stickers: default_stickers(),
            sticker_size: default_sticker_size(),
            sticker_font: default_sticker_font(),
        }
    }
}

/// Hover preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PreviewConfig {
    /// Show the brush dot / sticker glyph under the pointer while idle
    #[serde(default = "default_preview_enabled")]
    pub enabled: bool,

    /// Opacity of the preview relative to the ink (valid range: 0.0 - 1.0)
    #[serde(default = "default_preview_opacity")]
    pub opacity: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: default_preview_enabled(),
            opacity: default_preview_opacity(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum committed marks kept; the oldest are dropped beyond this (0 = unlimited)
    #[serde(default)]
    pub max_strokes: usize,
}

// =============================================================================
// Defaults
// =============================================================================

fn default_canvas_size() -> u32 {
    256
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_ink_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    1.0
}

fn default_thin_thickness() -> f64 {
    1.0
}

fn default_thick_thickness() -> f64 {
    5.0
}

fn default_thickness_step() -> f64 {
    1.0
}

pub(super) fn default_stickers() -> Vec<String> {
    vec!["★".to_string(), "♥".to_string(), "☺".to_string()]
}

fn default_sticker_size() -> f64 {
    32.0
}

fn default_sticker_font() -> String {
    "Sans".to_string()
}

fn default_preview_enabled() -> bool {
    true
}

fn default_preview_opacity() -> f64 {
    0.5
}
