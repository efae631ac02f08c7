//! Configuration file support for sketchpad.
//!
//! Settings are read from `~/.config/sketchpad/config.toml` (or an explicit
//! path given on the command line). Settings include canvas size and colors,
//! pen presets, the sticker palette, preview appearance, the history cap, and
//! keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingError, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig, HistoryConfig, PreviewConfig};

use crate::draw::RenderSettings;
use crate::draw::color::{BLACK, WHITE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 512
/// height = 512
/// background_color = "white"
///
/// [drawing]
/// ink_color = "black"
/// thin_thickness = 1.0
/// thick_thickness = 5.0
/// stickers = ["★", "♥", "☺"]
///
/// [preview]
/// enabled = true
/// opacity = 0.5
///
/// [history]
/// max_strokes = 0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Pen presets, ink, and sticker palette
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Hover preview appearance
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Undo history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    ///
    /// Validated ranges:
    /// - canvas `width`/`height`: 16 - 8192
    /// - `default_thickness`, `thin_thickness`, `thick_thickness`: 1.0 - 20.0
    /// - `thickness_step`: 0.5 - 10.0
    /// - `sticker_size`: 8.0 - 128.0
    /// - `preview.opacity`: 0.0 - 1.0
    /// - empty sticker palette or empty glyphs are replaced/removed
    pub fn validate_and_clamp(&mut self) {
        clamp_u32("canvas.width", &mut self.canvas.width, 16, 8192);
        clamp_u32("canvas.height", &mut self.canvas.height, 16, 8192);

        clamp_f64(
            "drawing.default_thickness",
            &mut self.drawing.default_thickness,
            1.0,
            20.0,
        );
        clamp_f64(
            "drawing.thin_thickness",
            &mut self.drawing.thin_thickness,
            1.0,
            20.0,
        );
        clamp_f64(
            "drawing.thick_thickness",
            &mut self.drawing.thick_thickness,
            1.0,
            20.0,
        );
        clamp_f64(
            "drawing.thickness_step",
            &mut self.drawing.thickness_step,
            0.5,
            10.0,
        );
        clamp_f64(
            "drawing.sticker_size",
            &mut self.drawing.sticker_size,
            8.0,
            128.0,
        );
        clamp_f64("preview.opacity", &mut self.preview.opacity, 0.0, 1.0);

        let before = self.drawing.stickers.len();
        self.drawing.stickers.retain(|glyph| !glyph.trim().is_empty());
        if self.drawing.stickers.len() != before {
            warn!(
                "Removed {} empty sticker glyph(s)",
                before - self.drawing.stickers.len()
            );
        }
        if self.drawing.stickers.is_empty() {
            warn!("Sticker palette is empty, falling back to defaults");
            self.drawing.stickers = types::default_stickers();
        }

        if self.drawing.sticker_font.trim().is_empty() {
            warn!("Empty sticker_font, falling back to 'Sans'");
            self.drawing.sticker_font = "Sans".to_string();
        }
    }

    /// Builds compositor settings from the canvas, ink, and preview sections.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            width: self.canvas.width as f64,
            height: self.canvas.height as f64,
            background: self.canvas.background_color.to_color_or(WHITE),
            ink: self.drawing.ink_color.to_color_or(BLACK),
            preview_opacity: self.preview.opacity,
        }
    }

    /// Returns the path to the default configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// no file exists there.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from a TOML string without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(value) {
        warn!("Invalid {name} {value:.2}, clamping to {min:.1}-{max:.1} range");
        // NaN fails `contains` and would survive `clamp`
        *value = if value.is_nan() {
            min
        } else {
            value.clamp(min, max)
        };
    }
}

fn clamp_u32(name: &str, value: &mut u32, min: u32, max: u32) {
    if !(min..=max).contains(value) {
        warn!("Invalid {name} {value}, clamping to {min}-{max} range");
        *value = (*value).clamp(min, max);
    }
}
