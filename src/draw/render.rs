//! Scene compositor: projects history and preview onto a surface.

use super::color::{BLACK, Color, WHITE};
use super::drawable::Drawable;
use super::history::History;
use super::preview::Preview;
use super::surface::Surface;

/// Frame-wide rendering parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Color the canvas is cleared to
    pub background: Color,
    /// Color of strokes and stickers
    pub ink: Color,
    /// Alpha multiplier applied to the ink for the hover preview
    pub preview_opacity: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 256.0,
            height: 256.0,
            background: WHITE,
            ink: BLACK,
            preview_opacity: 0.5,
        }
    }
}

/// Renders drawables in slice order (first = bottom layer).
pub fn render_drawables(surface: &mut dyn Surface, drawables: &[Drawable]) {
    for drawable in drawables {
        drawable.render(surface);
    }
}

/// Redraws the full frame.
///
/// Layering is fixed: committed history in chronological order, then the
/// active drawable, then the preview on top of everything. Holds no state, so
/// calling it again with the same inputs yields the same frame.
pub fn redraw(
    surface: &mut dyn Surface,
    history: &History,
    preview: Option<&Preview>,
    settings: &RenderSettings,
) {
    surface.clear(settings.width, settings.height, settings.background);
    surface.set_color(settings.ink);

    render_drawables(surface, history.done());

    if let Some(active) = history.active() {
        active.render(surface);
    }

    if let Some(preview) = preview {
        surface.set_color(settings.ink.with_alpha(settings.preview_opacity));
        preview.render(surface);
    }
}
