//! Hover preview of the next mark.

use super::drawable::{DrawStyle, Point};
use super::surface::Surface;

/// Transient indicator that follows the pointer while no gesture is active.
///
/// Built from the same [`DrawStyle`] the next gesture would use, so it always
/// foreshadows what a press would commit. Never stored in history.
#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    /// Dot with the diameter of the pen.
    Brush { at: Point, thickness: f64 },
    /// The selected sticker glyph.
    Sticker { at: Point, glyph: String, size: f64 },
}

impl Preview {
    pub fn for_style(style: &DrawStyle, at: Point) -> Self {
        match style {
            DrawStyle::Stroke { thickness } => Preview::Brush {
                at,
                thickness: *thickness,
            },
            DrawStyle::Sticker { glyph, size } => Preview::Sticker {
                at,
                glyph: glyph.clone(),
                size: *size,
            },
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Preview::Brush { at, .. } | Preview::Sticker { at, .. } => *at,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Preview::Brush { at, thickness } => {
                surface.fill_circle(*at, (thickness / 2.0).max(0.5));
            }
            Preview::Sticker { at, glyph, size } => {
                surface.draw_glyph(*at, glyph, *size);
            }
        }
    }
}
