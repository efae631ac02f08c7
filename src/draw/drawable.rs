//! Recorded drawing commands.
//!
//! A [`Drawable`] is the unit the history engine stores: created on
//! pointer-down, extended while the pointer moves, and frozen once committed.

use super::surface::Surface;

/// A point in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which kind of mark the next gesture produces, and with what style.
///
/// Supplied by the input router at the start of every gesture, and mirrored
/// by the hover preview while idle.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawStyle {
    /// Freehand polyline with the given line width.
    Stroke { thickness: f64 },
    /// Single glyph placed at the pointer.
    Sticker { glyph: String, size: f64 },
}

/// Freehand polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    thickness: f64,
}

impl Stroke {
    /// Starts a stroke at `start`. Non-positive thickness falls back to 1.0.
    pub fn new(start: Point, thickness: f64) -> Self {
        let thickness = if thickness > 0.0 { thickness } else { 1.0 };
        Self {
            points: vec![start],
            thickness,
        }
    }

    /// Points in the order they were recorded. Never empty.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    fn extend(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Strokes a polyline through every point.
    ///
    /// A single point yields a path with no segments, which draws nothing.
    pub fn render(&self, surface: &mut dyn Surface) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };

        surface.begin_path();
        surface.set_line_width(self.thickness);
        surface.move_to(*first);
        for point in rest {
            surface.line_to(*point);
        }
        surface.stroke();
    }
}

/// A glyph that follows the pointer until committed.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    anchor: Point,
    glyph: String,
    size: f64,
}

impl Sticker {
    pub fn new(anchor: Point, glyph: impl Into<String>, size: f64) -> Self {
        Self {
            anchor,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    fn extend(&mut self, point: Point) {
        self.anchor = point;
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_glyph(self.anchor, &self.glyph, self.size);
    }
}

/// A recorded drawing command: one of the fixed set of mark kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// Creates the variant selected by `style`, seeded at `start`.
    pub fn new(style: DrawStyle, start: Point) -> Self {
        match style {
            DrawStyle::Stroke { thickness } => Drawable::Stroke(Stroke::new(start, thickness)),
            DrawStyle::Sticker { glyph, size } => {
                Drawable::Sticker(Sticker::new(start, glyph, size))
            }
        }
    }

    /// Feeds a pointer position into the drawable.
    ///
    /// Strokes append the point; stickers move their anchor to it. Only the
    /// history's active drawable is ever extended.
    pub(super) fn extend(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        match self {
            Drawable::Stroke(stroke) => stroke.extend(point),
            Drawable::Sticker(sticker) => sticker.extend(point),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface),
            Drawable::Sticker(sticker) => sticker.render(surface),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            Drawable::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            Drawable::Stroke(_) => None,
        }
    }
}
