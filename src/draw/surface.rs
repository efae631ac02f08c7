//! Rendering surface abstraction.
//!
//! The compositor only needs a small immediate-mode contract: clear a region,
//! build and stroke a path, fill a dot, and draw a glyph. [`CairoSurface`]
//! implements it on top of a Cairo context; [`Recorder`] logs every call so
//! tests (and `--dump-ops`) can inspect exactly what a frame drew.

use super::color::Color;
use super::drawable::Point;

/// Minimal 2D drawing contract consumed by the compositor.
pub trait Surface {
    /// Clears the rectangle `(0, 0, width, height)` and fills it with `color`.
    fn clear(&mut self, width: f64, height: f64, color: Color);
    /// Sets the source color for subsequent strokes, fills, and glyphs.
    fn set_color(&mut self, color: Color);
    /// Sets the line width used by [`Surface::stroke`].
    fn set_line_width(&mut self, width: f64);
    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    /// Strokes and consumes the current path.
    fn stroke(&mut self);
    /// Fills a solid circle.
    fn fill_circle(&mut self, center: Point, radius: f64);
    /// Draws `glyph` centered on `center` at the given font size.
    fn draw_glyph(&mut self, center: Point, glyph: &str, size: f64);
}

/// [`Surface`] implementation backed by a Cairo context.
pub struct CairoSurface<'a> {
    ctx: &'a cairo::Context,
    font_family: String,
}

impl<'a> CairoSurface<'a> {
    /// Wraps a context; glyphs are laid out with the given font family.
    pub fn new(ctx: &'a cairo::Context, font_family: impl Into<String>) -> Self {
        Self {
            ctx,
            font_family: font_family.into(),
        }
    }
}

impl Surface for CairoSurface<'_> {
    fn clear(&mut self, width: f64, height: f64, color: Color) {
        let ctx = self.ctx;
        ctx.save().ok();
        ctx.set_operator(cairo::Operator::Clear);
        ctx.rectangle(0.0, 0.0, width, height);
        let _ = ctx.fill();

        if color.a > 0.0 {
            ctx.set_operator(cairo::Operator::Over);
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.rectangle(0.0, 0.0, width, height);
            let _ = ctx.fill();
        }
        ctx.restore().ok();
    }

    fn set_color(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
        self.ctx.set_line_cap(cairo::LineCap::Round);
        self.ctx.set_line_join(cairo::LineJoin::Round);
    }

    fn move_to(&mut self, point: Point) {
        self.ctx.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.ctx.line_to(point.x, point.y);
    }

    fn stroke(&mut self) {
        let _ = self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.ctx.new_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0);
        let _ = self.ctx.fill();
    }

    fn draw_glyph(&mut self, center: Point, glyph: &str, size: f64) {
        if glyph.is_empty() {
            return;
        }

        let ctx = self.ctx;
        ctx.save().ok();
        ctx.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(ctx);
        let desc = format!("{} {}px", self.font_family, size.round().max(1.0) as i32);
        let font_desc = pango::FontDescription::from_string(&desc);
        layout.set_font_description(Some(&font_desc));
        layout.set_text(glyph);

        // Center on the ink rectangle so the glyph sits over the pointer
        let (ink_rect, _logical_rect) = layout.extents();
        let scale = pango::SCALE as f64;
        let ink_x = ink_rect.x() as f64 / scale;
        let ink_y = ink_rect.y() as f64 / scale;
        let ink_width = ink_rect.width() as f64 / scale;
        let ink_height = ink_rect.height() as f64 / scale;

        ctx.move_to(
            center.x - ink_x - ink_width / 2.0,
            center.y - ink_y - ink_height / 2.0,
        );
        pangocairo::functions::show_layout(ctx, &layout);
        ctx.restore().ok();
    }
}

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        width: f64,
        height: f64,
        color: Color,
    },
    SetColor(Color),
    SetLineWidth(f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    FillCircle {
        center: Point,
        radius: f64,
    },
    Glyph {
        center: Point,
        glyph: String,
        size: f64,
    },
}

/// A stroked path reconstructed from recorded ops.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub points: Vec<Point>,
    pub width: f64,
    pub color: Color,
}

/// In-memory [`Surface`] that records every call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All ops recorded so far, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Replays the op log and returns every path that was stroked, in order,
    /// together with the width and color active at the time of the stroke.
    pub fn stroked_paths(&self) -> Vec<StrokedPath> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        let mut width = 1.0;
        let mut color = super::color::BLACK;

        for op in &self.ops {
            match op {
                DrawOp::SetColor(c) => color = *c,
                DrawOp::SetLineWidth(w) => width = *w,
                DrawOp::BeginPath => current.clear(),
                DrawOp::MoveTo(p) | DrawOp::LineTo(p) => current.push(*p),
                DrawOp::Stroke => paths.push(StrokedPath {
                    points: std::mem::take(&mut current),
                    width,
                    color,
                }),
                DrawOp::Clear { .. } | DrawOp::FillCircle { .. } | DrawOp::Glyph { .. } => {}
            }
        }

        paths
    }

    /// Every glyph drawn, in order, as `(center, glyph)`.
    pub fn glyphs(&self) -> Vec<(Point, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Glyph { center, glyph, .. } => Some((*center, glyph.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f64, height: f64, color: Color) {
        self.ops.push(DrawOp::Clear {
            width,
            height,
            color,
        });
    }

    fn set_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(DrawOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(DrawOp::LineTo(point));
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.ops.push(DrawOp::FillCircle { center, radius });
    }

    fn draw_glyph(&mut self, center: Point, glyph: &str, size: f64) {
        self.ops.push(DrawOp::Glyph {
            center,
            glyph: glyph.to_string(),
            size,
        });
    }
}
