//! Drawing model, history engine, and Cairo-based rendering.
//!
//! This module defines the core drawing types:
//! - [`Drawable`]: a recorded mark (freehand [`Stroke`] or [`Sticker`])
//! - [`History`]: undo/redo stacks plus the gesture in progress
//! - [`Preview`]: the hover indicator for the next mark
//! - [`Surface`]: the drawing contract, implemented by [`CairoSurface`] and [`Recorder`]
//! - [`redraw`]: the compositor that projects all of the above onto a surface

pub mod color;
pub mod drawable;
pub mod history;
pub mod preview;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use drawable::{DrawStyle, Drawable, Point, Sticker, Stroke};
pub use history::History;
pub use preview::Preview;
pub use render::{RenderSettings, redraw, render_drawables};
pub use surface::{CairoSurface, DrawOp, Recorder, StrokedPath, Surface};
