//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines which kind of drawable a press creates. The
/// pen's thickness and the sticker's glyph live alongside it in the input
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path
    Pen,
    /// Sticker stamp - a glyph dragged into place
    Sticker,
}
