//! Input routing and tool state.
//!
//! This module translates host pointer and keyboard events into history
//! operations. It owns the current tool (pen thickness or sticker glyph), the
//! hover preview, and the keybinding table.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::InputState;
pub use tool::Tool;
