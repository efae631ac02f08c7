mod actions;
mod core;
mod mouse;
#[cfg(test)]
mod tests;

pub use self::core::{InputState, MAX_THICKNESS, MIN_THICKNESS};
