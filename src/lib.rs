//! Library exports for the sketchpad engine.
//!
//! Exposes the drawing history, input router, and configuration so that the
//! command-line host and external tools (e.g. the schema dumper) share the same
//! validation and rendering code.

pub mod config;
pub mod draw;
pub mod input;
pub mod replay;

pub use config::Config;
