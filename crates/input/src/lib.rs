//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and owns the
//! board [`Cursor`] that stands in for the pointer over the card grid.

pub mod cursor;
pub mod map;

pub use tui_pairs_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
