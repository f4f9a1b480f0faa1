//! Terminal rendering module.
//!
//! - [`fb`]: styled character framebuffer (pure data)
//! - [`game_view`]: pure snapshot-to-framebuffer board view
//! - [`renderer`]: raw-mode terminal lifecycle and diff-based flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardView, Viewport};
pub use renderer::TerminalRenderer;
