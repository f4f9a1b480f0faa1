//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! memory-matching game. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deck layouts
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`deck`]: shuffled, paired deck generation for a square board
//! - [`game_state`]: the state machine (flips, lock, win, countdown timers)
//! - [`rng`]: seeded xorshift32 with an unbiased Fisher-Yates shuffle
//! - [`snapshot`]: read-only `Copy` snapshot consumed by the render layer
//!
//! # Game Rules
//!
//! - Cards lie face-down on a `size` x `size` grid; exactly two cards share
//!   each pair token (one unpaired filler on odd cell counts).
//! - A turn reveals two cards. Matching cards stay face-up permanently;
//!   mismatched cards flip back after a fixed delay, during which all
//!   further flips are rejected (the lock).
//! - Flipping the same card twice reverts the turn. Flipping an already
//!   matched card only emits an advisory message.
//! - The game is won when every paired card is solved. Size changes and
//!   resets regenerate the whole session.
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::GameState;
//! use tui_pairs_types::FlipOutcome;
//!
//! let mut game = GameState::new(12345);
//!
//! // Reveal a first card, then its partner (found via the deck).
//! let first = game.deck()[0];
//! let partner = game
//!     .deck()
//!     .iter()
//!     .find(|c| c.id != first.id && c.token == first.token)
//!     .unwrap()
//!     .id;
//!
//! assert_eq!(game.flip_card(first.id), FlipOutcome::FirstUp);
//! assert_eq!(game.flip_card(partner), FlipOutcome::Matched);
//! assert_eq!(game.solved_count(), 2);
//! ```
//!
//! # Timing
//!
//! Deferred work (mismatch flip-back, transient message clear) is modeled as
//! countdown timers inside [`GameState`], driven by
//! [`GameState::tick`](game_state::GameState::tick) from the single-threaded
//! event loop. Regenerating the session rebuilds the state, so a stale
//! countdown can never fire into a new deck.

pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use deck::{generate, matchable_count};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, TimersSnapshot};
