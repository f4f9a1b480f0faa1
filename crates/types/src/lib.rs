//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, input mapping, UI rendering).
//!
//! # Board Dimensions
//!
//! The board is a square grid of cards:
//!
//! - **Size range**: 2..=10 (side length, so 4 to 100 cells)
//! - **Default size**: 4 (16 cells, 8 pairs)
//! - **Cell addressing**: row-major, card id = `row * size + col`
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `FLIP_BACK_MS` | 1000 | Delay before a mismatched pair flips back |
//! | `MESSAGE_MS` | 1000 | Lifetime of a transient status message |
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{Card, CardId, TokenId, MIN_BOARD_SIZE, MAX_BOARD_SIZE};
//!
//! let card = Card { id: 0, token: TokenId(3) };
//! assert_eq!(card.token.glyph(), TokenId(3).glyph());
//!
//! assert_eq!(MIN_BOARD_SIZE, 2);
//! assert_eq!(MAX_BOARD_SIZE, 10);
//! ```

/// Smallest selectable board side length
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest selectable board side length
pub const MAX_BOARD_SIZE: u8 = 10;

/// Board side length a fresh game starts with
pub const DEFAULT_BOARD_SIZE: u8 = 4;

/// Upper bound on cell count (`MAX_BOARD_SIZE` squared), used for
/// fixed-size snapshot arrays
pub const MAX_CELLS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay before a mismatched pair is turned face-down again (1 second)
pub const FLIP_BACK_MS: u32 = 1000;

/// Lifetime of a transient status message before it auto-clears (1 second)
pub const MESSAGE_MS: u32 = 1000;

/// Glyph shown on the back of a face-down card
pub const CARD_BACK_GLYPH: char = '?';

/// Fixed catalog of card-face glyphs.
///
/// Pairs are formed over indices into this table. 50 entries cover the
/// largest board (10x10 = 50 pairs); a board that would need more tokens
/// than the catalog holds is a configuration error, not a runtime state.
pub const TOKEN_GLYPHS: [char; 50] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '@', '#', '$', '%', '&', '*', '+', '=', '<', '>', '~', '^', '/', '!',
];

/// Stable, 0-based position of a card in the deck for one game session
pub type CardId = u16;

/// Opaque pair token: an index into [`TOKEN_GLYPHS`].
///
/// Two cards match iff their tokens are equal. The numeric value is only
/// meaningful as a catalog index for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub u8);

impl TokenId {
    /// Card-face glyph for this token.
    ///
    /// Panics if the token is outside the catalog; tokens are only minted
    /// by deck generation, which never exceeds the catalog.
    pub fn glyph(&self) -> char {
        TOKEN_GLYPHS[self.0 as usize]
    }
}

/// A single card: a stable deck position bound to a pair token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub token: TokenId,
}

/// Player actions that can be applied to the game
///
/// Cursor movement is handled by the input layer; the remaining actions are
/// forwarded to the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one cell left
    CursorLeft,
    /// Move the board cursor one cell right
    CursorRight,
    /// Move the board cursor one cell up
    CursorUp,
    /// Move the board cursor one cell down
    CursorDown,
    /// Flip the card under the cursor
    Flip,
    /// Grow the board by one (clamped to the valid range)
    SizeUp,
    /// Shrink the board by one (clamped to the valid range)
    SizeDown,
    /// Regenerate the board at the current size
    Reset,
}

/// Result of flipping a card, reported to callers for feedback and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Flip was rejected without any state change (game won, or a mismatch
    /// resolution is still pending)
    Ignored,
    /// The card is already matched; only an advisory message was emitted
    AlreadyMatched,
    /// First card of a turn turned face-up
    FirstUp,
    /// Second flip hit the same card; the turn was reverted
    SameCard,
    /// Both cards matched and are now solved
    Matched,
    /// Both cards matched and the board is now cleared
    Won,
    /// The cards differ; they stay face-up until the flip-back delay fires
    Mismatch,
}

/// Short-lived user-facing feedback, auto-cleared after [`MESSAGE_MS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Matched,
    AlreadyMatched,
}

impl StatusMessage {
    /// User-visible text for this message
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::StatusMessage;
    ///
    /// assert_eq!(StatusMessage::Matched.as_str(), "Matched!");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusMessage::Matched => "Matched!",
            StatusMessage::AlreadyMatched => "This card is already matched!",
        }
    }
}
