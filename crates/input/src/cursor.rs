//! Board cursor: the terminal stand-in for pointing at a card.
//!
//! The cursor is owned by the input layer, not the game state; the game only
//! ever sees the card id it resolves to.

use crate::types::{CardId, GameAction};

/// Grid position of the selection cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub col: u8,
    pub row: u8,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a cursor-movement action, clamping to a `size` x `size` grid.
    ///
    /// Non-movement actions are ignored so callers can forward every action.
    pub fn apply(&mut self, action: GameAction, size: u8) {
        debug_assert!(size > 0);
        let max = size - 1;
        match action {
            GameAction::CursorLeft => self.col = self.col.saturating_sub(1),
            GameAction::CursorRight => self.col = (self.col + 1).min(max),
            GameAction::CursorUp => self.row = self.row.saturating_sub(1),
            GameAction::CursorDown => self.row = (self.row + 1).min(max),
            _ => {}
        }
    }

    /// Pull the cursor back inside the grid after a board-size change.
    pub fn clamp_to(&mut self, size: u8) {
        debug_assert!(size > 0);
        self.col = self.col.min(size - 1);
        self.row = self.row.min(size - 1);
    }

    /// Card id under the cursor (row-major).
    pub fn card_id(&self, size: u8) -> CardId {
        (self.row as CardId) * (size as CardId) + self.col as CardId
    }
}
