use crate::types::{StatusMessage, DEFAULT_BOARD_SIZE, MAX_CELLS};

/// Pending countdown timers, exported for observers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimersSnapshot {
    pub flip_back_ms: u32,
    pub message_ms: u32,
}

/// Read-only render snapshot of one game state.
///
/// Plain `Copy` data with fixed-size arrays so callers can keep one snapshot
/// alive across frames and refill it without allocating. Only the first
/// `card_count` entries of the per-card arrays are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub size: u8,
    pub card_count: u16,
    /// Catalog token index per card id.
    pub tokens: [u8; MAX_CELLS],
    /// Visibility predicate per card id: flipped or solved.
    pub face_up: [bool; MAX_CELLS],
    /// Permanently revealed (matched) cards.
    pub solved: [bool; MAX_CELLS],
    pub locked: bool,
    pub won: bool,
    pub message: Option<StatusMessage>,
    pub solved_count: u16,
    /// Win denominator: cards that belong to a pair.
    pub matchable_count: u16,
    pub episode_id: u32,
    pub seed: u32,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = DEFAULT_BOARD_SIZE;
        self.card_count = 0;
        self.tokens = [0; MAX_CELLS];
        self.face_up = [false; MAX_CELLS];
        self.solved = [false; MAX_CELLS];
        self.locked = false;
        self.won = false;
        self.message = None;
        self.solved_count = 0;
        self.matchable_count = 0;
        self.episode_id = 0;
        self.seed = 0;
        self.timers = TimersSnapshot::default();
    }

    pub fn playable(&self) -> bool {
        !self.won && !self.locked
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            card_count: 0,
            tokens: [0; MAX_CELLS],
            face_up: [false; MAX_CELLS],
            solved: [false; MAX_CELLS],
            locked: false,
            won: false,
            message: None,
            solved_count: 0,
            matchable_count: 0,
            episode_id: 0,
            seed: 0,
            timers: TimersSnapshot::default(),
        }
    }
}
