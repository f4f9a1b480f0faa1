//! Game state module - the memory-game state machine
//!
//! One struct owns the whole game: deck, flipped/solved tracking, the lock
//! that holds while a mismatch resolution is pending, and the two countdown
//! timers (mismatch flip-back, transient message). All mutation goes through
//! the event methods; the render layer only ever sees snapshots.

use arrayvec::ArrayVec;

use crate::deck::{generate, matchable_count};
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, TimersSnapshot};
use crate::types::{
    Card, CardId, FlipOutcome, StatusMessage, DEFAULT_BOARD_SIZE, FLIP_BACK_MS, MAX_BOARD_SIZE,
    MESSAGE_MS, MIN_BOARD_SIZE,
};

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    size: u8,
    deck: Vec<Card>,
    /// Face-up but unresolved cards: 0 or 1 normally, 2 while a mismatch
    /// resolution is pending.
    flipped: ArrayVec<CardId, 2>,
    /// Permanently face-up cards, indexed by card id. Monotonic per session.
    solved: Vec<bool>,
    solved_count: usize,
    /// Held from a mismatch until the flip-back timer fires; rejects flips.
    locked: bool,
    won: bool,
    message: Option<StatusMessage>,
    flip_back_timer_ms: u32,
    message_timer_ms: u32,
    /// Monotonic session id (increments on every regeneration).
    episode_id: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game at the default board size with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE, seed)
    }

    /// Create a new game at a specific board size
    pub fn with_size(size: u8, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let deck = generate(size, &mut rng);
        let card_count = deck.len();
        Self {
            size,
            deck,
            flipped: ArrayVec::new(),
            solved: vec![false; card_count],
            solved_count: 0,
            locked: false,
            won: false,
            message: None,
            flip_back_timer_ms: 0,
            message_timer_ms: 0,
            episode_id: 0,
            rng,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Look up a card by id.
    ///
    /// An id outside the deck is a caller bug, never a reachable game state,
    /// so this fails loudly instead of returning an `Option`.
    pub fn card(&self, id: CardId) -> Card {
        self.deck[id as usize]
    }

    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn message(&self) -> Option<StatusMessage> {
        self.message
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    /// Win denominator: cards that belong to a pair (excludes the one
    /// unpaired filler on odd cell counts).
    pub fn matchable_count(&self) -> usize {
        matchable_count(self.deck.len())
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Visibility predicate: a card shows its face iff it is flipped or solved
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.flipped.contains(&id) || self.is_solved(id)
    }

    pub fn is_solved(&self, id: CardId) -> bool {
        self.solved[id as usize]
    }

    /// Change the board size and start a fresh session.
    ///
    /// Out-of-range sizes are silently rejected: the return value is `false`
    /// and the current game is untouched.
    pub fn set_size(&mut self, new_size: u8) -> bool {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&new_size) {
            return false;
        }
        self.size = new_size;
        self.regenerate();
        true
    }

    /// Start a fresh session at the current size
    pub fn reset(&mut self) {
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.deck = generate(self.size, &mut self.rng);
        self.flipped.clear();
        self.solved = vec![false; self.deck.len()];
        self.solved_count = 0;
        self.locked = false;
        self.won = false;
        self.message = None;
        self.flip_back_timer_ms = 0;
        self.message_timer_ms = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Flip the card with the given id.
    ///
    /// This is the core click event. Panics on an id outside the deck
    /// (contract violation); every in-range id is handled without error.
    pub fn flip_card(&mut self, id: CardId) -> FlipOutcome {
        assert!(
            (id as usize) < self.deck.len(),
            "card id {id} out of range for deck of {}",
            self.deck.len()
        );

        if self.won || self.locked {
            return FlipOutcome::Ignored;
        }

        if self.is_solved(id) {
            self.show_message(StatusMessage::AlreadyMatched);
            return FlipOutcome::AlreadyMatched;
        }

        let first = match self.flipped.first() {
            None => {
                self.flipped.push(id);
                return FlipOutcome::FirstUp;
            }
            Some(&first) => first,
        };

        if first == id {
            // Double-click on the same card: revert the turn, stay unlocked.
            self.flipped.clear();
            return FlipOutcome::SameCard;
        }

        self.flipped.push(id);
        if self.card(first).token == self.card(id).token {
            self.solved[first as usize] = true;
            self.solved[id as usize] = true;
            self.solved_count += 2;
            self.flipped.clear();
            self.show_message(StatusMessage::Matched);

            if self.solved_count == self.matchable_count() && !self.deck.is_empty() {
                self.won = true;
                return FlipOutcome::Won;
            }
            return FlipOutcome::Matched;
        }

        // Mismatch: hold the lock and keep both cards visible until the
        // flip-back timer fires.
        self.locked = true;
        self.flip_back_timer_ms = FLIP_BACK_MS;
        FlipOutcome::Mismatch
    }

    fn show_message(&mut self, message: StatusMessage) {
        self.message = Some(message);
        self.message_timer_ms = MESSAGE_MS;
    }

    /// Advance the countdown timers.
    ///
    /// Drives the two deferred actions (mismatch flip-back, message clear).
    /// Returns `true` if either fired, i.e. visible state changed without a
    /// player event.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;

        if self.flip_back_timer_ms > 0 {
            self.flip_back_timer_ms = self.flip_back_timer_ms.saturating_sub(elapsed_ms);
            if self.flip_back_timer_ms == 0 {
                self.flipped.clear();
                self.locked = false;
                changed = true;
            }
        }

        if self.message_timer_ms > 0 {
            self.message_timer_ms = self.message_timer_ms.saturating_sub(elapsed_ms);
            if self.message_timer_ms == 0 {
                self.message = None;
                changed = true;
            }
        }

        changed
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.size = self.size;
        out.card_count = self.deck.len() as u16;
        for card in &self.deck {
            let i = card.id as usize;
            out.tokens[i] = card.token.0;
            out.face_up[i] = self.is_face_up(card.id);
            out.solved[i] = self.solved[i];
        }
        out.locked = self.locked;
        out.won = self.won;
        out.message = self.message;
        out.solved_count = self.solved_count as u16;
        out.matchable_count = self.matchable_count() as u16;
        out.episode_id = self.episode_id;
        out.seed = self.rng.state();
        out.timers = TimersSnapshot {
            flip_back_ms: self.flip_back_timer_ms,
            message_ms: self.message_timer_ms,
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CARD_BACK_GLYPH, FLIP_BACK_MS, MESSAGE_MS, TICK_MS};

    /// Partner of `id`: the other card carrying the same token.
    fn partner(state: &GameState, id: CardId) -> CardId {
        let token = state.card(id).token;
        state
            .deck()
            .iter()
            .find(|c| c.id != id && c.token == token)
            .map(|c| c.id)
            .expect("card has no partner")
    }

    /// Some card whose token differs from `id`'s.
    fn mismatching(state: &GameState, id: CardId) -> CardId {
        let token = state.card(id).token;
        state
            .deck()
            .iter()
            .find(|c| c.token != token)
            .map(|c| c.id)
            .expect("deck has a single token")
    }

    fn run_out_timers(state: &mut GameState) {
        for _ in 0..(FLIP_BACK_MS.max(MESSAGE_MS) / TICK_MS + 1) {
            state.tick(TICK_MS);
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.size(), 4);
        assert_eq!(state.deck().len(), 16);
        assert!(state.flipped().is_empty());
        assert_eq!(state.solved_count(), 0);
        assert!(!state.locked());
        assert!(!state.won());
        assert!(state.message().is_none());
        assert_eq!(state.episode_id(), 0);
    }

    #[test]
    fn test_first_flip_turns_card_up() {
        let mut state = GameState::new(12345);

        assert_eq!(state.flip_card(0), FlipOutcome::FirstUp);
        assert_eq!(state.flipped(), &[0]);
        assert!(state.is_face_up(0));
        assert!(!state.locked());
    }

    #[test]
    fn test_same_card_twice_reverts_turn() {
        let mut state = GameState::new(12345);

        state.flip_card(0);
        assert_eq!(state.flip_card(0), FlipOutcome::SameCard);
        assert!(state.flipped().is_empty());
        assert!(!state.is_face_up(0));
        assert!(!state.locked());
    }

    #[test]
    fn test_match_solves_both_cards_immediately() {
        let mut state = GameState::new(12345);
        let second = partner(&state, 0);

        state.flip_card(0);
        assert_eq!(state.flip_card(second), FlipOutcome::Matched);

        assert!(state.is_solved(0));
        assert!(state.is_solved(second));
        assert!(state.flipped().is_empty());
        assert!(!state.locked());
        assert_eq!(state.solved_count(), 2);
        assert_eq!(state.message(), Some(StatusMessage::Matched));
    }

    #[test]
    fn test_mismatch_holds_lock_until_flip_back() {
        let mut state = GameState::new(12345);
        let other = mismatching(&state, 0);

        state.flip_card(0);
        assert_eq!(state.flip_card(other), FlipOutcome::Mismatch);

        // Both cards stay visible while the lock is held.
        assert!(state.locked());
        assert_eq!(state.flipped().len(), 2);
        assert!(state.is_face_up(0));
        assert!(state.is_face_up(other));

        // Timer fires: cards flip back, lock drops.
        let mut elapsed = 0;
        while state.locked() {
            assert!(elapsed <= FLIP_BACK_MS);
            state.tick(TICK_MS);
            elapsed += TICK_MS;
        }
        assert!(state.flipped().is_empty());
        assert!(!state.is_face_up(0));
        assert!(!state.is_face_up(other));
    }

    #[test]
    fn test_clicks_ignored_while_locked() {
        let mut state = GameState::new(12345);
        let other = mismatching(&state, 0);

        state.flip_card(0);
        state.flip_card(other);
        assert!(state.locked());

        let solved_before = state.solved_count();
        let flipped_before: Vec<CardId> = state.flipped().to_vec();

        for id in 0..state.deck().len() as CardId {
            assert_eq!(state.flip_card(id), FlipOutcome::Ignored);
        }

        assert_eq!(state.solved_count(), solved_before);
        assert_eq!(state.flipped(), flipped_before.as_slice());
        assert!(state.locked());
        assert!(!state.won());
    }

    #[test]
    fn test_already_matched_click_is_advisory_only() {
        let mut state = GameState::new(12345);
        let second = partner(&state, 0);
        state.flip_card(0);
        state.flip_card(second);
        assert!(state.is_solved(0));
        run_out_timers(&mut state);
        assert!(state.message().is_none());

        for _ in 0..5 {
            assert_eq!(state.flip_card(0), FlipOutcome::AlreadyMatched);
            assert_eq!(state.message(), Some(StatusMessage::AlreadyMatched));
            assert!(state.is_solved(0));
            assert!(state.flipped().is_empty());
            assert!(!state.locked());
        }
        assert_eq!(state.solved_count(), 2);
    }

    #[test]
    fn test_message_auto_clears() {
        let mut state = GameState::new(12345);
        let second = partner(&state, 0);
        state.flip_card(0);
        state.flip_card(second);
        assert!(state.message().is_some());

        state.tick(MESSAGE_MS - 1);
        assert!(state.message().is_some());
        state.tick(1);
        assert!(state.message().is_none());
    }

    #[test]
    fn test_solving_every_pair_wins() {
        let mut state = GameState::new(12345);

        let mut outcome = FlipOutcome::Ignored;
        for id in 0..state.deck().len() as CardId {
            if state.is_solved(id) {
                continue;
            }
            state.flip_card(id);
            outcome = state.flip_card(partner(&state, id));
        }

        assert_eq!(outcome, FlipOutcome::Won);
        assert!(state.won());
        assert_eq!(state.solved_count(), state.deck().len());
    }

    #[test]
    fn test_clicks_ignored_after_win() {
        let mut state = GameState::new(12345);
        for id in 0..state.deck().len() as CardId {
            if !state.is_solved(id) {
                state.flip_card(id);
                state.flip_card(partner(&state, id));
            }
        }
        assert!(state.won());

        assert_eq!(state.flip_card(0), FlipOutcome::Ignored);
        assert!(state.won());
        assert!(state.flipped().is_empty());
    }

    #[test]
    fn test_odd_board_wins_without_filler_card() {
        let mut state = GameState::with_size(3, 7);
        assert_eq!(state.deck().len(), 9);
        assert_eq!(state.matchable_count(), 8);

        // Find the filler: the one card with no partner.
        let filler = state
            .deck()
            .iter()
            .find(|c| {
                state
                    .deck()
                    .iter()
                    .filter(|d| d.token == c.token)
                    .count()
                    == 1
            })
            .map(|c| c.id)
            .unwrap();

        for id in 0..state.deck().len() as CardId {
            if id == filler || state.is_solved(id) {
                continue;
            }
            state.flip_card(id);
            state.flip_card(partner(&state, id));
        }

        assert!(state.won());
        assert!(!state.is_solved(filler));
    }

    #[test]
    fn test_filler_card_never_matches() {
        let mut state = GameState::with_size(3, 7);
        let filler = state
            .deck()
            .iter()
            .find(|c| {
                state
                    .deck()
                    .iter()
                    .filter(|d| d.token == c.token)
                    .count()
                    == 1
            })
            .map(|c| c.id)
            .unwrap();

        let other = mismatching(&state, filler);
        state.flip_card(filler);
        assert_eq!(state.flip_card(other), FlipOutcome::Mismatch);
    }

    #[test]
    fn test_set_size_regenerates_and_resets() {
        let mut state = GameState::new(12345);
        state.flip_card(0);
        state.flip_card(mismatching(&state, 0));
        assert!(state.locked());

        assert!(state.set_size(6));
        assert_eq!(state.size(), 6);
        assert_eq!(state.deck().len(), 36);
        assert!(state.flipped().is_empty());
        assert_eq!(state.solved_count(), 0);
        assert!(!state.locked());
        assert!(!state.won());
        assert!(state.message().is_none());
        assert_eq!(state.episode_id(), 1);
    }

    #[test]
    fn test_invalid_size_is_silently_rejected() {
        let mut state = GameState::new(12345);
        state.flip_card(0);

        assert!(!state.set_size(1));
        assert!(!state.set_size(11));
        assert!(!state.set_size(0));

        // Prior game untouched.
        assert_eq!(state.size(), 4);
        assert_eq!(state.flipped(), &[0]);
        assert_eq!(state.episode_id(), 0);
    }

    #[test]
    fn test_reset_keeps_size_and_bumps_episode() {
        let mut state = GameState::with_size(5, 9);
        state.flip_card(3);
        state.reset();

        assert_eq!(state.size(), 5);
        assert!(state.flipped().is_empty());
        assert_eq!(state.episode_id(), 1);

        state.reset();
        assert_eq!(state.episode_id(), 2);
    }

    #[test]
    fn test_reset_shuffles_a_new_layout() {
        let mut state = GameState::with_size(6, 9);
        let before: Vec<_> = state.deck().iter().map(|c| c.token).collect();
        state.reset();
        let after: Vec<_> = state.deck().iter().map(|c| c.token).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_reset_while_mismatch_pending_discards_stale_flip_back() {
        let mut state = GameState::new(12345);
        state.flip_card(0);
        state.flip_card(mismatching(&state, 0));
        assert!(state.locked());

        state.reset();
        assert!(!state.locked());

        // A first pick in the new session must survive the window where the
        // old flip-back would have fired.
        state.flip_card(0);
        run_out_timers(&mut state);
        assert_eq!(state.flipped(), &[0]);
    }

    #[test]
    fn test_win_survives_until_reset() {
        let mut state = GameState::with_size(2, 12345);
        for id in 0..4 {
            if !state.is_solved(id) {
                state.flip_card(id);
                state.flip_card(partner(&state, id));
            }
        }
        assert!(state.won());

        run_out_timers(&mut state);
        assert!(state.won());

        state.reset();
        assert!(!state.won());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_deck_id_panics() {
        let mut state = GameState::with_size(2, 1);
        let _ = state.flip_card(4);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(12345);
        let second = partner(&state, 0);
        state.flip_card(0);
        state.flip_card(second);

        let snap = state.snapshot();
        assert_eq!(snap.size, 4);
        assert_eq!(snap.card_count, 16);
        assert_eq!(snap.solved_count, 2);
        assert_eq!(snap.matchable_count, 16);
        assert!(snap.solved[0]);
        assert!(snap.face_up[0]);
        assert_eq!(snap.episode_id, 0);
        for card in state.deck() {
            assert_eq!(snap.tokens[card.id as usize], card.token.0);
        }
    }

    #[test]
    fn test_snapshot_timers_track_pending_work() {
        let mut state = GameState::new(12345);
        state.flip_card(0);
        state.flip_card(mismatching(&state, 0));

        let snap = state.snapshot();
        assert_eq!(snap.timers.flip_back_ms, FLIP_BACK_MS);
        assert!(snap.locked);
        assert!(!snap.playable());

        state.tick(TICK_MS);
        let snap = state.snapshot();
        assert_eq!(snap.timers.flip_back_ms, FLIP_BACK_MS - TICK_MS);
    }

    #[test]
    fn test_card_back_glyph_is_reserved() {
        // The render layer shows CARD_BACK_GLYPH for face-down cards; no
        // token may collide with it.
        let state = GameState::with_size(10, 1);
        for card in state.deck() {
            assert_ne!(card.token.glyph(), CARD_BACK_GLYPH);
        }
    }

    #[test]
    fn test_default_game_state() {
        let state = GameState::default();
        assert_eq!(state.size(), 4);
        assert!(!state.won());
    }
}
