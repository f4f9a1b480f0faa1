//! Deck module - board generation
//!
//! Builds the shuffled, paired deck for one game session. For a board of
//! side length `size` there are `size * size` cells and `size * size / 2`
//! pairs; on odd cell counts a single filler card carries its own token and
//! can never be matched (it is excluded from the win denominator, see
//! [`matchable_count`]).

use crate::rng::SimpleRng;
use crate::types::{Card, CardId, TokenId, MAX_BOARD_SIZE, MIN_BOARD_SIZE, TOKEN_GLYPHS};

/// Number of cards that belong to a pair in a deck of `card_count` cards.
///
/// This is the win denominator: on odd cell counts the one unpaired filler
/// card is excluded.
pub fn matchable_count(card_count: usize) -> usize {
    card_count - card_count % 2
}

/// Generate a shuffled deck for a `size` x `size` board.
///
/// Tokens `0..pair_count` are duplicated, an odd cell count adds one filler
/// card with the next catalog token, the whole list is shuffled with an
/// unbiased Fisher-Yates permutation, and ids are assigned sequentially in
/// shuffled order.
///
/// Panics if `size` is outside `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]` or the
/// glyph catalog cannot cover the board; both are configuration violations,
/// not runtime states (the state machine rejects invalid sizes before they
/// reach this point).
pub fn generate(size: u8, rng: &mut SimpleRng) -> Vec<Card> {
    assert!(
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
        "board size {size} out of range"
    );

    let cell_count = (size as usize) * (size as usize);
    let pair_count = cell_count / 2;
    let token_count = pair_count + cell_count % 2;
    assert!(
        token_count <= TOKEN_GLYPHS.len(),
        "glyph catalog too small for a {size}x{size} board"
    );

    let mut tokens: Vec<TokenId> = Vec::with_capacity(cell_count);
    for t in 0..pair_count {
        tokens.push(TokenId(t as u8));
        tokens.push(TokenId(t as u8));
    }
    if cell_count % 2 == 1 {
        tokens.push(TokenId(pair_count as u8));
    }

    rng.shuffle(&mut tokens);

    tokens
        .into_iter()
        .enumerate()
        .map(|(id, token)| Card {
            id: id as CardId,
            token,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_counts(deck: &[Card]) -> Vec<usize> {
        let max = deck.iter().map(|c| c.token.0).max().unwrap() as usize;
        let mut counts = vec![0usize; max + 1];
        for card in deck {
            counts[card.token.0 as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_deck_length_is_cell_count() {
        let mut rng = SimpleRng::new(1);
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            let deck = generate(size, &mut rng);
            assert_eq!(deck.len(), (size as usize) * (size as usize));
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = SimpleRng::new(2);
        let deck = generate(4, &mut rng);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id as usize, i);
        }
    }

    #[test]
    fn test_even_board_is_fully_paired() {
        let mut rng = SimpleRng::new(3);
        for size in [2u8, 4, 6, 8, 10] {
            let deck = generate(size, &mut rng);
            for count in token_counts(&deck) {
                assert_eq!(count, 2);
            }
        }
    }

    #[test]
    fn test_odd_board_has_exactly_one_unpaired_card() {
        let mut rng = SimpleRng::new(4);
        for size in [3u8, 5, 7, 9] {
            let deck = generate(size, &mut rng);
            let singles = token_counts(&deck)
                .into_iter()
                .filter(|&c| c == 1)
                .count();
            assert_eq!(singles, 1, "size {size}");
        }
    }

    #[test]
    fn test_matchable_count_excludes_odd_filler() {
        assert_eq!(matchable_count(4), 4);
        assert_eq!(matchable_count(9), 8);
        assert_eq!(matchable_count(100), 100);
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let deck_a = generate(5, &mut SimpleRng::new(77));
        let deck_b = generate(5, &mut SimpleRng::new(77));
        assert_eq!(deck_a, deck_b);
    }

    #[test]
    fn test_different_seeds_give_different_layouts() {
        let deck_a = generate(6, &mut SimpleRng::new(1));
        let deck_b = generate(6, &mut SimpleRng::new(2));
        let tokens_a: Vec<_> = deck_a.iter().map(|c| c.token).collect();
        let tokens_b: Vec<_> = deck_b.iter().map(|c| c.token).collect();
        assert_ne!(tokens_a, tokens_b);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_invalid_size_panics() {
        let mut rng = SimpleRng::new(1);
        let _ = generate(11, &mut rng);
    }
}
