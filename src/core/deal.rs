//! Shuffle and deal.
//!
//! The deck starts as the integers 51 down to 0. For each slot `i` a draw
//! `r` picks `j = 51 - r % (52 - i)` and the two slots swap. Integers then
//! decode to cards (`suit = c % 4`, `rank = c / 4`) and are dealt
//! round-robin across the cascades, first card at the bottom.

use super::card::{Card, N_CARDS};
use super::rng::DealRng;

/// Number of cascades on the board.
pub const N_CASCADES: usize = 8;

/// The shuffled deck in deal order.
#[must_use]
pub fn shuffled_deck(seed: i64) -> [Card; N_CARDS] {
    let mut deck: [u8; N_CARDS] = std::array::from_fn(|i| (N_CARDS - 1 - i) as u8);
    let rng = DealRng::new(seed);

    for (i, r) in (0..N_CARDS).zip(rng) {
        let j = (N_CARDS - 1) - (r as usize) % (N_CARDS - i);
        deck.swap(i, j);
    }

    deck.map(Card::from_deck_index)
}

/// Deal a seed's layout: card `i` of the shuffled deck goes to cascade
/// `i % 8`. Each cascade is listed bottom to top.
#[must_use]
pub fn deal(seed: i64) -> [Vec<Card>; N_CASCADES] {
    let mut cascades: [Vec<Card>; N_CASCADES] = Default::default();

    for (i, card) in shuffled_deck(seed).into_iter().enumerate() {
        cascades[i % N_CASCADES].push(card);
    }

    cascades
}
