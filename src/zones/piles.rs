//! Card containers: cascades, open cells, foundations.
//!
//! All three are plain ordered collections; the rules that decide what may
//! be pushed where live in `rules`. Index 0 is the bottom, the last element
//! is the top.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// Capacity of the open-cell pool.
pub const N_OPEN: usize = 4;

/// One tableau column. Only the top card is playable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cascade {
    cards: Vec<Card>,
}

impl Cascade {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The playable card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Cascade {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// The open-cell pool. Cards are addressed by identity, not slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenCells {
    cards: SmallVec<[Card; N_OPEN]>,
}

impl OpenCells {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= N_OPEN
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Add a card. Capacity is checked by the rules before this is called.
    pub fn insert(&mut self, card: Card) {
        debug_assert!(!self.is_full(), "open cells overflow");
        self.cards.push(card);
    }

    /// Remove a card by identity. Returns false if it was not here.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Cards in the order they arrived.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One suit's completion pile, built ace upward.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Foundation {
    cards: Vec<Card>,
}

impl Foundation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Would `card` be the next card on this pile?
    ///
    /// Suit is not checked here; each suit has its own foundation and the
    /// rules pick it from the card.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        match self.top() {
            None => card.rank() == 0,
            Some(top) => top.rank() + 1 == card.rank(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
