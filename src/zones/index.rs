//! Position index: card identity to current location.
//!
//! The index answers "where is card X?" in O(1) so the move engine never
//! has to scan containers. It is rebuilt wholesale on every reset and
//! updated for exactly one card per applied move.

use rustc_hash::FxHashMap;

use super::position::{Location, Position};
use crate::core::card::Card;

/// Card locations for all cards on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionIndex {
    positions: FxHashMap<Card, Position>,
}

impl PositionIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card that is not yet indexed.
    ///
    /// Only used while dealing; a card appearing twice is a dealing bug.
    pub fn insert(&mut self, card: Card, position: Position) {
        let previous = self.positions.insert(card, position);
        debug_assert!(previous.is_none(), "card {} indexed twice", card);
    }

    /// Record a card's new position, returning the old one.
    pub fn relocate(&mut self, card: Card, position: Position) -> Option<Position> {
        self.positions.insert(card, position)
    }

    /// Get a card's position.
    #[must_use]
    pub fn get(&self, card: Card) -> Option<Position> {
        self.positions.get(&card).copied()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.positions.contains_key(&card)
    }

    /// Cards currently in a given kind of container (unordered).
    pub fn cards_at(&self, location: Location) -> impl Iterator<Item = Card> + '_ {
        self.positions
            .iter()
            .filter(move |(_, p)| p.location == location)
            .map(|(&c, _)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Card, Position)> + '_ {
        self.positions.iter().map(|(&c, &p)| (c, p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
