//! Card identity and the cascade stacking rule.
//!
//! A card is a `(suit, rank)` pair. Its textual identity is the rank letter
//! followed by the suit letter, e.g. `"AC"` for the ace of clubs or `"TH"`
//! for the ten of hearts. That two-character string is the stable key used
//! in move commands, the move log and serialized records.
//!
//! ```
//! use freecell_engine::core::Card;
//!
//! let ace: Card = "AC".parse().unwrap();
//! assert_eq!(ace.suit(), 0);
//! assert_eq!(ace.rank(), 0);
//!
//! let two_of_hearts: Card = "2H".parse().unwrap();
//! assert!(ace.can_stack(two_of_hearts));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rank letters, indexed by rank (ace = 0, king = 12).
pub const RANK_CHARS: &[u8; 13] = b"A23456789TJQK";

/// Suit letters, indexed by suit.
pub const SUIT_CHARS: &[u8; 4] = b"CDHS";

/// Number of ranks per suit.
pub const N_RANKS: u8 = 13;

/// Number of suits (and foundations).
pub const N_SUITS: usize = 4;

/// Number of cards in the deck.
pub const N_CARDS: usize = 52;

/// An immutable playing card.
///
/// Suits 0 and 3 (clubs, spades) form one colour class, suits 1 and 2
/// (diamonds, hearts) the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    suit: u8,
    rank: u8,
}

impl Card {
    /// Create a card from suit (0..4) and rank (0..13).
    #[must_use]
    pub fn new(suit: u8, rank: u8) -> Self {
        assert!((suit as usize) < N_SUITS, "suit {} out of range", suit);
        assert!(rank < N_RANKS, "rank {} out of range", rank);
        Self { suit, rank }
    }

    /// Decode a deck integer: suit = `c % 4`, rank = `c / 4`.
    #[must_use]
    pub const fn from_deck_index(c: u8) -> Self {
        Self {
            suit: c % N_SUITS as u8,
            rank: c / N_SUITS as u8,
        }
    }

    /// Inverse of [`Card::from_deck_index`].
    #[must_use]
    pub const fn deck_index(self) -> u8 {
        self.rank * N_SUITS as u8 + self.suit
    }

    #[must_use]
    pub const fn suit(self) -> u8 {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Diamonds and hearts.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self.suit, 1 | 2)
    }

    /// Can `self` be placed on top of `under` in a cascade?
    ///
    /// Requires `under` to be exactly one rank higher and of the opposite
    /// colour class.
    #[must_use]
    pub fn can_stack(self, under: Card) -> bool {
        under.rank == self.rank + 1 && self.is_red() != under.is_red()
    }

    /// All 52 cards in deck-index order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..N_CARDS as u8).map(Card::from_deck_index)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            RANK_CHARS[self.rank as usize] as char,
            SUIT_CHARS[self.suit as usize] as char
        )
    }
}

/// A token that does not name a card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no such card: {token}")]
pub struct ParseCardError {
    pub token: String,
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError { token: s.to_string() };

        let &[rank, suit] = s.as_bytes() else {
            return Err(err());
        };
        let rank = RANK_CHARS.iter().position(|&c| c == rank).ok_or_else(err)?;
        let suit = SUIT_CHARS.iter().position(|&c| c == suit).ok_or_else(err)?;

        Ok(Self {
            suit: suit as u8,
            rank: rank as u8,
        })
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
