//! Move representation: a card plus where it should go.
//!
//! A move's canonical text is `<CARD> <DEST> [<INDEX>]`, e.g. `"AC FOUNDATION"`
//! or `"9H CASCADE 3"`. That is also what the move log records for moves
//! submitted as typed values rather than as text.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Target of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// The foundation for the card's own suit.
    Foundation,
    /// Any free open cell.
    Open,
    /// A cascade by index (0..8).
    Cascade(usize),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Foundation => f.write_str("FOUNDATION"),
            Destination::Open => f.write_str("OPEN"),
            Destination::Cascade(i) => write!(f, "CASCADE {}", i),
        }
    }
}

/// A single move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub dest: Destination,
}

impl Move {
    #[must_use]
    pub const fn new(card: Card, dest: Destination) -> Self {
        Self { card, dest }
    }

    #[must_use]
    pub const fn to_foundation(card: Card) -> Self {
        Self::new(card, Destination::Foundation)
    }

    #[must_use]
    pub const fn to_open(card: Card) -> Self {
        Self::new(card, Destination::Open)
    }

    #[must_use]
    pub const fn to_cascade(card: Card, index: usize) -> Self {
        Self::new(card, Destination::Cascade(index))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.card, self.dest)
    }
}
