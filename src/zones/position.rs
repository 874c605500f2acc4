//! Where a card currently is.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Container kind holding a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Foundation,
    Open,
    Cascade,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Location::Foundation => "F",
            Location::Open => "O",
            Location::Cascade => "C",
        };
        f.write_str(tag)
    }
}

/// A card's position record.
///
/// - `index`: cascade number for `Cascade`, suit for `Foundation`, 0 for `Open`
/// - `depth`: 0-based offset from the bottom of the cascade, 0 elsewhere
/// - `weight`: reserved, always 0 and never consulted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub location: Location,
    pub index: usize,
    pub depth: usize,
    pub weight: i32,
}

impl Position {
    #[must_use]
    pub const fn cascade(index: usize, depth: usize) -> Self {
        Self {
            location: Location::Cascade,
            index,
            depth,
            weight: 0,
        }
    }

    #[must_use]
    pub const fn open() -> Self {
        Self {
            location: Location::Open,
            index: 0,
            depth: 0,
            weight: 0,
        }
    }

    #[must_use]
    pub const fn foundation(suit: usize) -> Self {
        Self {
            location: Location::Foundation,
            index: suit,
            depth: 0,
            weight: 0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} - {}", self.location, self.index, self.depth, self.weight)
    }
}
