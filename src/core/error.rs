//! Move and command failures.
//!
//! Every failure leaves the game untouched and is reported as its own
//! variant, so callers (and tests) can tell which rule rejected a request.

use thiserror::Error;

use super::action::Destination;
use super::card::Card;

/// Why a command or move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The card token does not name a card.
    #[error("no such card: {0}")]
    UnknownCard(String),

    /// Missing destination, bad cascade index, or a command where a move
    /// was expected.
    #[error("incomprehensible command: {0}")]
    Malformed(String),

    /// The card is neither on top of a cascade nor in an open cell.
    #[error("card not playable: {0}")]
    NotExposed(Card),

    /// The destination does not accept the card.
    #[error("illegal move: {card} to {target}")]
    IllegalMove { card: Card, target: Destination },

    /// All open cells are occupied.
    #[error("no open cells available")]
    NoOpenCells,

    /// The destination or command word matches nothing known.
    #[error("unrecognized command: {0}")]
    UnrecognizedCommand(String),
}
