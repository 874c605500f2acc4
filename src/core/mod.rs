//! Core engine types: cards, the deal, moves, errors, configuration, state.

pub mod action;
pub mod card;
pub mod config;
pub mod deal;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Destination, Move};
pub use card::{Card, ParseCardError, N_CARDS, N_RANKS, N_SUITS};
pub use config::{GameConfig, DEFAULT_SEED};
pub use deal::{deal, shuffled_deck, N_CASCADES};
pub use error::MoveError;
pub use rng::DealRng;
pub use state::{GameState, Snapshot};
