//! # freecell-engine
//!
//! A deterministic FreeCell solitaire engine with a replayable move history.
//!
//! ## Design Principles
//!
//! 1. **Numbered Deals**: A deal is fully determined by its seed, using the
//!    classic 31-bit LCG shuffle. Seed 1 is the familiar "deal #1".
//!
//! 2. **Log Is the Truth**: Every accepted move is appended to the log as
//!    text. Undo and replay only re-run forward moves from a fresh deal.
//!
//! 3. **Validate, Then Apply**: `RulesEngine::validate` never mutates. A
//!    rejected move leaves every container and the log unchanged.
//!
//! ## Architecture
//!
//! - **Persistent Log**: The move log is an `im::Vector`, so undo clones the
//!   history in O(1) before rebuilding.
//!
//! - **Position Index**: Every card's location is kept in a hash index,
//!   updated on each move, so exposure checks never scan containers.
//!
//! ## Modules
//!
//! - `core`: Cards, the deal RNG, moves, errors, configuration, state
//! - `zones`: Cascades, open cells, foundations and the position index
//! - `rules`: RulesEngine trait, FreeCell move legality, win detection
//! - `session`: Text command parsing and the playable session
//! - `record`: Replay lines and stored game records
//! - `render`: Plain-text board display

pub mod core;
pub mod zones;
pub mod rules;
pub mod session;
pub mod record;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Card, ParseCardError,
    DealRng, deal, shuffled_deck,
    Move, Destination, MoveError,
    GameConfig, GameState, Snapshot,
    N_CARDS, N_CASCADES, DEFAULT_SEED,
};

pub use crate::zones::{
    Cascade, Foundation, OpenCells, N_OPEN,
    Location, Position, PositionIndex, SuitLinks,
};

pub use crate::rules::{RulesEngine, FreeCellRules, WinReport};

pub use crate::session::{Command, Outcome, ReplayFailure, ReplayReport, Session};

pub use crate::record::{GameRecord, RecordError};

pub use crate::render::{render, Board};
