//! Game state: containers, position index and move log.
//!
//! ## GameState
//!
//! One game instance, owned by the caller:
//! - Eight cascades, the open-cell pool, four foundations
//! - Position index covering all 52 cards
//! - Per-suit deal-order links (diagnostic view)
//! - Move log of accepted commands since the last reset
//!
//! Everything is rebuilt by [`GameState::reset`]; nothing survives it except
//! the seed passed in. Mutation happens only through the rules engine, so
//! the containers and the index always agree.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::card::{Card, N_SUITS};
use super::deal::{shuffled_deck, N_CASCADES};
use crate::record;
use crate::rules::win;
use crate::zones::{Cascade, Foundation, OpenCells, Position, PositionIndex, SuitLinks};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    seed: i64,
    cascades: [Cascade; N_CASCADES],
    open: OpenCells,
    foundations: [Foundation; N_SUITS],
    index: PositionIndex,
    links: SuitLinks,
    log: Vector<String>,
}

impl GameState {
    /// Deal a new game from `seed`.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut state = Self {
            seed,
            cascades: Default::default(),
            open: OpenCells::new(),
            foundations: Default::default(),
            index: PositionIndex::new(),
            links: SuitLinks::default(),
            log: Vector::new(),
        };
        state.reset(seed);
        state
    }

    /// Re-deal from `seed`, discarding every container, the index and the
    /// move log.
    pub fn reset(&mut self, seed: i64) {
        let deck = shuffled_deck(seed);

        self.seed = seed;
        self.cascades = Default::default();
        self.open = OpenCells::new();
        self.foundations = Default::default();
        self.index.clear();
        self.log = Vector::new();

        for (i, &card) in deck.iter().enumerate() {
            let cascade = i % N_CASCADES;
            let depth = self.cascades[cascade].len();
            self.cascades[cascade].push(card);
            self.index.insert(card, Position::cascade(cascade, depth));
        }

        self.links = SuitLinks::build(deck);
        debug!(seed, "dealt");
        self.trace_links();
    }

    fn trace_links(&self) {
        if !tracing::enabled!(tracing::Level::TRACE) {
            return;
        }
        for suit in 0..N_SUITS as u8 {
            for card in self.links.iter_rev(suit) {
                if let Some(position) = self.index.get(card) {
                    trace!("{}: {}", card, position);
                }
            }
        }
    }

    // === Queries ===

    /// Seed this game was dealt from.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Number of moves applied since the last reset.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.log.len()
    }

    /// Accepted move commands, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<String> {
        &self.log
    }

    /// The move log as a single `REPLAY m1; m2; ...` line.
    #[must_use]
    pub fn log_line(&self) -> String {
        record::format_log_line(self.log.iter().map(String::as_str))
    }

    #[must_use]
    pub fn cascades(&self) -> &[Cascade; N_CASCADES] {
        &self.cascades
    }

    #[must_use]
    pub fn cascade(&self, index: usize) -> Option<&Cascade> {
        self.cascades.get(index)
    }

    #[must_use]
    pub fn open_cells(&self) -> &OpenCells {
        &self.open
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation; N_SUITS] {
        &self.foundations
    }

    /// Foundation for a suit (0..4).
    #[must_use]
    pub fn foundation(&self, suit: u8) -> &Foundation {
        &self.foundations[suit as usize]
    }

    /// Top card of each foundation, by suit.
    #[must_use]
    pub fn foundation_tops(&self) -> [Option<Card>; N_SUITS] {
        std::array::from_fn(|suit| self.foundations[suit].top())
    }

    /// Where a card currently is.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<Position> {
        self.index.get(card)
    }

    #[must_use]
    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    #[must_use]
    pub fn suit_links(&self) -> &SuitLinks {
        &self.links
    }

    /// Are all cascades rank-descending from bottom to top?
    #[must_use]
    pub fn is_won(&self) -> bool {
        win::is_won(&self.cascades)
    }

    /// Everything a renderer or remote caller needs, as plain data.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            move_count: self.move_count(),
            open: self.open.cards().to_vec(),
            foundations: self.foundation_tops(),
            cascades: self.cascades.iter().map(|c| c.cards().to_vec()).collect(),
            won: self.is_won(),
        }
    }

    // === Mutation (rules engine only) ===

    pub(crate) fn cascade_mut(&mut self, index: usize) -> &mut Cascade {
        &mut self.cascades[index]
    }

    pub(crate) fn open_mut(&mut self) -> &mut OpenCells {
        &mut self.open
    }

    pub(crate) fn foundation_mut(&mut self, suit: u8) -> &mut Foundation {
        &mut self.foundations[suit as usize]
    }

    pub(crate) fn relocate(&mut self, card: Card, position: Position) {
        self.index.relocate(card, position);
    }

    pub(crate) fn record(&mut self, command: impl Into<String>) {
        self.log.push_back(command.into());
    }
}

/// Serializable view of a game's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: i64,
    pub move_count: usize,
    /// Open-cell contents in arrival order.
    pub open: Vec<Card>,
    /// Top card of each foundation, by suit.
    pub foundations: [Option<Card>; N_SUITS],
    /// Each cascade bottom to top.
    pub cascades: Vec<Vec<Card>>,
    pub won: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deal::deal;
    use crate::zones::Location;

    #[test]
    fn test_new_deals_layout() {
        let state = GameState::new(1);
        let dealt = deal(1);

        assert_eq!(state.seed(), 1);
        assert_eq!(state.move_count(), 0);
        assert!(state.open_cells().is_empty());
        assert_eq!(state.foundation_tops(), [None; 4]);

        for (cascade, cards) in state.cascades().iter().zip(dealt.iter()) {
            assert_eq!(cascade.cards(), cards.as_slice());
        }
    }

    #[test]
    fn test_index_matches_layout() {
        let state = GameState::new(11982);

        assert_eq!(state.index().len(), 52);
        for (i, cascade) in state.cascades().iter().enumerate() {
            for (depth, &card) in cascade.cards().iter().enumerate() {
                assert_eq!(state.position(card), Some(Position::cascade(i, depth)));
            }
        }
        assert_eq!(state.index().cards_at(Location::Cascade).count(), 52);
    }

    #[test]
    fn test_suit_links_built() {
        let state = GameState::new(11982);

        assert_eq!(state.suit_links().len(), 52);
        // First heart dealt is the bottom of cascade 0
        assert_eq!(state.suit_links().head(2), Some("AH".parse().unwrap()));
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut state = GameState::new(1);
        let fresh = state.clone();

        let card = state.cascades()[0].top().unwrap();
        state.cascade_mut(0).pop();
        state.open_mut().insert(card);
        state.relocate(card, Position::open());
        state.record("6S OPEN");
        assert_ne!(state, fresh);

        state.reset(1);
        assert_eq!(state, fresh);
    }

    #[test]
    fn test_reset_to_other_seed() {
        let mut state = GameState::new(1);
        state.reset(617);

        assert_eq!(state, GameState::new(617));
        assert_eq!(state.seed(), 617);
    }

    #[test]
    fn test_log_line() {
        let mut state = GameState::new(1);
        assert_eq!(state.log_line(), "REPLAY");

        state.record("3D O");
        state.record("2C OPEN");
        assert_eq!(state.log_line(), "REPLAY 3D O; 2C OPEN");
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = GameState::new(617);
        let snapshot = state.snapshot();

        assert_eq!(snapshot.cascades.len(), 8);
        assert_eq!(snapshot.cascades[0][0].to_string(), "7D");
        assert!(!snapshot.won);

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
