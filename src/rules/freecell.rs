//! FreeCell move rules.
//!
//! Three move kinds, all of which need the card exposed (on top of its
//! cascade, or sitting in an open cell):
//!
//! | Destination | Legal when                                             |
//! |-------------|--------------------------------------------------------|
//! | Foundation  | pile empty and card is an ace, or card is top rank + 1 |
//! | Open cell   | a cell is free and the card is on top of a cascade     |
//! | Cascade     | target empty, or card stacks on the target's top       |
//!
//! Checks run in a fixed order so the reported reason is stable: unknown
//! card, open-cell capacity, exposure, then the destination rule.

use tracing::{debug, warn};

use super::engine::RulesEngine;
use super::win;
use crate::core::action::{Destination, Move};
use crate::core::card::Card;
use crate::core::error::MoveError;
use crate::core::state::GameState;
use crate::zones::{Location, Position};

/// Standard single-card FreeCell rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FreeCellRules;

impl FreeCellRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Top of its cascade, or in the open pool.
    fn is_exposed(state: &GameState, card: Card, position: Position) -> bool {
        match position.location {
            Location::Cascade => state
                .cascade(position.index)
                .is_some_and(|c| c.top() == Some(card)),
            Location::Open => true,
            Location::Foundation => false,
        }
    }
}

impl RulesEngine for FreeCellRules {
    fn validate(&self, state: &GameState, mv: &Move) -> Result<(), MoveError> {
        let card = mv.card;
        let position = state
            .position(card)
            .ok_or_else(|| MoveError::UnknownCard(card.to_string()))?;
        let illegal = MoveError::IllegalMove { card, target: mv.dest };

        match mv.dest {
            Destination::Foundation => {
                if !Self::is_exposed(state, card, position) {
                    return Err(MoveError::NotExposed(card));
                }
                if !state.foundation(card.suit()).accepts(card) {
                    return Err(illegal);
                }
            }
            Destination::Open => {
                if state.open_cells().is_full() {
                    return Err(MoveError::NoOpenCells);
                }
                // Only cascade cards may go to a cell
                if position.location != Location::Cascade {
                    return Err(illegal);
                }
                if !Self::is_exposed(state, card, position) {
                    return Err(MoveError::NotExposed(card));
                }
            }
            Destination::Cascade(index) => {
                let target = state
                    .cascade(index)
                    .ok_or_else(|| MoveError::Malformed(mv.to_string()))?;
                if !Self::is_exposed(state, card, position) {
                    return Err(MoveError::NotExposed(card));
                }
                if let Some(under) = target.top() {
                    if !card.can_stack(under) {
                        return Err(illegal);
                    }
                }
            }
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, mv: &Move) {
        let card = mv.card;
        let Some(from) = state.position(card) else {
            warn!(%card, "apply on unindexed card");
            return;
        };

        match from.location {
            Location::Cascade => {
                let popped = state.cascade_mut(from.index).pop();
                debug_assert_eq!(popped, Some(card));
            }
            Location::Open => {
                let removed = state.open_mut().remove(card);
                debug_assert!(removed);
            }
            Location::Foundation => {
                warn!(%card, "apply on a card already home");
                return;
            }
        }

        let to = match mv.dest {
            Destination::Foundation => {
                state.foundation_mut(card.suit()).push(card);
                Position::foundation(card.suit() as usize)
            }
            Destination::Open => {
                state.open_mut().insert(card);
                Position::open()
            }
            Destination::Cascade(index) => {
                let cascade = state.cascade_mut(index);
                cascade.push(card);
                Position::cascade(index, cascade.len() - 1)
            }
        };

        state.relocate(card, to);
        debug!(%card, %from, %to, "moved");
    }

    fn is_won(&self, state: &GameState) -> bool {
        win::is_won(state.cascades())
    }
}
