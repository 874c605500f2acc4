//! Rules engine trait.
//!
//! Every move goes through two phases:
//! - `validate`: a pure check against the current state
//! - `apply`: mutate containers and index, only after `validate` passed
//!
//! `play` chains both and appends the accepted command to the move log.
//! Rejected moves are never logged and never mutate state.

use tracing::trace;

use crate::core::action::Move;
use crate::core::error::MoveError;
use crate::core::state::GameState;

/// Rules for one solitaire variant.
///
/// ## Implementation Notes
///
/// - `validate` must not mutate anything
/// - `apply` may assume `validate` returned `Ok` for the same state
/// - both must be deterministic, since undo relies on replaying the log
pub trait RulesEngine {
    /// Check whether `mv` is legal in `state`.
    fn validate(&self, state: &GameState, mv: &Move) -> Result<(), MoveError>;

    /// Carry out a validated move.
    fn apply(&self, state: &mut GameState, mv: &Move);

    /// Is the game complete?
    fn is_won(&self, state: &GameState) -> bool;

    // === Convenience Methods ===

    /// Validate, apply and log `mv` under the command text `command`.
    fn play(&self, state: &mut GameState, mv: &Move, command: &str) -> Result<(), MoveError> {
        if let Err(err) = self.validate(state, mv) {
            trace!(%mv, %err, "move rejected");
            return Err(err);
        }

        self.apply(state, mv);
        state.record(command);
        Ok(())
    }
}
