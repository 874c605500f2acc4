//! A playable session: one game plus its log-driven operations.
//!
//! The session is the single entry point for text commands. Moves go
//! through `FreeCellRules`; undo, zap and replay are built on the move log:
//!
//! - **Replay**: each `;`-separated entry is submitted like typed input.
//!   Failures are collected and the remaining entries still run.
//! - **Undo**: drop the last log entry, re-deal, replay the rest.
//! - **Zap**: re-deal, drop the whole log.
//!
//! Undo never computes an inverse move; it only ever re-runs forward moves,
//! so an undone state is always one the forward rules can produce.
//!
//! ```
//! use freecell_engine::session::{Outcome, Session};
//!
//! let mut session = Session::new(1);
//! session.execute("3d o").unwrap();
//! session.execute("2c o").unwrap();
//! assert_eq!(session.state().move_count(), 2);
//!
//! assert_eq!(session.execute("undo").unwrap(), Outcome::Undone);
//! assert_eq!(session.state().log_line(), "REPLAY 3D O");
//! ```

use tracing::{debug, warn};

use super::command::Command;
use crate::core::action::Move;
use crate::core::config::GameConfig;
use crate::core::error::MoveError;
use crate::core::state::GameState;
use crate::rules::{FreeCellRules, RulesEngine, WinReport};

/// What a successfully executed command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing happened.
    Idle,
    /// A move was applied and logged.
    Played(Move),
    /// A replay ran; see the report for per-entry failures.
    Replayed(ReplayReport),
    /// The last move was taken back.
    Undone,
    /// Undo with an empty log.
    NothingToUndo,
    /// The deal was restarted.
    Zapped,
    /// The caller should end the session.
    Quit,
}

/// An entry a replay could not apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayFailure {
    pub entry: String,
    pub error: MoveError,
}

/// Result of replaying a list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Entries applied successfully.
    pub applied: usize,
    /// Entries rejected, in order.
    pub failures: Vec<ReplayFailure>,
}

impl ReplayReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One game driven by commands.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    rules: FreeCellRules,
    config: GameConfig,
}

impl Session {
    /// Start a new game from `seed` with default settings.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self::with_config(GameConfig::default().with_seed(seed))
    }

    /// Start a new game from a configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config.seed),
            rules: FreeCellRules::new(),
            config,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Run one line of input.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, MoveError> {
        match Command::parse(line)? {
            Command::Empty => Ok(Outcome::Idle),
            Command::Quit => Ok(Outcome::Quit),
            Command::Replay(moves) => Ok(Outcome::Replayed(self.replay(&moves))),
            Command::Undo => Ok(if self.undo() {
                Outcome::Undone
            } else {
                Outcome::NothingToUndo
            }),
            Command::Zap => {
                self.zap();
                Ok(Outcome::Zapped)
            }
            Command::Play { mv, text } => {
                self.rules.play(&mut self.state, &mv, &text)?;
                Ok(Outcome::Played(mv))
            }
        }
    }

    /// Apply a typed move, logging its canonical text.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.rules.play(&mut self.state, &mv, &mv.to_string())
    }

    /// Apply `;`-separated moves in order. Blank entries are skipped;
    /// commands other than moves are reported as malformed.
    pub fn replay(&mut self, moves: &str) -> ReplayReport {
        self.replay_entries(moves.split(';'))
    }

    fn replay_entries<'a>(&mut self, entries: impl IntoIterator<Item = &'a str>) -> ReplayReport {
        let mut report = ReplayReport::default();

        for entry in entries {
            let result = match Command::parse(entry) {
                Ok(Command::Empty) => continue,
                Ok(Command::Play { mv, text }) => self.rules.play(&mut self.state, &mv, &text),
                Ok(_) => Err(MoveError::Malformed(entry.trim().to_string())),
                Err(err) => Err(err),
            };

            match result {
                Ok(()) => report.applied += 1,
                Err(error) => report.failures.push(ReplayFailure {
                    entry: entry.trim().to_string(),
                    error,
                }),
            }
        }

        report
    }

    /// Take back the last move by re-dealing and replaying all but it.
    ///
    /// Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let mut history = self.state.log().clone();
        if history.pop_back().is_none() {
            return false;
        }

        self.state.reset(self.state.seed());
        let report = self.replay_entries(history.iter().map(String::as_str));
        if !report.is_clean() {
            warn!(failures = ?report.failures, "history did not replay cleanly");
        }
        debug!(moves = self.state.move_count(), "undone");
        true
    }

    /// Restart the current deal and drop the history.
    pub fn zap(&mut self) {
        let seed = self.state.seed();
        self.state.reset(seed);
    }

    /// Start over on a different deal.
    pub fn redeal(&mut self, seed: i64) {
        self.config.seed = seed;
        self.state.reset(seed);
    }

    /// Is the game won? Emits the gradient trace if configured.
    #[must_use]
    pub fn is_won(&self) -> bool {
        if self.config.trace_win {
            let report = WinReport::new(self.state.cascades());
            report.trace();
            report.won
        } else {
            self.rules.is_won(&self.state)
        }
    }
}
