//! Persisted game records.
//!
//! A game is fully described by its seed and its move log. The canonical
//! text form of the log is a single replay command:
//!
//! ```text
//! REPLAY 3D O; 2C O; AC F
//! ```
//!
//! Feeding that line to a fresh session on the same seed rebuilds the exact
//! state. `GameRecord` also has a compact binary form for storage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::GameConfig;
use crate::core::state::GameState;
use crate::session::{ReplayReport, Session};

const REPLAY: &str = "REPLAY";

/// Format moves as a `REPLAY m1; m2; ...` line.
pub fn format_log_line<'a>(moves: impl IntoIterator<Item = &'a str>) -> String {
    let joined = moves.into_iter().collect::<Vec<_>>().join("; ");
    if joined.is_empty() {
        REPLAY.to_string()
    } else {
        format!("{} {}", REPLAY, joined)
    }
}

/// Failure to read a stored record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("not a replay line: {0}")]
    NotReplay(String),

    #[error("record encoding: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Seed plus accepted moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: i64,
    pub moves: Vec<String>,
}

impl GameRecord {
    /// Capture a game's seed and log.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            seed: state.seed(),
            moves: state.log().iter().cloned().collect(),
        }
    }

    /// Parse a `REPLAY ...` line. The command word may be abbreviated and
    /// any case; moves are normalized the way the session logs them.
    pub fn from_log_line(seed: i64, line: &str) -> Result<Self, RecordError> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let word = word.to_uppercase();
        if word.is_empty() || !REPLAY.starts_with(&word) {
            return Err(RecordError::NotReplay(line.to_string()));
        }

        let moves = rest
            .split(';')
            .map(|m| m.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase())
            .filter(|m| !m.is_empty())
            .collect();

        Ok(Self { seed, moves })
    }

    #[must_use]
    pub fn to_log_line(&self) -> String {
        format_log_line(self.moves.iter().map(String::as_str))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Deal the record's seed and replay its moves.
    #[must_use]
    pub fn restore(&self, config: GameConfig) -> (Session, ReplayReport) {
        let mut session = Session::with_config(config.with_seed(self.seed));
        let report = session.replay(&self.moves.join(";"));
        (session, report)
    }
}
