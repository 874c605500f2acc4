//! Command-line parsing.
//!
//! Input is upper-cased and split on whitespace. The first word is checked
//! against the meta-commands (`QUIT`, `REPLAY`, `UNDO`, `ZAP`) as a prefix,
//! so `Q`, `QU` and `QUIT` are all the same command. Anything else is a move:
//!
//! ```text
//! <CARD> <DEST> [<CASCADE_INDEX>]
//! ```
//!
//! where DEST is a prefix of `FOUNDATION`, `OPEN` or `CASCADE`, and the index
//! (0-7) is required for `CASCADE` only.
//!
//! ```
//! use freecell_engine::session::Command;
//!
//! let cmd = Command::parse("ac fou").unwrap();
//! assert!(matches!(cmd, Command::Play { ref text, .. } if text == "AC FOU"));
//!
//! assert_eq!(Command::parse("u").unwrap(), Command::Undo);
//! ```

use crate::core::action::{Destination, Move};
use crate::core::card::Card;
use crate::core::deal::N_CASCADES;
use crate::core::error::MoveError;

const QUIT: &str = "QUIT";
const REPLAY: &str = "REPLAY";
const UNDO: &str = "UNDO";
const ZAP: &str = "ZAP";

const FOUNDATION: &str = "FOUNDATION";
const OPEN: &str = "OPEN";
const CASCADE: &str = "CASCADE";

/// One parsed line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Blank line.
    Empty,
    /// End the session.
    Quit,
    /// Replay `;`-separated moves.
    Replay(String),
    /// Take back the last move.
    Undo,
    /// Restart the deal and drop the history.
    Zap,
    /// A move, with its normalized text for the log.
    Play { mv: Move, text: String },
}

/// Is `token` a non-empty prefix of `word`?
fn abbreviates(token: &str, word: &str) -> bool {
    !token.is_empty() && word.starts_with(token)
}

impl Command {
    /// Parse one line of input.
    pub fn parse(line: &str) -> Result<Self, MoveError> {
        let upper = line.to_uppercase();
        let tokens: Vec<&str> = upper.split_whitespace().collect();

        let Some(&first) = tokens.first() else {
            return Ok(Command::Empty);
        };

        if abbreviates(first, QUIT) {
            return Ok(Command::Quit);
        }
        if abbreviates(first, REPLAY) {
            return Ok(Command::Replay(tokens[1..].join(" ")));
        }
        if abbreviates(first, UNDO) {
            return Ok(Command::Undo);
        }
        if abbreviates(first, ZAP) {
            return Ok(Command::Zap);
        }

        let text = tokens.join(" ");
        let card: Option<Card> = first.parse().ok();

        let Some(&dest) = tokens.get(1) else {
            return Err(match card {
                Some(_) => MoveError::Malformed(text),
                None => MoveError::UnrecognizedCommand(first.to_string()),
            });
        };
        let card = card.ok_or_else(|| MoveError::UnknownCard(first.to_string()))?;

        let dest = if abbreviates(dest, FOUNDATION) {
            Destination::Foundation
        } else if abbreviates(dest, OPEN) {
            Destination::Open
        } else if abbreviates(dest, CASCADE) {
            let index = tokens
                .get(2)
                .and_then(|t| t.parse::<usize>().ok())
                .filter(|&i| i < N_CASCADES)
                .ok_or_else(|| MoveError::Malformed(text.clone()))?;
            Destination::Cascade(index)
        } else {
            return Err(MoveError::UnrecognizedCommand(dest.to_string()));
        };

        Ok(Command::Play {
            mv: Move::new(card, dest),
            text,
        })
    }
}
