//! Plain-text board rendering.
//!
//! ```text
//!
//! hand 1 step 1
//! open: 3D
//! done: -- -- -- --
//! REPLAY 3D O
//!
//! JD 2D 9H JC 5D 7H 7C 5H
//! KD KC 9S 5S AD QC KH 3H
//! ...
//! ```
//!
//! Cascades are printed row by row from the bottom card up, so each column
//! on screen is one cascade.

use std::fmt;

use crate::core::state::GameState;

/// Display adapter for a game board.
pub struct Board<'a>(pub &'a GameState);

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f)?;
        writeln!(f, "hand {} step {}", state.seed(), state.move_count())?;

        f.write_str("open:")?;
        for card in state.open_cells().cards() {
            write!(f, " {}", card)?;
        }
        writeln!(f)?;

        f.write_str("done:")?;
        for top in state.foundation_tops() {
            match top {
                Some(card) => write!(f, " {}", card)?,
                None => f.write_str(" --")?,
            }
        }
        writeln!(f)?;

        writeln!(f, "{}", state.log_line())?;
        writeln!(f)?;

        let height = state.cascades().iter().map(|c| c.len()).max().unwrap_or(0);
        for depth in 0..height {
            let row: Vec<String> = state
                .cascades()
                .iter()
                .map(|c| c.cards().get(depth).map_or_else(|| "  ".to_string(), |card| card.to_string()))
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }

        Ok(())
    }
}

/// Render a board to a string.
#[must_use]
pub fn render(state: &GameState) -> String {
    Board(state).to_string()
}
