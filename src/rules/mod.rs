//! Move rules and win detection.
//!
//! `RulesEngine` is the validate/apply seam; `FreeCellRules` implements it
//! for standard FreeCell. `win` holds the completion check.

pub mod engine;
pub mod freecell;
pub mod win;

pub use engine::RulesEngine;
pub use freecell::FreeCellRules;
pub use win::WinReport;
