//! Text commands and the session that runs them.

pub mod command;
pub mod game;

pub use command::Command;
pub use game::{Outcome, ReplayFailure, ReplayReport, Session};
