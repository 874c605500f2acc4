//! Win detection.
//!
//! Each cascade is walked bottom to top. The previous rank starts just above
//! a king, and each card contributes `gradient = previous - rank`. The game
//! is won when no gradient anywhere is negative, i.e. every cascade is
//! rank-descending. Colour and suit are ignored. An empty board is won.

use std::fmt;

use tracing::debug;

use crate::core::card::{Card, N_RANKS};
use crate::zones::Cascade;

/// One rank above the highest.
const ABOVE_MAX_RANK: i8 = N_RANKS as i8;

/// Per-card gradients of one cascade, bottom to top.
#[must_use]
pub fn gradients(cascade: &Cascade) -> Vec<(Card, i8)> {
    let mut previous = ABOVE_MAX_RANK;
    cascade
        .cards()
        .iter()
        .map(|&card| {
            let rank = card.rank() as i8;
            let gradient = previous - rank;
            previous = rank;
            (card, gradient)
        })
        .collect()
}

/// Is every cascade rank-descending from bottom to top?
#[must_use]
pub fn is_won(cascades: &[Cascade]) -> bool {
    cascades
        .iter()
        .all(|c| gradients(c).iter().all(|&(_, g)| g >= 0))
}

/// Win check with its per-cascade trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinReport {
    pub won: bool,
    pub gradients: Vec<Vec<(Card, i8)>>,
}

impl WinReport {
    #[must_use]
    pub fn new(cascades: &[Cascade]) -> Self {
        let gradients: Vec<_> = cascades.iter().map(gradients).collect();
        let won = gradients.iter().flatten().all(|&(_, g)| g >= 0);
        Self { won, gradients }
    }

    /// Log the trace at DEBUG, one line per cascade.
    pub fn trace(&self) {
        for (i, cascade) in self.gradients.iter().enumerate() {
            debug!(cascade = i, "{}", CascadeTrace(cascade));
        }
    }
}

struct CascadeTrace<'a>(&'a [(Card, i8)]);

impl fmt::Display for CascadeTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (card, gradient)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", card, gradient)?;
        }
        f.write_str("]")
    }
}
