//! Card containers and location tracking.
//!
//! ## Key Types
//!
//! - `Cascade`, `OpenCells`, `Foundation`: the three kinds of container
//! - `Position` / `Location`: where a card is
//! - `PositionIndex`: card to position, O(1) lookup
//! - `SuitLinks`: per-suit deal-order threads (diagnostic view)

pub mod index;
pub mod links;
pub mod piles;
pub mod position;

pub use index::PositionIndex;
pub use links::{SuitIter, SuitLinks};
pub use piles::{Cascade, Foundation, OpenCells, N_OPEN};
pub use position::{Location, Position};
