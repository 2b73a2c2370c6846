//! Domain model types for k-move combination.
//!
//! Provides instance points, tour edges, k-moves (used both for base moves
//! read from disk and for assembled output), gain-annotated ranked moves and
//! recorded index combinations.

mod moves;
mod point;

pub use moves::{BaseMove, CombinedMove, KMove, OutputMove, RankedMove};
pub use point::{Edge, Point};
