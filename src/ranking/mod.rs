//! Base move ranking.
//!
//! Computes per-move gains and orders moves by gain descending, the order
//! the combination search's pruning bound relies on.

mod ranker;

pub use ranker::{move_gain, rank_moves};
