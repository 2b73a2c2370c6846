//! # u-kmove
//!
//! Combines disjoint TSP k-opt moves into larger moves that still shorten
//! the tour. Base moves are ranked by gain and a pruned backtracking search
//! enumerates subsets whose running gain stays positive and whose summed
//! size reaches a minimum `kmin`.
//!
//! Combined moves are not checked for tour consistency: applying one may
//! split the tour into several cycles.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Point, Edge, KMove, RankedMove, CombinedMove)
//! - [`distance`]: Rounded Euclidean edge costs
//! - [`ranking`]: Per-move gains and gain-descending order
//! - [`search`]: Pruned combination search
//! - [`assemble`]: Combination to edge-swap move conversion
//! - [`pipeline`]: End-to-end entry point
//! - [`io`]: TSPLIB and JSON move-file adapters
//! - [`error`]: Error type

pub mod assemble;
pub mod distance;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod ranking;
pub mod search;

pub use error::{KmoveError, Result};
pub use pipeline::{combine, combine_moves, CombineOutcome};
