//! Combination search over ranked base moves.
//!
//! - [`search_combinations`]: Pruned include/exclude enumeration
//! - [`SearchConfig`]: Minimum size, traversal strategy and budgets

mod combination;
mod config;

pub use combination::{search_combinations, SearchOutcome, SearchStats};
pub use config::{SearchConfig, Strategy};
