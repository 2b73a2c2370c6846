//! Edge cost evaluation.
//!
//! Provides rounded Euclidean costs for edges and edge sets of a TSP
//! instance.

mod cost;

pub use cost::CostEvaluator;
