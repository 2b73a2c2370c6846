//! Search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{KmoveError, Result};

/// How the combination search walks the decision tree.
///
/// Both strategies visit the same nodes in the same order and produce
/// identical results and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Depth-first recursion; stack depth grows with the number of moves.
    #[default]
    Recursive,
    /// Iterative traversal with a heap-allocated frame stack.
    ExplicitStack,
}

/// Configuration for the combination search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_kmove::search::{SearchConfig, Strategy};
///
/// let config = SearchConfig::new(4)
///     .with_strategy(Strategy::ExplicitStack)
///     .with_max_calls(1_000_000)
///     .with_time_limit(Duration::from_secs(10));
/// assert_eq!(config.kmin, 4);
/// assert!(config.validate().is_ok());
/// assert!(SearchConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum summed move size for a combination to be recorded.
    pub kmin: usize,

    /// Traversal strategy.
    #[serde(default)]
    pub strategy: Strategy,

    /// Abort once more than this many calls have been expanded.
    #[serde(default)]
    pub max_calls: Option<u64>,

    /// Abort once the search has run longer than this.
    #[serde(default)]
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    /// Creates an unbounded recursive search for the given minimum size.
    pub fn new(kmin: usize) -> Self {
        Self {
            kmin,
            strategy: Strategy::default(),
            max_calls: None,
            time_limit: None,
        }
    }

    /// Sets the traversal strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the maximum number of expanded calls.
    pub fn with_max_calls(mut self, max_calls: u64) -> Self {
        self.max_calls = Some(max_calls);
        self
    }

    /// Sets a wall-clock limit for the search.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Checks that the configuration can drive a search.
    pub fn validate(&self) -> Result<()> {
        if self.kmin == 0 {
            return Err(KmoveError::InvalidKmin(0));
        }
        Ok(())
    }
}
