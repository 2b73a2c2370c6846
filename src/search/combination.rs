//! Pruned enumeration of gainful move combinations.
//!
//! # Algorithm
//!
//! Walks a binary decision tree over the ranked moves: at depth `i` the
//! search first includes move `i` and explores everything below, then
//! backtracks and explores the same depth without it. A running
//! `(gain, size, path)` accumulator is shared by the whole tree and updated
//! with strict push/pop discipline.
//!
//! A call at depth `i` is cut entirely, both branches, when
//!
//! ```text
//! gain + ranked[i].gain <= 0
//! ```
//!
//! Moves are sorted by gain descending, so `ranked[i].gain` is the best
//! single gain still available. The bound does not account for several
//! smaller remaining gains adding up, so some deeper positive combinations
//! are never reached. Reported combinations and call counts depend on this
//! exact rule.
//!
//! Whenever an inclusion brings the running size to at least `kmin`, a
//! snapshot of the accumulator is recorded.
//!
//! # Complexity
//!
//! O(2^n) calls in the worst case; stack depth O(n) for the recursive
//! strategy.

use std::time::{Duration, Instant};

use tracing::trace;

use super::config::{SearchConfig, Strategy};
use crate::error::{KmoveError, Result};
use crate::models::{CombinedMove, RankedMove};

/// Counters collected during a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Calls that passed the terminal and pruning checks.
    pub calls: u64,
    /// Calls cut by the pruning bound.
    pub pruned: u64,
    /// Combinations recorded.
    pub recorded: usize,
}

/// Result of a combination search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchOutcome {
    /// Recorded combinations in discovery order.
    pub combinations: Vec<CombinedMove>,
    /// Search counters.
    pub stats: SearchStats,
}

/// Enumerates combinations of ranked moves whose running gain stays positive
/// and whose summed size reaches `config.kmin`.
///
/// `ranked` must be sorted by gain descending (see
/// [`rank_moves`](crate::ranking::rank_moves)); the pruning bound is only
/// meaningful under that order.
///
/// # Errors
///
/// - [`KmoveError::InvalidKmin`] if `config.kmin == 0`.
/// - [`KmoveError::SearchBudgetExceeded`] if a configured call or time
///   budget runs out.
///
/// # Examples
///
/// ```
/// use u_kmove::models::{Edge, KMove, RankedMove};
/// use u_kmove::search::{search_combinations, SearchConfig};
///
/// let a = KMove::new(vec![Edge::new(1, 2)], vec![Edge::new(1, 3)]);
/// let b = KMove::new(vec![Edge::new(4, 5)], vec![Edge::new(4, 6)]);
/// let ranked = vec![
///     RankedMove { base: &a, gain: 3, position: 0 },
///     RankedMove { base: &b, gain: 2, position: 1 },
/// ];
///
/// let outcome = search_combinations(&ranked, &SearchConfig::new(2)).unwrap();
/// assert_eq!(outcome.combinations.len(), 1);
/// assert_eq!(outcome.combinations[0].indices, vec![0, 1]);
/// assert_eq!(outcome.combinations[0].gain, 5);
/// assert_eq!(outcome.stats.calls, 3);
/// ```
pub fn search_combinations(
    ranked: &[RankedMove<'_>],
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    config.validate()?;

    let mut search = CombinationSearch::new(ranked, config);
    match config.strategy {
        Strategy::Recursive => search.discover(0)?,
        Strategy::ExplicitStack => search.discover_iterative()?,
    }
    Ok(search.finish())
}

/// Frames of the explicit-stack traversal.
enum Frame {
    /// Evaluate the call at this depth.
    Enter(usize),
    /// Include branch at this depth is done: undo, then take exclude branch.
    Backtrack(usize),
}

struct CombinationSearch<'r, 'm> {
    ranked: &'r [RankedMove<'m>],
    kmin: usize,
    max_calls: Option<u64>,
    time_limit: Option<Duration>,
    started: Instant,
    current: CombinedMove,
    found: Vec<CombinedMove>,
    stats: SearchStats,
}

impl<'r, 'm> CombinationSearch<'r, 'm> {
    fn new(ranked: &'r [RankedMove<'m>], config: &SearchConfig) -> Self {
        Self {
            ranked,
            kmin: config.kmin,
            max_calls: config.max_calls,
            time_limit: config.time_limit,
            started: Instant::now(),
            current: CombinedMove::default(),
            found: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn finish(self) -> SearchOutcome {
        SearchOutcome {
            combinations: self.found,
            stats: self.stats,
        }
    }

    /// Terminal and pruning checks for the call at depth `i`.
    ///
    /// Returns `true` if the call survives and should expand both branches.
    fn admit(&mut self, i: usize) -> Result<bool> {
        let Some(candidate) = self.ranked.get(i) else {
            return Ok(false);
        };
        let reachable = self.current.gain.checked_add(candidate.gain).ok_or_else(|| {
            KmoveError::CostOverflow(format!(
                "running gain {} + {} at index {i} exceeds i64",
                self.current.gain, candidate.gain
            ))
        })?;
        if reachable <= 0 {
            self.stats.pruned += 1;
            return Ok(false);
        }
        self.stats.calls += 1;
        self.check_budget()?;
        Ok(true)
    }

    fn check_budget(&self) -> Result<()> {
        let over_calls = self.max_calls.is_some_and(|max| self.stats.calls > max);
        let elapsed = self.started.elapsed();
        let over_time = self.time_limit.is_some_and(|limit| elapsed >= limit);
        if over_calls || over_time {
            return Err(KmoveError::SearchBudgetExceeded {
                calls: self.stats.calls,
                elapsed,
            });
        }
        Ok(())
    }

    /// Adds move `i` to the accumulator and records it if large enough.
    fn include(&mut self, i: usize) {
        let candidate = self.ranked[i];
        // Checked in admit.
        self.current.gain += candidate.gain;
        self.current.size += candidate.k();
        self.current.indices.push(i);

        trace!(
            index = i,
            gain = self.current.gain,
            size = self.current.size,
            "include"
        );

        if self.current.size >= self.kmin {
            self.found.push(self.current.clone());
            self.stats.recorded += 1;
        }
    }

    /// Reverts [`include`](Self::include) for move `i`.
    fn backtrack(&mut self, i: usize) {
        let candidate = self.ranked[i];
        self.current.gain -= candidate.gain;
        self.current.size -= candidate.k();
        self.current.indices.pop();
    }

    fn discover(&mut self, i: usize) -> Result<()> {
        if !self.admit(i)? {
            return Ok(());
        }

        self.include(i);
        self.discover(i + 1)?;
        self.backtrack(i);

        self.discover(i + 1)
    }

    fn discover_iterative(&mut self) -> Result<()> {
        let mut stack = vec![Frame::Enter(0)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(i) => {
                    if !self.admit(i)? {
                        continue;
                    }
                    self.include(i);
                    // LIFO: the include subtree runs before the backtrack.
                    stack.push(Frame::Backtrack(i));
                    stack.push(Frame::Enter(i + 1));
                }
                Frame::Backtrack(i) => {
                    self.backtrack(i);
                    stack.push(Frame::Enter(i + 1));
                }
            }
        }
        Ok(())
    }
}
