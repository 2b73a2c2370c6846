//! End-to-end combination of base moves.
//!
//! Wires cost evaluation, ranking, search and assembly together. Everything
//! here is pure: the same inputs always give the same output, in the same
//! order.

use tracing::info;

use crate::assemble::assemble_moves;
use crate::distance::CostEvaluator;
use crate::error::Result;
use crate::models::{BaseMove, CombinedMove, OutputMove, Point};
use crate::ranking::rank_moves;
use crate::search::{search_combinations, SearchConfig, SearchStats};

/// Everything a combination run produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CombineOutcome {
    /// Assembled moves, one per combination, in discovery order.
    pub moves: Vec<OutputMove>,
    /// The recorded combinations; indices refer to the ranked order.
    pub combinations: Vec<CombinedMove>,
    /// Input position of each ranked move (`ranked_positions[i]` is the
    /// input index of ranked move `i`).
    pub ranked_positions: Vec<usize>,
    /// Search counters.
    pub stats: SearchStats,
}

/// Ranks `base_moves`, searches gainful combinations and assembles them.
///
/// The configuration and every move are validated before the search
/// starts.
///
/// # Examples
///
/// ```
/// use u_kmove::models::{Edge, KMove, Point};
/// use u_kmove::pipeline::combine_moves;
/// use u_kmove::search::SearchConfig;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(2.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(0.0, 14.0),
///     Point::new(2.0, 10.0),
/// ];
/// let moves = vec![
///     KMove::new(vec![Edge::new(4, 5)], vec![Edge::new(4, 6)]), // 4 - 2 = 2
///     KMove::new(vec![Edge::new(1, 2)], vec![Edge::new(1, 3)]), // 5 - 2 = 3
/// ];
///
/// let outcome = combine_moves(&points, &moves, &SearchConfig::new(2)).unwrap();
/// assert_eq!(outcome.moves.len(), 1);
/// assert_eq!(outcome.combinations[0].gain, 5);
/// assert_eq!(outcome.moves[0].removed(), &[Edge::new(1, 2), Edge::new(4, 5)]);
/// ```
pub fn combine_moves(
    points: &[Point],
    base_moves: &[BaseMove],
    config: &SearchConfig,
) -> Result<CombineOutcome> {
    config.validate()?;

    let eval = CostEvaluator::new(points);
    let ranked = rank_moves(&eval, base_moves)?;
    info!(
        nodes = eval.num_nodes(),
        moves = ranked.len(),
        kmin = config.kmin,
        "searching move combinations"
    );

    let search = search_combinations(&ranked, config)?;
    let moves = assemble_moves(&ranked, &search.combinations)?;

    info!(
        combinations = moves.len(),
        calls = search.stats.calls,
        pruned = search.stats.pruned,
        "search finished"
    );

    Ok(CombineOutcome {
        moves,
        combinations: search.combinations,
        ranked_positions: ranked.iter().map(|r| r.position).collect(),
        stats: search.stats,
    })
}

/// Convenience form of [`combine_moves`] returning only the assembled moves
/// of an unbounded recursive search.
pub fn combine(points: &[Point], base_moves: &[BaseMove], kmin: usize) -> Result<Vec<OutputMove>> {
    Ok(combine_moves(points, base_moves, &SearchConfig::new(kmin))?.moves)
}
