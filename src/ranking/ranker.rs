//! Gain computation and ranking of base moves.

use std::cmp::Reverse;

use tracing::debug;

use crate::distance::CostEvaluator;
use crate::error::{KmoveError, Result};
use crate::models::{BaseMove, RankedMove};

/// Gain of a single move: `cost(removed) - cost(added)`.
pub fn move_gain(eval: &CostEvaluator<'_>, mv: &BaseMove) -> Result<i64> {
    let removed = eval.edge_set_cost(mv.removed())?;
    let added = eval.edge_set_cost(mv.added())?;
    removed.checked_sub(added).ok_or_else(|| {
        KmoveError::CostOverflow(format!("gain {removed} - {added} exceeds i64"))
    })
}

/// Annotates every base move with its gain and sorts by gain descending.
///
/// Moves with equal gain keep their input order, so the result is fully
/// determined by the input. Fails before producing anything if a move is
/// unbalanced or references a node outside the instance.
///
/// # Examples
///
/// ```
/// use u_kmove::models::{Edge, KMove, Point};
/// use u_kmove::distance::CostEvaluator;
/// use u_kmove::ranking::rank_moves;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(2.0, 0.0),
/// ];
/// let moves = vec![
///     KMove::new(vec![Edge::new(1, 3)], vec![Edge::new(1, 2)]), // 2 - 5 = -3
///     KMove::new(vec![Edge::new(1, 2)], vec![Edge::new(1, 3)]), // 5 - 2 = 3
/// ];
/// let ranked = rank_moves(&CostEvaluator::new(&points), &moves).unwrap();
/// assert_eq!(ranked[0].gain, 3);
/// assert_eq!(ranked[0].position, 1);
/// assert_eq!(ranked[1].gain, -3);
/// ```
pub fn rank_moves<'m>(
    eval: &CostEvaluator<'_>,
    moves: &'m [BaseMove],
) -> Result<Vec<RankedMove<'m>>> {
    let mut ranked = Vec::with_capacity(moves.len());

    for (position, mv) in moves.iter().enumerate() {
        if !mv.is_balanced() {
            return Err(KmoveError::UnbalancedMove {
                index: position,
                removed: mv.removed().len(),
                added: mv.added().len(),
            });
        }
        let gain = move_gain(eval, mv)?;
        ranked.push(RankedMove {
            base: mv,
            gain,
            position,
        });
    }

    // Stable: ties stay in input order.
    ranked.sort_by_key(|r| Reverse(r.gain));

    if let (Some(first), Some(last)) = (ranked.first(), ranked.last()) {
        debug!(
            moves = ranked.len(),
            best_gain = first.gain,
            worst_gain = last.gain,
            "ranked base moves"
        );
    }

    Ok(ranked)
}
