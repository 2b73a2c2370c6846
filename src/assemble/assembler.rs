//! Conversion of recorded combinations into concrete edge-swap moves.

use crate::error::{KmoveError, Result};
use crate::models::{CombinedMove, OutputMove, RankedMove};

/// Concatenates the edge lists of the moves a combination references.
///
/// Edges appear in index order: all of `ranked[indices[0]]`'s edges, then
/// `ranked[indices[1]]`'s, and so on.
///
/// # Errors
///
/// [`KmoveError::AssemblyMismatch`] if the combined removed and added lists
/// differ in length, which only happens when an unbalanced move slipped past
/// validation.
///
/// # Panics
///
/// Panics if an index is outside `ranked`; combinations produced by
/// [`search_combinations`](crate::search::search_combinations) over the same
/// slice never are.
pub fn assemble_move(ranked: &[RankedMove<'_>], combination: &CombinedMove) -> Result<OutputMove> {
    let mut out = OutputMove::default();
    for &i in &combination.indices {
        out.extend_from(ranked[i].base);
    }

    if !out.is_balanced() {
        return Err(KmoveError::AssemblyMismatch {
            combination: combination.indices.clone(),
            removed: out.removed().len(),
            added: out.added().len(),
        });
    }
    Ok(out)
}

/// Assembles every recorded combination, failing on the first mismatch.
///
/// # Examples
///
/// ```
/// use u_kmove::models::{CombinedMove, Edge, KMove, RankedMove};
/// use u_kmove::assemble::assemble_moves;
///
/// let a = KMove::new(vec![Edge::new(1, 2)], vec![Edge::new(1, 3)]);
/// let b = KMove::new(vec![Edge::new(4, 5)], vec![Edge::new(4, 6)]);
/// let ranked = vec![
///     RankedMove { base: &a, gain: 3, position: 0 },
///     RankedMove { base: &b, gain: 2, position: 1 },
/// ];
/// let combo = CombinedMove { indices: vec![0, 1], gain: 5, size: 2 };
///
/// let out = assemble_moves(&ranked, &[combo]).unwrap();
/// assert_eq!(out[0].removed(), &[Edge::new(1, 2), Edge::new(4, 5)]);
/// assert_eq!(out[0].added(), &[Edge::new(1, 3), Edge::new(4, 6)]);
/// ```
pub fn assemble_moves(
    ranked: &[RankedMove<'_>],
    combinations: &[CombinedMove],
) -> Result<Vec<OutputMove>> {
    combinations
        .iter()
        .map(|c| assemble_move(ranked, c))
        .collect()
}
