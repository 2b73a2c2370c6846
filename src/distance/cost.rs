//! Rounded Euclidean edge costs.

use crate::error::{KmoveError, Result};
use crate::models::{Edge, Point};

/// Computes TSPLIB-style rounded Euclidean costs over a point set.
///
/// Distances are rounded to the nearest integer with ties going to the even
/// neighbour (`2.5 -> 2`, `3.5 -> 4`). Node ids are 1-based.
///
/// # Examples
///
/// ```
/// use u_kmove::models::{Edge, Point};
/// use u_kmove::distance::CostEvaluator;
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
/// let eval = CostEvaluator::new(&points);
/// assert_eq!(eval.distance(1, 2).unwrap(), 5);
/// assert_eq!(eval.edge_set_cost(&[Edge::new(1, 2), Edge::new(1, 3)]).unwrap(), 15);
/// assert!(eval.distance(0, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostEvaluator<'a> {
    points: &'a [Point],
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator over the given points.
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }

    /// Number of nodes in the instance.
    pub fn num_nodes(&self) -> usize {
        self.points.len()
    }

    /// Rounded distance between 1-based nodes `i` and `j`.
    ///
    /// Fails with [`KmoveError::NodeOutOfRange`] if either id falls outside
    /// `[1, num_nodes]`, and with [`KmoveError::CostOverflow`] if the rounded
    /// distance does not fit in an `i64`.
    pub fn distance(&self, i: usize, j: usize) -> Result<i64> {
        let a = self.point(i)?;
        let b = self.point(j)?;
        let d = a.distance_to(b).round_ties_even();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if !d.is_finite() || d >= i64::MAX as f64 {
            return Err(KmoveError::CostOverflow(format!(
                "edge ({i}, {j}) has length {d}"
            )));
        }
        Ok(d as i64)
    }

    /// Cost of a single edge.
    pub fn edge_cost(&self, edge: Edge) -> Result<i64> {
        self.distance(edge.a, edge.b)
    }

    /// Summed cost of an edge set. Empty sets cost 0.
    pub fn edge_set_cost(&self, edges: &[Edge]) -> Result<i64> {
        edges.iter().try_fold(0i64, |total, &e| {
            total.checked_add(self.edge_cost(e)?).ok_or_else(|| {
                KmoveError::CostOverflow(format!("edge set cost exceeds i64 at edge {e:?}"))
            })
        })
    }

    fn point(&self, node: usize) -> Result<&'a Point> {
        node.checked_sub(1)
            .and_then(|idx| self.points.get(idx))
            .ok_or(KmoveError::NodeOutOfRange {
                node,
                nodes: self.points.len(),
            })
    }
}
