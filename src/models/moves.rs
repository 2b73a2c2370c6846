//! Move types: base k-moves, ranked moves and combinations.

use serde::{Deserialize, Serialize};

use super::Edge;

/// A k-move: a set of edges removed from the tour and an equally sized set
/// of edges added in their place.
///
/// Serialized as `[[removed edges], [added edges]]`, the same shape for
/// input base moves and assembled output moves.
///
/// # Examples
///
/// ```
/// use u_kmove::models::{Edge, KMove};
///
/// let m: KMove = serde_json::from_str("[[[1, 2], [3, 4]], [[1, 3], [2, 4]]]").unwrap();
/// assert_eq!(m.k(), 2);
/// assert!(m.is_balanced());
/// assert_eq!(m.added()[0], Edge::new(1, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "(Vec<Edge>, Vec<Edge>)",
    into = "(Vec<Edge>, Vec<Edge>)"
)]
pub struct KMove {
    removed: Vec<Edge>,
    added: Vec<Edge>,
}

/// A move as read from the upstream move file.
pub type BaseMove = KMove;

/// A combined move ready for serialization.
pub type OutputMove = KMove;

impl KMove {
    /// Creates a move from its removed and added edge lists.
    pub fn new(removed: Vec<Edge>, added: Vec<Edge>) -> Self {
        Self { removed, added }
    }

    /// Edges taken out of the tour.
    pub fn removed(&self) -> &[Edge] {
        &self.removed
    }

    /// Edges put into the tour.
    pub fn added(&self) -> &[Edge] {
        &self.added
    }

    /// Move size: the number of removed edges.
    pub fn k(&self) -> usize {
        self.removed.len()
    }

    /// Returns `true` if as many edges are added as removed.
    pub fn is_balanced(&self) -> bool {
        self.removed.len() == self.added.len()
    }

    /// Appends another move's edges to this one.
    pub fn extend_from(&mut self, other: &KMove) {
        self.removed.extend_from_slice(&other.removed);
        self.added.extend_from_slice(&other.added);
    }
}

impl From<(Vec<Edge>, Vec<Edge>)> for KMove {
    fn from((removed, added): (Vec<Edge>, Vec<Edge>)) -> Self {
        Self { removed, added }
    }
}

impl From<KMove> for (Vec<Edge>, Vec<Edge>) {
    fn from(m: KMove) -> Self {
        (m.removed, m.added)
    }
}

/// A base move annotated with its gain and its position in the input list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMove<'a> {
    /// The underlying move.
    pub base: &'a BaseMove,
    /// `cost(removed) - cost(added)`; positive shortens the tour.
    pub gain: i64,
    /// Index of the move in the input list.
    pub position: usize,
}

impl RankedMove<'_> {
    /// Move size (number of removed edges).
    pub fn k(&self) -> usize {
        self.base.k()
    }
}

/// A recorded combination of ranked moves.
///
/// `indices` is strictly increasing and refers to the ranked sequence the
/// search ran over; `gain` and `size` are the sums over those moves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombinedMove {
    /// Indices into the ranked sequence, strictly increasing.
    pub indices: Vec<usize>,
    /// Summed gain of the referenced moves.
    pub gain: i64,
    /// Summed size of the referenced moves.
    pub size: usize,
}

impl CombinedMove {
    /// Number of base moves combined.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no base move is referenced.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
