//! Point and edge types.

use serde::{Deserialize, Serialize};

/// A 2D node coordinate of a TSP instance.
///
/// Instances store points in node order; node id `k` (1-based, as used in
/// TSPLIB files and move lists) lives at slice index `k - 1`.
///
/// # Examples
///
/// ```
/// use u_kmove::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Unrounded Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An edge between two 1-based node ids.
///
/// Serialized as a two-element array `[a, b]`.
///
/// # Examples
///
/// ```
/// use u_kmove::models::Edge;
///
/// let e: Edge = serde_json::from_str("[3, 7]").unwrap();
/// assert_eq!(e, Edge::new(3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Edge {
    /// First endpoint.
    pub a: usize,
    /// Second endpoint.
    pub b: usize,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

impl From<[usize; 2]> for Edge {
    fn from([a, b]: [usize; 2]) -> Self {
        Self { a, b }
    }
}

impl From<Edge> for [usize; 2] {
    fn from(e: Edge) -> Self {
        [e.a, e.b]
    }
}
