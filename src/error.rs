//! Error types for k-move combination.

use std::time::Duration;

use thiserror::Error;

/// Main error type for u-kmove operations.
#[derive(Debug, Error)]
pub enum KmoveError {
    /// Underlying file I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Move file is not a valid JSON move list.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TSPLIB instance file.
    #[error("TSPLIB error at line {line}: {message}")]
    Tsplib {
        /// 1-based line number in the instance file (0 = end of input).
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// An edge references a node id outside `[1, nodes]`.
    #[error("node {node} out of range (instance has {nodes} nodes)")]
    NodeOutOfRange {
        /// Offending 1-based node id.
        node: usize,
        /// Number of nodes in the instance.
        nodes: usize,
    },

    /// A base move removes and adds a different number of edges.
    #[error("move {index} is unbalanced: {removed} edges removed, {added} added")]
    UnbalancedMove {
        /// Position of the move in the input list.
        index: usize,
        /// Number of removed edges.
        removed: usize,
        /// Number of added edges.
        added: usize,
    },

    /// A cost or gain does not fit in an `i64`.
    #[error("cost overflow: {0}")]
    CostOverflow(String),

    /// Minimum combined size must be a positive integer.
    #[error("invalid minimum k: {0} (must be >= 1)")]
    InvalidKmin(i64),

    /// Search stopped because a configured call or time budget ran out.
    #[error("search budget exceeded after {calls} calls ({elapsed:?} elapsed)")]
    SearchBudgetExceeded {
        /// Calls expanded before stopping.
        calls: u64,
        /// Wall time spent in the search.
        elapsed: Duration,
    },

    /// An assembled combination ended up with unequal removed/added lists.
    #[error(
        "combination {combination:?} assembled {removed} removed vs {added} added edges"
    )]
    AssemblyMismatch {
        /// Ranked indices of the offending combination.
        combination: Vec<usize>,
        /// Total removed edges.
        removed: usize,
        /// Total added edges.
        added: usize,
    },
}

/// Result type alias for u-kmove operations.
pub type Result<T> = std::result::Result<T, KmoveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_node_out_of_range() {
        let e = KmoveError::NodeOutOfRange { node: 7, nodes: 4 };
        assert_eq!(e.to_string(), "node 7 out of range (instance has 4 nodes)");
    }

    #[test]
    fn test_display_assembly_mismatch_names_combination() {
        let e = KmoveError::AssemblyMismatch {
            combination: vec![0, 2],
            removed: 3,
            added: 2,
        };
        assert!(e.to_string().contains("[0, 2]"));
    }

    #[test]
    fn test_display_cost_overflow() {
        let e = KmoveError::CostOverflow("edge (1, 2)".into());
        assert_eq!(e.to_string(), "cost overflow: edge (1, 2)");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: KmoveError = io.into();
        assert!(matches!(e, KmoveError::Io(_)));
    }
}
