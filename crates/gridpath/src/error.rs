//! Error types for grid construction and path searches.
//!
//! "No path" is not an error: searches return `Ok(None)` when the target is
//! unreachable.

use std::time::Duration;

use gridpath_core::{Point, Range};
use thiserror::Error;

/// Result type alias for pathfinding operations.
pub type PathResult<T> = Result<T, PathError>;

/// Errors that can occur while building a grid or running a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// World size, origin or node radius cannot produce a lattice.
    #[error("invalid grid geometry: {0}")]
    InvalidGeometry(String),

    /// A lattice coordinate outside the grid was passed to a cell-based query.
    #[error("cell {cell} lies outside grid bounds {bounds}")]
    OutOfBounds { cell: Point, bounds: Range },

    /// The pathfinder's scratch space holds a different number of nodes than
    /// the grid. Grids of any shape with the same node count are accepted.
    #[error("pathfinder sized for {expected} nodes cannot search a grid of {found} nodes")]
    GridMismatch { expected: usize, found: usize },

    /// The configured expansion budget ran out before the search finished.
    #[error("search expanded {expanded} nodes, reaching the limit of {limit}")]
    ExpansionLimit { limit: usize, expanded: usize },

    /// The configured wall-clock budget ran out before the search finished.
    #[error("search timed out after {elapsed:?} with {expanded} nodes expanded")]
    Timeout { elapsed: Duration, expanded: usize },

    /// Parent links from the target never led back to the start.
    #[error("parent chain from {target} did not reach {start} within {hops} hops")]
    MalformedPath {
        start: Point,
        target: Point,
        hops: usize,
    },
}

impl PathError {
    /// Create an invalid geometry error.
    #[must_use]
    pub fn invalid_geometry(details: impl Into<String>) -> Self {
        Self::InvalidGeometry(details.into())
    }

    /// Whether the error came from a search budget rather than a fault.
    #[must_use]
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::ExpansionLimit { .. } | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PathError::invalid_geometry("node radius must be positive");
        assert!(format!("{err}").contains("node radius must be positive"));

        let err = PathError::OutOfBounds {
            cell: Point::new(12, 3),
            bounds: Range::with_size(10, 10),
        };
        assert!(format!("{err}").contains("(12, 3)"));

        let err = PathError::MalformedPath {
            start: Point::ZERO,
            target: Point::new(4, 4),
            hops: 25,
        };
        assert!(format!("{err}").contains("25 hops"));
    }

    #[test]
    fn limit_classification() {
        assert!(
            PathError::ExpansionLimit {
                limit: 10,
                expanded: 10
            }
            .is_limit()
        );
        assert!(
            PathError::Timeout {
                elapsed: Duration::from_millis(5),
                expanded: 3
            }
            .is_limit()
        );
        assert!(!PathError::invalid_geometry("x").is_limit());
    }
}
