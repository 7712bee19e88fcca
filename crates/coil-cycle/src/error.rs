//! Error types for cycle construction and lookup.

use coil_grid::GridError;
use std::error::Error;
use std::fmt;

/// Errors from Hamiltonian cycle construction and cycle queries.
///
/// All construction errors are fatal to the call: nothing is retried
/// internally and no partial cycle is ever returned. Construction is
/// deterministic per seed, so retrying with the same seed reproduces the
/// same failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleError {
    /// A base dimension was zero.
    InvalidDimensions {
        /// Requested base grid width.
        base_width: u32,
        /// Requested base grid height.
        base_height: u32,
    },
    /// No traversable start node exists. Indicates a construction defect,
    /// not a caller error.
    DisconnectedGraph,
    /// Traversal did not cover every full-grid node. This is the overall
    /// correctness gate for the whole pipeline.
    IncompleteCycle {
        /// Nodes reached before traversal closed or dead-ended.
        visited: usize,
        /// Total full-grid node count.
        expected: usize,
    },
    /// A lookup was made for a coordinate absent from the cycle.
    PositionNotOnCycle {
        /// Queried x coordinate.
        x: i32,
        /// Queried y coordinate.
        y: i32,
    },
    /// An underlying grid could not be constructed.
    Grid(GridError),
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                base_width,
                base_height,
            } => {
                write!(
                    f,
                    "base dimensions must both be >= 1, got {base_width}x{base_height}"
                )
            }
            Self::DisconnectedGraph => {
                write!(f, "no start node with at least one cycle-neighbour")
            }
            Self::IncompleteCycle { visited, expected } => {
                write!(
                    f,
                    "traversal covered {visited} of {expected} nodes; cycle is incomplete"
                )
            }
            Self::PositionNotOnCycle { x, y } => {
                write!(f, "position ({x}, {y}) is not on the cycle")
            }
            Self::Grid(err) => write!(f, "grid construction failed: {err}"),
        }
    }
}

impl Error for CycleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for CycleError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
