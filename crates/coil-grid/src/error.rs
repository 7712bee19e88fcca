//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension overflowed.
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The total cell count exceeds the maximum a cell index can address.
    TooManyCells {
        /// The requested cell count.
        cells: u64,
        /// The maximum addressable cell count.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum dimension {max}")
            }
            Self::TooManyCells { cells, max } => {
                write!(f, "grid has {cells} cells, more than the {max} addressable")
            }
        }
    }
}

impl std::error::Error for GridError {}
