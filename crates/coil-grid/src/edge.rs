//! Unordered cell-index pairs.

use std::fmt;

/// An undirected edge between two grid cells, identified by cell index.
///
/// Endpoints are stored in canonical order (`lo <= hi`), so the derived
/// `Eq` and `Hash` treat `Edge::new(a, b)` and `Edge::new(b, a)` as the
/// same edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    lo: u32,
    hi: u32,
}

impl Edge {
    /// Create the edge between cells `a` and `b`, in either order.
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The endpoints, lower index first.
    pub fn endpoints(&self) -> (u32, u32) {
        (self.lo, self.hi)
    }

    /// Whether `cell` is one of the endpoints.
    pub fn contains(&self, cell: u32) -> bool {
        cell == self.lo || cell == self.hi
    }

    /// The endpoint opposite `cell`, or `None` if `cell` is not an endpoint.
    pub fn other(&self, cell: u32) -> Option<u32> {
        if cell == self.lo {
            Some(self.hi)
        } else if cell == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}
