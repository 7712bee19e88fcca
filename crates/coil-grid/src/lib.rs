//! Grid primitives for Coil cycle construction.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! coordinate type ([`Point`]), the bounded rectangular grid with 4-connected
//! neighbourhood ([`Grid`]), and the unordered cell-index pair ([`Edge`])
//! used by the spanning-tree and cycle-adjacency layers above it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;
pub mod point;

pub use edge::Edge;
pub use error::GridError;
pub use grid::Grid;
pub use point::Point;
