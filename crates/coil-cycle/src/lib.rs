//! Hamiltonian cycle construction over rectangular grids.
//!
//! A closed path visiting every cell of a `2W x 2H` grid exactly once is
//! built in four strictly forward phases:
//!
//! 1. **Spanning tree** ([`SpanningTree::grow`]): randomized Prim-style
//!    growth over the half-resolution `W x H` base grid.
//! 2. **Corridor expansion**: each tree edge becomes a pair of parallel
//!    corridor edges in the full grid.
//! 3. **Degree fix-up**: two deterministic passes repair nodes left with a
//!    single cycle-neighbour.
//! 4. **Traversal**: the adjacency is walked into one ordered cycle, with a
//!    hard full-coverage gate ([`CycleError::IncompleteCycle`]).
//!
//! The only nondeterminism is the ChaCha8 seed; a fixed seed reproduces the
//! cycle bit-for-bit. The result ([`HamiltonianCycle`]) is immutable and
//! answers successor/predecessor/index queries in O(1).
//!
//! # Examples
//!
//! ```
//! use coil_cycle::CycleBuilder;
//!
//! let cycle = CycleBuilder::new(8, 6).seed(42).build().unwrap();
//! assert_eq!(cycle.len(), 4 * 8 * 6);
//!
//! // Follow the cycle from any cell.
//! let mut pos = cycle.position_at(0).unwrap();
//! for _ in 0..cycle.len() {
//!     pos = cycle.next_position(pos.x, pos.y).unwrap();
//! }
//! assert_eq!(Some(pos), cycle.position_at(0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod cycle;
pub mod error;
pub mod spanning_tree;

mod expand;
mod fixup;
mod graph;
mod traverse;

pub use builder::CycleBuilder;
pub use cycle::HamiltonianCycle;
pub use error::CycleError;
pub use spanning_tree::SpanningTree;

// Re-export the grid primitives appearing in this crate's public API.
pub use coil_grid::{Edge, Grid, GridError, Point};
