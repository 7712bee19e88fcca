//! Coil: Hamiltonian cycles over rectangular grids.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Coil sub-crates. For most users, adding `coil` as a single dependency is
//! sufficient.
//!
//! A cycle is built by growing a random spanning tree over a half-resolution
//! base grid, expanding each tree edge into parallel corridors on the
//! doubled grid, and repairing the remaining degree-1 nodes until the
//! adjacency collapses into one closed path visiting every cell exactly
//! once. Construction is deterministic per seed, and the returned
//! [`HamiltonianCycle`] is immutable with O(1) successor, predecessor, and
//! index queries — the shape a game loop or renderer consumes directly.
//!
//! # Quick start
//!
//! ```rust
//! use coil::prelude::*;
//!
//! // Cycle over a 12x8 grid (base grid 6x4), reproducible from seed 42.
//! let cycle = CycleBuilder::new(6, 4).seed(42).build().unwrap();
//! assert_eq!(cycle.len(), 96);
//!
//! // Steer an agent along the cycle.
//! let head = cycle.position_at(0).unwrap();
//! let (dx, dy) = cycle.step_direction(head.x, head.y).unwrap();
//! assert_eq!(dx.abs() + dy.abs(), 1);
//!
//! // Every cell of the full grid is on the cycle.
//! assert!(cycle.index_of(11, 7).is_ok());
//! assert!(cycle.index_of(12, 0).is_err());
//! ```
//!
//! # Modules
//!
//! - [`grid`] (`coil-grid`): [`Point`], [`Grid`], [`Edge`] primitives.
//! - [`cycle`] (`coil-cycle`): the construction pipeline, [`SpanningTree`],
//!   [`CycleBuilder`], [`HamiltonianCycle`], [`CycleError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid, coordinate, and edge primitives (`coil-grid`).
pub mod grid {
    pub use coil_grid::*;
}

/// Cycle construction pipeline and queries (`coil-cycle`).
pub mod cycle {
    pub use coil_cycle::*;
}

pub use coil_cycle::{CycleBuilder, CycleError, HamiltonianCycle, SpanningTree};
pub use coil_grid::{Edge, Grid, GridError, Point};

/// Commonly used items, for glob import.
pub mod prelude {
    pub use crate::{CycleBuilder, CycleError, Grid, HamiltonianCycle, Point};
}
