//! The immutable Hamiltonian cycle value and its query surface.

use crate::builder::CycleBuilder;
use crate::error::CycleError;
use coil_grid::{Grid, Point};

/// A Hamiltonian cycle over a full-resolution grid.
///
/// Visits every cell of the `2*base_width x 2*base_height` grid exactly
/// once, with consecutive positions (cyclically) at Manhattan distance 1.
/// Immutable once constructed; safe to share with any number of readers.
///
/// # Examples
///
/// ```
/// use coil_cycle::HamiltonianCycle;
///
/// let cycle = HamiltonianCycle::generate(3, 2, Some(42)).unwrap();
/// assert_eq!(cycle.len(), 24);
/// let head = cycle.position_at(0).unwrap();
/// let next = cycle.next_position(head.x, head.y).unwrap();
/// assert_eq!(head.manhattan_distance(next), 1);
/// ```
#[derive(Clone, Debug)]
pub struct HamiltonianCycle {
    base: Grid,
    full: Grid,
    order: Vec<Point>,
    /// Cell index -> cycle index. Total: every full-grid cell is on the
    /// cycle, and `Grid` caps the cell count so indices fit in `u32`.
    rank: Vec<u32>,
    seed: u64,
}

impl HamiltonianCycle {
    /// Build a cycle for a `base_width x base_height` base grid.
    ///
    /// With `Some(seed)` the construction is reproducible bit-for-bit; with
    /// `None` a seed is drawn from the thread RNG and recorded on the result
    /// (see [`HamiltonianCycle::seed`]). Equivalent to
    /// [`CycleBuilder`] with the same parameters.
    pub fn generate(
        base_width: u32,
        base_height: u32,
        seed: Option<u64>,
    ) -> Result<Self, CycleError> {
        let builder = CycleBuilder::new(base_width, base_height);
        match seed {
            Some(seed) => builder.seed(seed).build(),
            None => builder.build(),
        }
    }

    pub(crate) fn from_parts(base: Grid, full: Grid, order: Vec<Point>, seed: u64) -> Self {
        let mut rank = vec![0u32; full.cell_count()];
        for (i, &p) in order.iter().enumerate() {
            if let Some(cell) = full.index_of(p) {
                rank[cell] = i as u32;
            }
        }
        Self {
            base,
            full,
            order,
            rank,
            seed,
        }
    }

    /// Number of positions on the cycle (`4 * base_width * base_height`).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The position at `index`, or `None` if `index >= len()`.
    pub fn position_at(&self, index: usize) -> Option<Point> {
        self.order.get(index).copied()
    }

    /// The cycle index of `(x, y)`.
    ///
    /// Returns `Err(CycleError::PositionNotOnCycle)` for coordinates outside
    /// the full grid; every in-bounds cell is on the cycle.
    pub fn index_of(&self, x: i32, y: i32) -> Result<usize, CycleError> {
        match self.full.index_of(Point::new(x, y)) {
            Some(cell) => Ok(self.rank[cell] as usize),
            None => Err(CycleError::PositionNotOnCycle { x, y }),
        }
    }

    /// The position following `(x, y)` on the cycle.
    pub fn next_position(&self, x: i32, y: i32) -> Result<Point, CycleError> {
        let index = self.index_of(x, y)?;
        Ok(self.order[(index + 1) % self.order.len()])
    }

    /// The position preceding `(x, y)` on the cycle.
    pub fn prev_position(&self, x: i32, y: i32) -> Result<Point, CycleError> {
        let index = self.index_of(x, y)?;
        Ok(self.order[(index + self.order.len() - 1) % self.order.len()])
    }

    /// The unit direction from `(x, y)` toward its successor on the cycle.
    pub fn step_direction(&self, x: i32, y: i32) -> Result<(i32, i32), CycleError> {
        let next = self.next_position(x, y)?;
        Ok(Point::new(x, y).direction_to(next))
    }

    /// The ordered positions of the cycle.
    pub fn positions(&self) -> &[Point] {
        &self.order
    }

    /// Iterate the positions in cycle order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.order.iter()
    }

    /// Base grid width.
    pub fn base_width(&self) -> u32 {
        self.base.width()
    }

    /// Base grid height.
    pub fn base_height(&self) -> u32 {
        self.base.height()
    }

    /// Full grid width (`2 * base_width`).
    pub fn full_width(&self) -> u32 {
        self.full.width()
    }

    /// Full grid height (`2 * base_height`).
    pub fn full_height(&self) -> u32 {
        self.full.height()
    }

    /// The seed the cycle was built from. Rebuilding with the same base
    /// dimensions and this seed reproduces the cycle bit-for-bit.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<'a> IntoIterator for &'a HamiltonianCycle {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
