//! Construction entry point.

use crate::cycle::HamiltonianCycle;
use crate::error::CycleError;
use crate::expand::expand_tree;
use crate::fixup::fix_degree_one;
use crate::spanning_tree::SpanningTree;
use crate::traverse::trace;
use coil_grid::Grid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builder for [`HamiltonianCycle`].
///
/// Dimensions are those of the base grid; the produced cycle covers the
/// doubled grid. The seed is optional: when omitted, one is drawn from the
/// thread RNG and then used exactly as an explicit seed would be, so the
/// result always records a concrete reproducing seed.
///
/// # Examples
///
/// ```
/// use coil_cycle::CycleBuilder;
///
/// let cycle = CycleBuilder::new(4, 4).seed(7).build().unwrap();
/// assert_eq!(cycle.len(), 64);
/// assert_eq!(cycle.seed(), 7);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CycleBuilder {
    base_width: u32,
    base_height: u32,
    seed: Option<u64>,
}

impl CycleBuilder {
    /// Start a builder for a `base_width x base_height` base grid.
    pub fn new(base_width: u32, base_height: u32) -> Self {
        Self {
            base_width,
            base_height,
            seed: None,
        }
    }

    /// Fix the RNG seed. The same dimensions and seed reproduce an
    /// identical cycle bit-for-bit.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the construction pipeline: spanning tree, corridor expansion,
    /// degree fix-up, traversal.
    ///
    /// # Errors
    ///
    /// - `CycleError::InvalidDimensions` if either base dimension is 0.
    /// - `CycleError::Grid` if a dimension is too large to double.
    /// - `CycleError::DisconnectedGraph` / `CycleError::IncompleteCycle` on
    ///   internal construction defects; never returned for valid input
    ///   without a pipeline bug, and deterministic per seed.
    pub fn build(self) -> Result<HamiltonianCycle, CycleError> {
        if self.base_width == 0 || self.base_height == 0 {
            return Err(CycleError::InvalidDimensions {
                base_width: self.base_width,
                base_height: self.base_height,
            });
        }
        let base = Grid::new(self.base_width, self.base_height)?;
        // Validate the doubling before any per-cell allocation happens.
        let full = base.doubled()?;

        let seed = self.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let tree = SpanningTree::grow(base, &mut rng)?;
        let mut graph = expand_tree(&tree, full);
        fix_degree_one(&mut graph);
        let order = trace(&graph)?;

        Ok(HamiltonianCycle::from_parts(base, graph.grid(), order, seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coil_grid::GridError;

    #[test]
    fn zero_width_is_invalid_dimensions() {
        assert_eq!(
            CycleBuilder::new(0, 4).seed(1).build().unwrap_err(),
            CycleError::InvalidDimensions {
                base_width: 0,
                base_height: 4,
            }
        );
    }

    #[test]
    fn zero_height_is_invalid_dimensions() {
        assert!(matches!(
            CycleBuilder::new(4, 0).build(),
            Err(CycleError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn oversized_base_fails_before_any_cell_allocation() {
        // The doubling check runs ahead of tree growth: a base grid too
        // large to double is rejected without materializing its cells.
        assert!(matches!(
            CycleBuilder::new(i32::MAX as u32, 1).seed(0).build(),
            Err(CycleError::Grid(GridError::DimensionTooLarge { .. }))
        ));
        assert!(matches!(
            CycleBuilder::new(1, i32::MAX as u32).seed(0).build(),
            Err(CycleError::Grid(GridError::DimensionTooLarge { .. }))
        ));
    }

    #[test]
    fn unseeded_build_records_a_reproducing_seed() {
        let first = CycleBuilder::new(3, 3).build().unwrap();
        let again = CycleBuilder::new(3, 3).seed(first.seed()).build().unwrap();
        assert_eq!(first.positions(), again.positions());
    }

    #[test]
    fn explicit_seed_is_recorded() {
        let cycle = CycleBuilder::new(2, 3).seed(99).build().unwrap();
        assert_eq!(cycle.seed(), 99);
    }
}
