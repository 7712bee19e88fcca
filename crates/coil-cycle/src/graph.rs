//! Full-grid cycle-adjacency arena.
//!
//! Nodes are full-grid cells addressed by row-major index; adjacency is a
//! per-node list of neighbour indices. Only the expansion and fix-up phases
//! insert links — the arena never holds all-pairs grid adjacency.

use coil_grid::{Grid, Point};
use smallvec::SmallVec;

/// Mutable cycle-adjacency over the full grid.
///
/// Every node's cycle-degree must reach exactly 2 by the end of fix-up;
/// that post-condition is enforced by traversal, not here.
#[derive(Clone, Debug)]
pub(crate) struct CycleGraph {
    grid: Grid,
    links: Vec<SmallVec<[u32; 4]>>,
}

impl CycleGraph {
    /// An arena for `grid` with no links.
    pub(crate) fn new(grid: Grid) -> Self {
        Self {
            links: vec![SmallVec::new(); grid.cell_count()],
            grid,
        }
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    /// Link the cells at indices `a` and `b`, in both directions,
    /// skipping links already present.
    pub(crate) fn connect_indices(&mut self, a: u32, b: u32) {
        if !self.links[a as usize].contains(&b) {
            self.links[a as usize].push(b);
        }
        if !self.links[b as usize].contains(&a) {
            self.links[b as usize].push(a);
        }
    }

    /// Link the cells at `a` and `b` if both are in bounds; out-of-bounds
    /// pairs are skipped.
    pub(crate) fn connect(&mut self, a: Point, b: Point) {
        if let (Some(ia), Some(ib)) = (self.grid.index_of(a), self.grid.index_of(b)) {
            self.connect_indices(ia as u32, ib as u32);
        }
    }

    /// Cycle-degree of the node at `index`.
    pub(crate) fn degree(&self, index: usize) -> usize {
        self.links[index].len()
    }

    /// Cycle-neighbours of the node at `index`, in insertion order.
    pub(crate) fn neighbours(&self, index: usize) -> &[u32] {
        &self.links[index]
    }

    /// All nodes with cycle-degree exactly 1, in cell-index order.
    pub(crate) fn degree_one_nodes(&self) -> Vec<u32> {
        (0..self.links.len() as u32)
            .filter(|&i| self.degree(i as usize) == 1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_is_bidirectional_and_deduplicated() {
        let grid = Grid::new(4, 4).unwrap();
        let mut g = CycleGraph::new(grid);
        g.connect(Point::new(0, 0), Point::new(1, 0));
        g.connect(Point::new(1, 0), Point::new(0, 0));
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 1);
        assert_eq!(g.neighbours(0), &[1]);
        assert_eq!(g.neighbours(1), &[0]);
    }

    #[test]
    fn connect_skips_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        let mut g = CycleGraph::new(grid);
        g.connect(Point::new(1, 1), Point::new(2, 1));
        assert_eq!(g.degree(3), 0);
    }

    #[test]
    fn degree_one_nodes_in_index_order() {
        let grid = Grid::new(2, 2).unwrap();
        let mut g = CycleGraph::new(grid);
        g.connect(Point::new(0, 0), Point::new(1, 0));
        g.connect(Point::new(0, 1), Point::new(1, 1));
        assert_eq!(g.degree_one_nodes(), vec![0, 1, 2, 3]);
    }
}
