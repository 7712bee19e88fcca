//! Randomized spanning-tree growth over the base grid.
//!
//! The tree is grown Prim-style: start from a uniformly random node, then
//! repeatedly pick a uniformly random in-tree node and attach one of its
//! not-yet-in-tree neighbours, also chosen uniformly. A pick with no free
//! neighbour is simply retried with another in-tree node; rectangular grids
//! are connected, so growth always terminates with every node attached.
//!
//! All randomness flows through the caller-supplied ChaCha8 RNG, so a fixed
//! seed reproduces the tree (and everything built from it) bit-for-bit.

use crate::error::CycleError;
use coil_grid::{Edge, Grid};
use indexmap::IndexSet;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// A random spanning tree over a base grid.
///
/// Holds exactly `cell_count() − 1` edges connecting every cell of the grid
/// with no cycles. Produced by [`SpanningTree::grow`]; immutable thereafter.
#[derive(Clone, Debug)]
pub struct SpanningTree {
    grid: Grid,
    edges: Vec<Edge>,
}

impl SpanningTree {
    /// Grow a random spanning tree over `grid`.
    ///
    /// A single-cell grid yields the empty tree without consuming any
    /// randomness. Returns `Err(CycleError::DisconnectedGraph)` if no node
    /// has a neighbour to start from, which cannot happen for rectangular
    /// grids with more than one cell.
    pub fn grow(grid: Grid, rng: &mut ChaCha8Rng) -> Result<Self, CycleError> {
        let n = grid.cell_count();
        if n == 1 {
            // Trivially spanning: n - 1 = 0 edges.
            return Ok(Self {
                grid,
                edges: Vec::new(),
            });
        }

        let startable: Vec<u32> = (0..n as u32)
            .filter(|&i| !grid.neighbour_indices(i as usize).is_empty())
            .collect();
        if startable.is_empty() {
            return Err(CycleError::DisconnectedGraph);
        }

        let start = startable[rng.random_range(0..startable.len())];
        let start_neighbours = grid.neighbour_indices(start as usize);
        let first = start_neighbours[rng.random_range(0..start_neighbours.len())];

        let mut edges = Vec::with_capacity(n - 1);
        edges.push(Edge::new(start, first));

        // Insertion-ordered set: O(1) membership plus O(1) indexed choice.
        let mut in_tree: IndexSet<u32> = IndexSet::with_capacity(n);
        in_tree.insert(start);
        in_tree.insert(first);

        while in_tree.len() < n {
            let pick_at = rng.random_range(0..in_tree.len());
            let Some(&node) = in_tree.get_index(pick_at) else {
                continue;
            };
            let free: SmallVec<[u32; 4]> = grid
                .neighbour_indices(node as usize)
                .into_iter()
                .filter(|c| !in_tree.contains(c))
                .collect();
            if free.is_empty() {
                continue;
            }
            let next = free[rng.random_range(0..free.len())];
            edges.push(Edge::new(node, next));
            in_tree.insert(next);
        }

        Ok(Self { grid, edges })
    }

    /// The base grid this tree spans.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The tree edges, in the order they were grown.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of tree edges (`cell_count() − 1`).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Per-cell tree-adjacent neighbour sets, derived by scanning the edges
    /// once. Each cell retains the distinct set of cells it is linked to in
    /// the tree.
    pub fn adjacency(&self) -> Vec<SmallVec<[u32; 4]>> {
        let mut adjacency: Vec<SmallVec<[u32; 4]>> =
            vec![SmallVec::new(); self.grid.cell_count()];
        for edge in &self.edges {
            let (a, b) = edge.endpoints();
            if !adjacency[a as usize].contains(&b) {
                adjacency[a as usize].push(b);
            }
            if !adjacency[b as usize].contains(&a) {
                adjacency[b as usize].push(a);
            }
        }
        adjacency
    }
}
