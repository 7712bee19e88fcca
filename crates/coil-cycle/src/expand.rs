//! Corridor expansion of base-grid tree edges into the full grid.
//!
//! Each spanning-tree edge becomes a pair of parallel corridor edges in the
//! doubled grid. Edges are stored canonically (lower cell index first), and
//! row-major indexing puts the lower index on the left/upper endpoint, so
//! the canonical endpoint always sees the forward direction (`dx = 1` or
//! `dy = 1`). Iterating the edge list once therefore expands every edge
//! exactly once and never double-applies the mirrored rule.

use crate::graph::CycleGraph;
use crate::spanning_tree::SpanningTree;
use coil_grid::{Grid, Point};

/// Expand `tree` into cycle-adjacency over `full`, the doubled base grid.
///
/// The caller validates the doubling up front (before the base grid is ever
/// materialized) and passes the result through.
pub(crate) fn expand_tree(tree: &SpanningTree, full: Grid) -> CycleGraph {
    let base = tree.grid();
    let mut graph = CycleGraph::new(full);

    for edge in tree.edges() {
        let (a, b) = edge.endpoints();
        let (Some(pa), Some(pb)) = (base.point_at(a as usize), base.point_at(b as usize))
        else {
            continue;
        };
        let (dx, dy) = pa.direction_to(pb);
        let x = pa.x * 2;
        let y = pa.y * 2;
        if dx == 1 {
            // Neighbour to the right: two horizontal corridor edges.
            graph.connect(Point::new(x + 1, y), Point::new(x + 2, y));
            graph.connect(Point::new(x + 1, y + 1), Point::new(x + 2, y + 1));
        } else if dy == 1 {
            // Neighbour below: two vertical corridor edges.
            graph.connect(Point::new(x, y + 1), Point::new(x, y + 2));
            graph.connect(Point::new(x + 1, y + 1), Point::new(x + 1, y + 2));
        }
    }

    // A base node with no tree neighbours (only possible in a single-cell
    // base grid) contributes no corridors and would leave its four cells at
    // degree 0, beyond the reach of the degree-1 fix-up. Close its 2x2 cell
    // into a square directly.
    for (i, tree_neighbours) in tree.adjacency().iter().enumerate() {
        if !tree_neighbours.is_empty() {
            continue;
        }
        let Some(p) = base.point_at(i) else {
            continue;
        };
        let x = p.x * 2;
        let y = p.y * 2;
        graph.connect(Point::new(x, y), Point::new(x + 1, y));
        graph.connect(Point::new(x + 1, y), Point::new(x + 1, y + 1));
        graph.connect(Point::new(x + 1, y + 1), Point::new(x, y + 1));
        graph.connect(Point::new(x, y + 1), Point::new(x, y));
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use coil_grid::Grid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn expanded(width: u32, height: u32, seed: u64) -> (SpanningTree, CycleGraph) {
        let grid = Grid::new(width, height).unwrap();
        let full = grid.doubled().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let tree = SpanningTree::grow(grid, &mut rng).unwrap();
        let graph = expand_tree(&tree, full);
        (tree, graph)
    }

    #[test]
    fn single_base_cell_closes_into_square() {
        let (_, graph) = expanded(1, 1, 0);
        for index in 0..4 {
            assert_eq!(graph.degree(index), 2, "node {index}");
        }
    }

    #[test]
    fn horizontal_edge_produces_parallel_corridors() {
        // 2x1 base grid: the only tree edge joins (0,0)-(1,0).
        let (_, graph) = expanded(2, 1, 5);
        let full = graph.grid();
        let idx = |x: i32, y: i32| full.index_of(Point::new(x, y)).unwrap();
        assert!(graph.neighbours(idx(1, 0)).contains(&(idx(2, 0) as u32)));
        assert!(graph.neighbours(idx(1, 1)).contains(&(idx(2, 1) as u32)));
        // No corridor on the outer columns yet.
        assert_eq!(graph.degree(idx(0, 0)), 0);
        assert_eq!(graph.degree(idx(3, 1)), 0);
    }

    #[test]
    fn vertical_edge_produces_parallel_corridors() {
        let (_, graph) = expanded(1, 2, 5);
        let full = graph.grid();
        let idx = |x: i32, y: i32| full.index_of(Point::new(x, y)).unwrap();
        assert!(graph.neighbours(idx(0, 1)).contains(&(idx(0, 2) as u32)));
        assert!(graph.neighbours(idx(1, 1)).contains(&(idx(1, 2) as u32)));
    }

    #[test]
    fn expansion_adds_two_links_per_tree_edge() {
        let (tree, graph) = expanded(4, 3, 11);
        let total: usize = (0..graph.grid().cell_count())
            .map(|i| graph.degree(i))
            .sum();
        // Each tree edge contributes two corridor edges, each counted twice.
        assert_eq!(total, tree.edge_count() * 4);
    }

    #[test]
    fn corridor_links_join_adjacent_cells_only() {
        let (_, graph) = expanded(5, 5, 21);
        let full = graph.grid();
        for index in 0..full.cell_count() {
            let p = full.point_at(index).unwrap();
            for &other in graph.neighbours(index) {
                let q = full.point_at(other as usize).unwrap();
                assert_eq!(p.manhattan_distance(q), 1);
            }
        }
    }
}
