//! Two-pass repair of degree-1 nodes after corridor expansion.
//!
//! Corridor ends and grid borders leave nodes with a single cycle-neighbour.
//! Pass 1 extends each such node one step away from its neighbour; pass 2
//! pairs the survivors with a degree-1 cellmate. Nodes are visited in
//! cell-index order and proposals commit in insertion order, so fix-up is
//! deterministic. Degree-2-everywhere is a post-condition checked by
//! traversal, not assumed here.

use crate::graph::CycleGraph;
use coil_grid::Edge;
use indexmap::IndexSet;

/// Run both repair passes over `graph`.
pub(crate) fn fix_degree_one(graph: &mut CycleGraph) {
    extend_directionally(graph);
    pair_within_cells(graph);
}

/// Pass 1: for each degree-1 node `n` with single neighbour `o`, propose the
/// edge continuing the `o -> n` direction one step past `n`, when the target
/// is in bounds. Proposals are deduplicated (canonical edges, so either
/// orientation collides) and committed together after the scan.
fn extend_directionally(graph: &mut CycleGraph) {
    let full = graph.grid();
    let mut proposals: IndexSet<Edge> = IndexSet::new();

    for &node in &graph.degree_one_nodes() {
        let Some(&other) = graph.neighbours(node as usize).first() else {
            continue;
        };
        let (Some(p), Some(o)) = (
            full.point_at(node as usize),
            full.point_at(other as usize),
        ) else {
            continue;
        };
        let (dx, dy) = o.direction_to(p);
        let target = p.offset(dx, dy);
        if let Some(target_index) = full.index_of(target) {
            proposals.insert(Edge::new(node, target_index as u32));
        }
    }

    for edge in &proposals {
        let (a, b) = edge.endpoints();
        graph.connect_indices(a, b);
    }
}

/// Pass 2: recompute the degree-1 set; pair each node with the first other
/// degree-1 node at Manhattan distance 1 inside the same base 2x2 cell.
fn pair_within_cells(graph: &mut CycleGraph) {
    let full = graph.grid();
    let degree_one = graph.degree_one_nodes();
    let mut proposals: IndexSet<Edge> = IndexSet::new();

    for &node in &degree_one {
        let Some(p) = full.point_at(node as usize) else {
            continue;
        };
        for &other in &degree_one {
            if other == node {
                continue;
            }
            let Some(o) = full.point_at(other as usize) else {
                continue;
            };
            let same_cell = p.x / 2 == o.x / 2 && p.y / 2 == o.y / 2;
            if same_cell && p.manhattan_distance(o) == 1 {
                proposals.insert(Edge::new(node, other));
                break;
            }
        }
    }

    for edge in &proposals {
        let (a, b) = edge.endpoints();
        graph.connect_indices(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand_tree;
    use crate::spanning_tree::SpanningTree;
    use coil_grid::{Grid, Point};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixed(width: u32, height: u32, seed: u64) -> CycleGraph {
        let grid = Grid::new(width, height).unwrap();
        let full = grid.doubled().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let tree = SpanningTree::grow(grid, &mut rng).unwrap();
        let mut graph = expand_tree(&tree, full);
        fix_degree_one(&mut graph);
        graph
    }

    #[test]
    fn two_by_one_base_becomes_outer_ring() {
        let graph = fixed(2, 1, 3);
        let full = graph.grid();
        let idx = |x: i32, y: i32| full.index_of(Point::new(x, y)).unwrap();
        // Pass 1 extends the corridor ends outward, pass 2 closes the short
        // sides; every node of the 4x2 grid sits on the ring.
        for index in 0..full.cell_count() {
            assert_eq!(graph.degree(index), 2, "node {index}");
        }
        assert!(graph.neighbours(idx(0, 0)).contains(&(idx(0, 1) as u32)));
        assert!(graph.neighbours(idx(3, 0)).contains(&(idx(3, 1) as u32)));
    }

    #[test]
    fn all_nodes_reach_degree_two() {
        for (w, h, seed) in [(2, 2, 0), (3, 3, 1), (5, 4, 2), (8, 8, 3), (1, 6, 4)] {
            let graph = fixed(w, h, seed);
            for index in 0..graph.grid().cell_count() {
                assert_eq!(graph.degree(index), 2, "{w}x{h} seed {seed} node {index}");
            }
        }
    }

    #[test]
    fn fixup_only_links_adjacent_cells() {
        let graph = fixed(6, 5, 9);
        let full = graph.grid();
        for index in 0..full.cell_count() {
            let p = full.point_at(index).unwrap();
            for &other in graph.neighbours(index) {
                let q = full.point_at(other as usize).unwrap();
                assert_eq!(p.manhattan_distance(q), 1);
            }
        }
    }

    #[test]
    fn fixup_is_idempotent_on_repaired_graphs() {
        let mut graph = fixed(4, 4, 17);
        let before: Vec<Vec<u32>> = (0..graph.grid().cell_count())
            .map(|i| graph.neighbours(i).to_vec())
            .collect();
        fix_degree_one(&mut graph);
        let after: Vec<Vec<u32>> = (0..graph.grid().cell_count())
            .map(|i| graph.neighbours(i).to_vec())
            .collect();
        assert_eq!(before, after);
    }
}
