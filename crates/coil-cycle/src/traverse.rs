//! Walk the repaired adjacency into an ordered cycle.

use crate::error::CycleError;
use crate::graph::CycleGraph;
use coil_grid::Point;

/// Trace the cycle-adjacency of `graph` into an ordered position sequence.
///
/// The walk starts at the lowest-index node with at least one
/// cycle-neighbour and always moves to the neighbour that is not the node it
/// came from, stopping when it returns to the start. Failing to cover every
/// node — a dead end, a premature return to start (disjoint cycles), or a
/// walk that never closes — is `CycleError::IncompleteCycle`; this is the
/// single overall correctness gate for the pipeline.
pub(crate) fn trace(graph: &CycleGraph) -> Result<Vec<Point>, CycleError> {
    let full = graph.grid();
    let expected = full.cell_count();

    let Some(start) = (0..expected).find(|&i| graph.degree(i) > 0) else {
        return Err(CycleError::DisconnectedGraph);
    };
    let Some(start_point) = full.point_at(start) else {
        return Err(CycleError::DisconnectedGraph);
    };
    let Some(&first) = graph.neighbours(start).first() else {
        return Err(CycleError::DisconnectedGraph);
    };

    let mut order = Vec::with_capacity(expected);
    order.push(start_point);
    let mut previous = start as u32;
    let mut current = first;

    while current != start as u32 {
        if order.len() == expected {
            // Walked the whole node budget without closing the loop.
            return Err(CycleError::IncompleteCycle {
                visited: order.len(),
                expected,
            });
        }
        let Some(point) = full.point_at(current as usize) else {
            return Err(CycleError::IncompleteCycle {
                visited: order.len(),
                expected,
            });
        };
        order.push(point);

        let next = graph
            .neighbours(current as usize)
            .iter()
            .copied()
            .find(|&c| c != previous);
        let Some(next) = next else {
            // True degree-1 dead end: fail rather than truncate.
            return Err(CycleError::IncompleteCycle {
                visited: order.len(),
                expected,
            });
        };
        previous = current;
        current = next;
    }

    if order.len() != expected {
        return Err(CycleError::IncompleteCycle {
            visited: order.len(),
            expected,
        });
    }
    Ok(order)
}
