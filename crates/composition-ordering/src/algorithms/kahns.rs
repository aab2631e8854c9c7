//! Stable Kahn's Topological Sort
//!
//! Kahn's algorithm with the work queue replaced by an ordered scan of the
//! remaining nodes, so unconstrained units keep their declared order.

use super::cycle_finder::find_minimal_cycle;
use crate::domain::entities::{CycleReport, RelationGraph};
use crate::domain::value_objects::UnitIndex;
use std::collections::BTreeSet;
use tracing::{trace, warn};

/// Order the graph's nodes, returning original positions in output order.
///
/// Each step emits the remaining node with the lowest original position
/// that has no remaining predecessor. When no remaining node qualifies, the
/// remaining nodes contain a cycle and a shortest one is reported.
///
/// O(n²) for n nodes: at most n scans over at most n remaining nodes.
pub fn stable_topological_order(
    graph: &RelationGraph,
) -> Result<Vec<UnitIndex>, CycleReport<UnitIndex>> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Ok(Vec::new());
    }

    // Remaining predecessors per node (we'll decrement it)
    let mut pending: Vec<usize> = graph.in_degree.clone();
    let mut remaining: BTreeSet<UnitIndex> = (0..node_count).collect();
    let mut order = Vec::with_capacity(node_count);

    while !remaining.is_empty() {
        let Some(next) = remaining.iter().copied().find(|&node| pending[node] == 0) else {
            let stuck: Vec<UnitIndex> = remaining.iter().copied().collect();
            warn!(
                emitted = order.len(),
                stuck = ?stuck,
                "No remaining unit is free of predecessors"
            );
            return Err(find_minimal_cycle(graph, &remaining)
                .unwrap_or_else(|| CycleReport::new(stuck.clone(), stuck)));
        };

        remaining.remove(&next);
        for &successor in graph.successors_of(next) {
            pending[successor] = pending[successor].saturating_sub(1);
        }

        trace!(position = next, step = order.len(), "Emitted unit");
        order.push(next);
    }

    Ok(order)
}
