//! Domain invariants for Composition Ordering
//!
//! Every check takes a produced order as original positions
//! (`order[k]` = position of the unit emitted k-th) plus the graph it was
//! computed from.

use super::entities::RelationGraph;
use super::value_objects::UnitIndex;

/// INVARIANT-1: Permutation
/// Every input position appears exactly once in the order.
pub fn invariant_permutation(order: &[UnitIndex], node_count: usize) -> bool {
    if order.len() != node_count {
        return false;
    }

    let mut seen = vec![false; node_count];
    for &position in order {
        match seen.get_mut(position) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }

    true
}

/// INVARIANT-2: Constraint Satisfaction
/// If A → B exists, A is emitted before B. Transitive constraints follow.
pub fn invariant_constraints_satisfied(order: &[UnitIndex], graph: &RelationGraph) -> bool {
    let Some(rank) = ranks(order, graph.node_count()) else {
        return false;
    };

    graph.edges.iter().all(|edge| rank[edge.from] < rank[edge.to])
}

/// INVARIANT-3: Stability
/// Neighbouring units only appear in reverse original order when a direct
/// edge from the first to the second forces it.
pub fn invariant_stability(order: &[UnitIndex], graph: &RelationGraph) -> bool {
    order
        .windows(2)
        .all(|pair| pair[0] < pair[1] || graph.has_edge(pair[0], pair[1]))
}

/// INVARIANT-4: No Cycles
/// The relation graph must be a DAG.
pub fn invariant_no_cycles(graph: &RelationGraph) -> bool {
    let mut visited = vec![false; graph.node_count()];
    let mut rec_stack = vec![false; graph.node_count()];

    for node in 0..graph.node_count() {
        if has_cycle_dfs(graph, node, &mut visited, &mut rec_stack) {
            return false;
        }
    }

    true
}

fn has_cycle_dfs(
    graph: &RelationGraph,
    node: UnitIndex,
    visited: &mut [bool],
    rec_stack: &mut [bool],
) -> bool {
    if rec_stack[node] {
        return true; // Back edge
    }

    if visited[node] {
        return false;
    }

    visited[node] = true;
    rec_stack[node] = true;

    for &successor in graph.successors_of(node) {
        if has_cycle_dfs(graph, successor, visited, rec_stack) {
            return true;
        }
    }

    rec_stack[node] = false;
    false
}

fn ranks(order: &[UnitIndex], node_count: usize) -> Option<Vec<usize>> {
    if !invariant_permutation(order, node_count) {
        return None;
    }

    let mut rank = vec![0; node_count];
    for (k, &position) in order.iter().enumerate() {
        rank[position] = k;
    }
    Some(rank)
}
