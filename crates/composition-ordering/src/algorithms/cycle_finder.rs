//! Minimal Cycle Finder
//!
//! Used once the stable sort gets stuck: every node still remaining has a
//! remaining predecessor, so the remaining subgraph contains a cycle.

use crate::domain::entities::{CycleReport, RelationGraph};
use crate::domain::value_objects::UnitIndex;
use std::collections::{BTreeSet, VecDeque};

/// Find a shortest cycle among the `remaining` nodes.
///
/// Runs a breadth-first search from every remaining node in original order
/// and keeps the first shortest cycle found. The reported cycle starts at its
/// lowest original position and follows "must precede" edges. Returns `None`
/// only if the remaining subgraph is acyclic.
///
/// Worst case O(n·(n + e)) for n remaining nodes and e edges: one search per
/// node. The scan stops as soon as a cycle of the shortest possible length
/// is known, 2 if any pair of remaining nodes points both ways and 3
/// otherwise, so contradictions and triangles are reported after a single
/// search.
pub fn find_minimal_cycle(
    graph: &RelationGraph,
    remaining: &BTreeSet<UnitIndex>,
) -> Option<CycleReport<UnitIndex>> {
    let shortest_possible = if has_two_cycle(graph, remaining) { 2 } else { 3 };
    let mut best: Option<Vec<UnitIndex>> = None;

    for &start in remaining {
        let limit = best.as_ref().map_or(usize::MAX, Vec::len);
        if limit <= shortest_possible {
            break;
        }

        let Some(cycle) = shortest_cycle_through(graph, remaining, start, limit) else {
            continue;
        };
        if cycle.len() < limit {
            best = Some(cycle);
        }
    }

    best.map(|positions| CycleReport::new(positions.clone(), positions))
}

/// Whether two remaining nodes have edges in both directions.
fn has_two_cycle(graph: &RelationGraph, remaining: &BTreeSet<UnitIndex>) -> bool {
    graph.edges.iter().any(|edge| {
        remaining.contains(&edge.from)
            && remaining.contains(&edge.to)
            && graph.has_edge(edge.to, edge.from)
    })
}

/// Shortest cycle through `start` with fewer than `limit` nodes.
fn shortest_cycle_through(
    graph: &RelationGraph,
    remaining: &BTreeSet<UnitIndex>,
    start: UnitIndex,
    limit: usize,
) -> Option<Vec<UnitIndex>> {
    let mut parent: Vec<Option<UnitIndex>> = vec![None; graph.node_count()];
    let mut depth: Vec<usize> = vec![usize::MAX; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    depth[start] = 0;

    while let Some(node) = queue.pop_front() {
        // A cycle closing here has depth + 1 nodes
        if depth[node] + 1 >= limit {
            return None;
        }

        for &successor in graph.successors_of(node) {
            if !remaining.contains(&successor) {
                continue;
            }
            if successor == start {
                return Some(trace_back(&parent, start, node));
            }
            if depth[successor] == usize::MAX {
                depth[successor] = depth[node] + 1;
                parent[successor] = Some(node);
                queue.push_back(successor);
            }
        }
    }

    None
}

fn trace_back(parent: &[Option<UnitIndex>], start: UnitIndex, last: UnitIndex) -> Vec<UnitIndex> {
    let mut path = vec![last];
    let mut current = last;
    while current != start {
        let Some(previous) = parent[current] else {
            break;
        };
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
