//! Dependency Grouper
//!
//! Splits units into groups that are linked by dependency edges in either
//! direction. Units in different groups never constrain each other.

use crate::domain::entities::RelationGraph;
use crate::domain::value_objects::UnitIndex;
use std::collections::VecDeque;

/// Partition the graph's nodes into dependency groups.
///
/// Groups come in order of their lowest member; members are listed in
/// original order. A unit without edges forms a group on its own.
pub fn group_dependent_units(graph: &RelationGraph) -> Vec<Vec<UnitIndex>> {
    let mut assigned = vec![false; graph.node_count()];
    let mut groups = Vec::new();

    for seed in 0..graph.node_count() {
        if assigned[seed] {
            continue;
        }

        assigned[seed] = true;
        let mut members = vec![seed];
        let mut queue = VecDeque::from([seed]);

        while let Some(node) = queue.pop_front() {
            let neighbours = graph
                .successors_of(node)
                .iter()
                .chain(graph.predecessors_of(node));
            for &neighbour in neighbours {
                if !assigned[neighbour] {
                    assigned[neighbour] = true;
                    members.push(neighbour);
                    queue.push_back(neighbour);
                }
            }
        }

        members.sort_unstable();
        groups.push(members);
    }

    groups
}
