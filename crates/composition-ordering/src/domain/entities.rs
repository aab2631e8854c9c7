//! Core entities for Composition Ordering

use super::value_objects::{Edge, UnitIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dependency graph over the positions of one input sequence.
///
/// Built once per ordering call from the analyzer's verdicts; edges are
/// deduplicated and successor/predecessor lists are kept sorted so every
/// traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationGraph {
    /// All edges in insertion order
    pub edges: Vec<Edge>,
    /// Adjacency list: from -> [to, to, ...]
    pub adjacency: Vec<Vec<UnitIndex>>,
    /// Reverse adjacency: to -> [from, from, ...]
    pub predecessors: Vec<Vec<UnitIndex>>,
    /// In-degree count for each node
    pub in_degree: Vec<usize>,
    /// Analyzer queries issued while building the graph
    pub analyzer_calls: usize,
}

impl RelationGraph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
            predecessors: vec![Vec::new(); node_count],
            in_degree: vec![0; node_count],
            analyzer_calls: 0,
        }
    }

    /// Add an edge. Returns `false` if it was already present.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        let Err(slot) = self.adjacency[edge.from].binary_search(&edge.to) else {
            return false;
        };
        self.adjacency[edge.from].insert(slot, edge.to);

        let slot = self.predecessors[edge.to]
            .binary_search(&edge.from)
            .unwrap_or_else(|slot| slot);
        self.predecessors[edge.to].insert(slot, edge.from);

        self.in_degree[edge.to] += 1;
        self.edges.push(edge);
        true
    }

    /// Check if an edge exists from -> to
    pub fn has_edge(&self, from: UnitIndex, to: UnitIndex) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|successors| successors.binary_search(&to).is_ok())
    }

    pub fn successors_of(&self, node: UnitIndex) -> &[UnitIndex] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn predecessors_of(&self, node: UnitIndex) -> &[UnitIndex] {
        self.predecessors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes without any predecessor, in original order.
    pub fn source_nodes(&self) -> Vec<UnitIndex> {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(node, _)| node)
            .collect()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A directed cycle found among units that could not be ordered.
///
/// `units[0] → units[1] → … → units[k-1] → units[0]`, each arrow meaning
/// "must be positioned before". `positions` holds the original index of
/// every unit, in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport<T> {
    units: Vec<T>,
    positions: Vec<UnitIndex>,
}

impl<T> CycleReport<T> {
    pub fn new(units: Vec<T>, positions: Vec<UnitIndex>) -> Self {
        debug_assert_eq!(units.len(), positions.len());
        Self { units, positions }
    }

    pub fn units(&self) -> &[T] {
        &self.units
    }

    pub fn positions(&self) -> &[UnitIndex] {
        &self.positions
    }

    pub fn into_units(self) -> Vec<T> {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains_position(&self, position: UnitIndex) -> bool {
        self.positions.contains(&position)
    }

    /// Replace every unit while keeping the positions.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CycleReport<U> {
        CycleReport {
            units: self.units.into_iter().map(f).collect(),
            positions: self.positions,
        }
    }
}

impl<T: fmt::Display> CycleReport<T> {
    /// Render the cycle as `A → B → C → A`.
    pub fn path(&self) -> String {
        let mut rendered: Vec<String> = self.units.iter().map(ToString::to_string).collect();
        if let Some(first) = rendered.first().cloned() {
            rendered.push(first);
        }
        rendered.join(" → ")
    }
}

impl<T: fmt::Display> fmt::Display for CycleReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dependency cycle detected: {}", self.path())
    }
}
