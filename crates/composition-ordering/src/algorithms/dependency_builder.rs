//! Relation Graph Builder
//!
//! Turns pairwise analyzer verdicts into a deduplicated edge set.

use crate::domain::entities::RelationGraph;
use crate::ports::outbound::DependencyAnalyzer;
use tracing::debug;

/// Build the relation graph for `units` by querying `analyzer`.
///
/// Every unordered pair `{i, j}` with `i < j` is asked once as
/// `relation(units[i], units[j])`. When that answer is a constraint, the
/// swapped pair is asked once too and its edge added as well: a consistent
/// analyzer yields the same edge again, contradicting declarations yield
/// a 2-cycle. No ordered pair is asked twice and a unit is never paired
/// with itself.
///
/// The first analyzer error aborts the build.
pub fn build_relation_graph<T, A>(units: &[T], analyzer: &A) -> Result<RelationGraph, A::Error>
where
    A: DependencyAnalyzer<T> + ?Sized,
{
    let mut graph = RelationGraph::new(units.len());
    let mut calls = 0usize;

    for i in 0..units.len() {
        for j in (i + 1)..units.len() {
            calls += 1;
            let forward = analyzer.relation(&units[i], &units[j])?;
            let Some(edge) = forward.edge_between(i, j) else {
                continue;
            };
            graph.add_edge(edge);

            calls += 1;
            let backward = analyzer.relation(&units[j], &units[i])?;
            if let Some(confirmed) = backward.edge_between(j, i) {
                if confirmed != edge {
                    debug!(
                        first = i,
                        second = j,
                        "Analyzer contradicts itself, both units claim to come first"
                    );
                }
                graph.add_edge(confirmed);
            }
        }
    }

    graph.analyzer_calls = calls;

    debug!(
        node_count = graph.node_count(),
        edge_count = graph.edge_count(),
        analyzer_calls = calls,
        "Built relation graph"
    );

    Ok(graph)
}
