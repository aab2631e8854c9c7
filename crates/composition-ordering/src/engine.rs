//! Ordering Engine
//!
//! Free functions over the algorithms for callers that don't need the
//! service layer: no limits, no verification, no logging beyond the
//! algorithms' own debug events.

use crate::algorithms::{build_relation_graph, stable_topological_order};
use crate::domain::entities::CycleReport;
use crate::domain::errors::SortError;
use crate::domain::value_objects::UnitIndex;
use crate::ports::outbound::DependencyAnalyzer;

/// Order `units` so every analyzer constraint holds.
///
/// Among units free to go next, the one that came first in `units` goes
/// first. Duplicates are independent units. An empty input returns
/// immediately without querying the analyzer.
///
/// # Errors
///
/// - [`SortError::CycleDetected`] with a shortest offending cycle, its units
///   moved out of the input
/// - [`SortError::AnalyzerFault`] with the analyzer's first error
pub fn sort<T, A>(units: Vec<T>, analyzer: &A) -> Result<Vec<T>, SortError<T, A::Error>>
where
    A: DependencyAnalyzer<T> + ?Sized,
{
    match order_indices(&units, analyzer) {
        Ok(order) => Ok(permute(units, &order)),
        Err(SortError::CycleDetected(cycle)) => {
            Err(SortError::CycleDetected(extract_cycle(units, cycle)))
        }
        Err(SortError::AnalyzerFault(fault)) => Err(SortError::AnalyzerFault(fault)),
    }
}

/// Like [`sort`] but returns original positions and leaves the input alone.
pub fn order_indices<T, A>(
    units: &[T],
    analyzer: &A,
) -> Result<Vec<UnitIndex>, SortError<UnitIndex, A::Error>>
where
    A: DependencyAnalyzer<T> + ?Sized,
{
    let graph = build_relation_graph(units, analyzer).map_err(SortError::AnalyzerFault)?;
    stable_topological_order(&graph).map_err(SortError::CycleDetected)
}

/// Rearrange `units` into `order`. `order` must be a permutation of the
/// input positions.
pub(crate) fn permute<T>(units: Vec<T>, order: &[UnitIndex]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = units.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&position| slots.get_mut(position).and_then(Option::take))
        .collect()
}

/// Move the units named by a positional cycle out of the input.
pub(crate) fn extract_cycle<T>(units: Vec<T>, cycle: CycleReport<UnitIndex>) -> CycleReport<T> {
    let positions = cycle.positions().to_vec();
    let members = permute(units, &positions);
    CycleReport::new(members, positions)
}
