//! Error types for Composition Ordering

use super::entities::CycleReport;
use super::value_objects::UnitIndex;
use thiserror::Error;

/// Failure of a single sort call.
///
/// `T` is the unit type carried by the cycle report, `E` the analyzer's
/// own error type, passed through untouched.
#[derive(Debug, Error)]
pub enum SortError<T, E> {
    /// The analyzer's verdicts contain a directed cycle
    #[error("{0}")]
    CycleDetected(CycleReport<T>),

    /// The analyzer failed while answering a relation query
    #[error("Dependency analyzer failed: {0}")]
    AnalyzerFault(#[source] E),
}

impl<T, E> SortError<T, E> {
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleDetected(_))
    }

    pub fn cycle(&self) -> Option<&CycleReport<T>> {
        match self {
            Self::CycleDetected(report) => Some(report),
            Self::AnalyzerFault(_) => None,
        }
    }
}

/// All errors surfaced by the ordering service
#[derive(Debug, Error)]
pub enum OrderingError {
    /// Dependency declarations among the units are circular
    #[error("Dependency cycle detected: {cycle}")]
    CycleDetected {
        cycle: String,
        positions: Vec<UnitIndex>,
    },

    /// Analyzer failure, rendered
    #[error("Dependency analyzer failed: {0}")]
    AnalyzerFault(String),

    /// Input exceeded the configured unit limit
    #[error("Too many units: {count} > {max}")]
    TooManyUnits { count: usize, max: usize },

    /// A produced order broke one of the ordering invariants
    #[error("Ordering invariant violated: {0}")]
    InvariantViolation(String),
}
