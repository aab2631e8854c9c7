//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::RelationGraph;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::UnitIndex;
use crate::ports::outbound::DependencyAnalyzer;
use std::fmt;

/// Primary Composition Ordering API
pub trait CompositionOrderingApi {
    /// Order composable units for one target.
    ///
    /// This is the main entry point. It:
    /// 1. Validates the input size
    /// 2. Builds the relation graph
    /// 3. Performs the stable topological sort
    /// 4. Verifies the order (if configured)
    /// 5. Returns the units in their final order
    fn order<T, A>(&self, units: Vec<T>, analyzer: &A) -> Result<Vec<T>, OrderingError>
    where
        T: fmt::Display,
        A: DependencyAnalyzer<T> + ?Sized,
        A::Error: fmt::Display;

    /// Build the relation graph for units without ordering them.
    fn build_graph<T, A>(&self, units: &[T], analyzer: &A) -> Result<RelationGraph, OrderingError>
    where
        A: DependencyAnalyzer<T> + ?Sized,
        A::Error: fmt::Display;

    /// Order a prebuilt graph, returning original positions.
    fn order_graph(&self, graph: &RelationGraph) -> Result<Vec<UnitIndex>, OrderingError>;

    /// Split units into groups linked by dependencies.
    fn group<T, A>(&self, units: &[T], analyzer: &A) -> Result<Vec<Vec<UnitIndex>>, OrderingError>
    where
        A: DependencyAnalyzer<T> + ?Sized,
        A::Error: fmt::Display;
}
