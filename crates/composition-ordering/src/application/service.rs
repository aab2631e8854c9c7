//! Composition Ordering Service
//!
//! Main service implementing CompositionOrderingApi.

use crate::algorithms::{build_relation_graph, group_dependent_units, stable_topological_order};
use crate::config::OrderingConfig;
use crate::domain::entities::{CycleReport, RelationGraph};
use crate::domain::errors::OrderingError;
use crate::domain::invariants::{
    invariant_constraints_satisfied, invariant_permutation, invariant_stability,
};
use crate::domain::value_objects::UnitIndex;
use crate::engine::permute;
use crate::ports::inbound::CompositionOrderingApi;
use crate::ports::outbound::DependencyAnalyzer;
use rayon::prelude::*;
use std::fmt;

use tracing::{debug, error, info, warn};

/// Composition Ordering Service
///
/// Orchestrates the ordering pipeline:
/// 1. Validate input
/// 2. Build relation graph
/// 3. Execute stable Kahn's algorithm
/// 4. Verify the order
/// 5. Return the ordered units
pub struct CompositionOrderingService {
    config: OrderingConfig,
}

impl CompositionOrderingService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: OrderingConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: OrderingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Order several independent inputs in parallel against one analyzer.
    ///
    /// Results come back in input order; one failing input does not affect
    /// the others.
    pub fn order_batch<T, A>(
        &self,
        batches: Vec<Vec<T>>,
        analyzer: &A,
    ) -> Vec<Result<Vec<T>, OrderingError>>
    where
        T: fmt::Display + Send,
        A: DependencyAnalyzer<T> + Sync + ?Sized,
        A::Error: fmt::Display,
    {
        debug!(batch_count = batches.len(), "Ordering batch in parallel");

        batches
            .into_par_iter()
            .map(|units| self.order(units, analyzer))
            .collect()
    }

    /// Validate unit count
    fn validate_units(&self, count: usize) -> Result<(), OrderingError> {
        if count > self.config.max_units {
            warn!(
                count,
                max = self.config.max_units,
                "Rejecting ordering request above unit limit"
            );
            return Err(OrderingError::TooManyUnits {
                count,
                max: self.config.max_units,
            });
        }

        Ok(())
    }

    /// Check a produced order against the graph it came from
    fn verify(&self, order: &[UnitIndex], graph: &RelationGraph) -> Result<(), OrderingError> {
        let violation = if !invariant_permutation(order, graph.node_count()) {
            Some("order is not a permutation of the input")
        } else if !invariant_constraints_satisfied(order, graph) {
            Some("order breaks a dependency constraint")
        } else if !invariant_stability(order, graph) {
            Some("order swaps units without a constraint forcing it")
        } else {
            None
        };

        match violation {
            Some(reason) => {
                error!(?order, reason, "Produced order failed verification");
                Err(OrderingError::InvariantViolation(reason.to_string()))
            }
            None => Ok(()),
        }
    }
}

impl Default for CompositionOrderingService {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle_error<T: fmt::Display>(cycle: &CycleReport<T>) -> OrderingError {
    let path = cycle.path();
    warn!(cycle = %path, "Dependency cycle detected");
    OrderingError::CycleDetected {
        cycle: path,
        positions: cycle.positions().to_vec(),
    }
}

/// Build the relation graph, rendering analyzer faults for consumers.
fn query_relations<T, A>(units: &[T], analyzer: &A) -> Result<RelationGraph, OrderingError>
where
    A: DependencyAnalyzer<T> + ?Sized,
    A::Error: fmt::Display,
{
    build_relation_graph(units, analyzer).map_err(|fault| {
        warn!(error = %fault, "Dependency analyzer failed");
        OrderingError::AnalyzerFault(fault.to_string())
    })
}

impl CompositionOrderingApi for CompositionOrderingService {
    fn order<T, A>(&self, units: Vec<T>, analyzer: &A) -> Result<Vec<T>, OrderingError>
    where
        T: fmt::Display,
        A: DependencyAnalyzer<T> + ?Sized,
        A::Error: fmt::Display,
    {
        // 1. Validate input
        self.validate_units(units.len())?;

        if units.is_empty() {
            return Ok(units);
        }

        info!(unit_count = units.len(), "Ordering composable units");

        // 2. Build relation graph
        let graph = query_relations(&units, analyzer)?;

        // 3. Stable sort
        let order = match stable_topological_order(&graph) {
            Ok(order) => order,
            Err(cycle) => {
                let named = CycleReport::new(
                    cycle.positions().iter().map(|&p| &units[p]).collect(),
                    cycle.positions().to_vec(),
                );
                return Err(cycle_error(&named));
            }
        };

        // 4. Verify
        if self.config.verify_result {
            self.verify(&order, &graph)?;
        }

        info!(
            unit_count = order.len(),
            edge_count = graph.edge_count(),
            analyzer_calls = graph.analyzer_calls,
            "Composition ordering complete"
        );

        // 5. Rearrange
        Ok(permute(units, &order))
    }

    fn build_graph<T, A>(&self, units: &[T], analyzer: &A) -> Result<RelationGraph, OrderingError>
    where
        A: DependencyAnalyzer<T> + ?Sized,
        A::Error: fmt::Display,
    {
        self.validate_units(units.len())?;
        query_relations(units, analyzer)
    }

    fn order_graph(&self, graph: &RelationGraph) -> Result<Vec<UnitIndex>, OrderingError> {
        self.validate_units(graph.node_count())?;

        let order = stable_topological_order(graph).map_err(|cycle| cycle_error(&cycle))?;

        if self.config.verify_result {
            self.verify(&order, graph)?;
        }

        Ok(order)
    }

    fn group<T, A>(&self, units: &[T], analyzer: &A) -> Result<Vec<Vec<UnitIndex>>, OrderingError>
    where
        A: DependencyAnalyzer<T> + ?Sized,
        A::Error: fmt::Display,
    {
        let graph = self.build_graph(units, analyzer)?;
        let groups = group_dependent_units(&graph);

        debug!(
            unit_count = units.len(),
            group_count = groups.len(),
            "Grouped dependent units"
        );

        Ok(groups)
    }
}
