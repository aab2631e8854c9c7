//! # Composition Ordering
//!
//! Dependency-ordered composition sorter. Takes composable units in their
//! declared order plus a pairwise dependency analyzer and produces one
//! deterministic order that respects every constraint, or reports the exact
//! cycle that makes ordering impossible.
//!
//! ## Architecture
//!
//! - **Domain**: Relation values, RelationGraph, CycleReport, errors, invariants
//! - **Algorithms**: Relation graph building, stable Kahn's sort, minimal cycle search, grouping
//! - **Engine**: `sort` / `order_indices` free functions
//! - **Ports**: Inbound (CompositionOrderingApi) and Outbound (DependencyAnalyzer)
//! - **Adapters**: Closure and declaration-based analyzers
//! - **Application**: Service orchestration
//!
//! ## Example
//!
//! ```
//! use composition_ordering::{sort, DeclaredDependencyAnalyzer, DeclaredUnit};
//!
//! let units = vec![
//!     DeclaredUnit::new("Logging").after("Validation"),
//!     DeclaredUnit::new("Validation"),
//! ];
//! let ordered = sort(units, &DeclaredDependencyAnalyzer::new()).unwrap();
//! assert_eq!(ordered[0].name, "Validation");
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ports;

pub use adapters::{DeclaredDependencyAnalyzer, DeclaredUnit, DeclaresDependencies, FnAnalyzer};
pub use application::service::CompositionOrderingService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::errors::{OrderingError, SortError};
pub use domain::value_objects::*;
pub use engine::{order_indices, sort};
pub use ports::inbound::CompositionOrderingApi;
pub use ports::outbound::DependencyAnalyzer;
