//! Algorithms module for Composition Ordering
//!
//! Contains:
//! - Relation graph builder
//! - Stable Kahn's topological sort
//! - Minimal cycle finder
//! - Dependency grouper

pub mod cycle_finder;
pub mod dependency_builder;
pub mod grouper;
pub mod kahns;

pub use cycle_finder::find_minimal_cycle;
pub use dependency_builder::build_relation_graph;
pub use grouper::group_dependent_units;
pub use kahns::stable_topological_order;
