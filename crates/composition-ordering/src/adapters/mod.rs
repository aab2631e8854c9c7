//! # Adapters Layer (Hexagonal Architecture)
//!
//! Ready-made implementations of the `DependencyAnalyzer` port.

mod declared;
mod fn_analyzer;

pub use declared::{DeclaredDependencyAnalyzer, DeclaredUnit, DeclaresDependencies};
pub use fn_analyzer::FnAnalyzer;
