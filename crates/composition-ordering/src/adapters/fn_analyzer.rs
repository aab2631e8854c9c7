//! Closure Analyzer Adapter
//!
//! Implements `DependencyAnalyzer` for a plain function or closure.

use crate::domain::value_objects::DependencyRelation;
use crate::ports::outbound::DependencyAnalyzer;

/// Wraps `Fn(&T, &T) -> Result<DependencyRelation, E>` as an analyzer.
pub struct FnAnalyzer<F> {
    relation: F,
}

impl<F> FnAnalyzer<F> {
    pub fn new(relation: F) -> Self {
        Self { relation }
    }
}

impl<T, F, E> DependencyAnalyzer<T> for FnAnalyzer<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Result<DependencyRelation, E>,
{
    type Error = E;

    fn relation(&self, first: &T, second: &T) -> Result<DependencyRelation, E> {
        (self.relation)(first, second)
    }
}
