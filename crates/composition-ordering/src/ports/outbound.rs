//! Outbound Ports (Driven Ports / SPI)

use crate::domain::value_objects::DependencyRelation;

/// Pairwise dependency analyzer supplied by the caller.
///
/// `relation(a, b)` reports how `a` must be placed relative to `b`. For the
/// duration of one ordering call the answers must be a pure function of the
/// pair and antisymmetric: `MustPrecede` for `(a, b)` means `MustFollow` for
/// `(b, a)`. The engine never asks about a unit and itself.
///
/// Errors are opaque to the engine and abort the ordering call unchanged.
pub trait DependencyAnalyzer<T: ?Sized> {
    type Error;

    fn relation(&self, first: &T, second: &T) -> Result<DependencyRelation, Self::Error>;
}
