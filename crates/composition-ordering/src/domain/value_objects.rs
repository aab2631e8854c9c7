//! Value objects for Composition Ordering

use serde::{Deserialize, Serialize};

/// Position of a unit in the caller's input sequence.
pub type UnitIndex = usize;

/// Pairwise ordering verdict between two units, as seen from the first one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyRelation {
    /// No constraint known between the two units
    #[default]
    Unrelated,
    /// First unit must be positioned before the second
    MustPrecede,
    /// First unit must be positioned after the second
    MustFollow,
    /// Explicitly independent; ties resolve by original order
    Equivalent,
}

impl DependencyRelation {
    /// The same verdict seen from the other unit.
    pub fn inverse(self) -> Self {
        match self {
            Self::MustPrecede => Self::MustFollow,
            Self::MustFollow => Self::MustPrecede,
            other => other,
        }
    }

    /// Whether this verdict produces an ordering edge.
    ///
    /// `Unrelated` and `Equivalent` never do.
    pub fn is_constraint(self) -> bool {
        matches!(self, Self::MustPrecede | Self::MustFollow)
    }

    /// Normalise the verdict for `(first, second)` into a canonical edge.
    pub fn edge_between(self, first: UnitIndex, second: UnitIndex) -> Option<Edge> {
        match self {
            Self::MustPrecede => Some(Edge::new(first, second)),
            Self::MustFollow => Some(Edge::new(second, first)),
            Self::Unrelated | Self::Equivalent => None,
        }
    }
}

/// Directed ordering edge: `from` must be positioned before `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: UnitIndex,
    pub to: UnitIndex,
}

impl Edge {
    pub fn new(from: UnitIndex, to: UnitIndex) -> Self {
        Self { from, to }
    }

    pub fn reversed(self) -> Self {
        Self::new(self.to, self.from)
    }
}
