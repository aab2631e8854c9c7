//! Declared Dependency Analyzer Adapter
//!
//! Implements `DependencyAnalyzer` for units that list, by key, which other
//! units they must run after and before.

use crate::domain::value_objects::DependencyRelation;
use crate::ports::outbound::DependencyAnalyzer;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// A unit carrying its own ordering declarations.
pub trait DeclaresDependencies {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;

    /// Keys of units this one must be positioned after.
    fn runs_after(&self) -> &[Self::Key];

    /// Keys of units this one must be positioned before.
    fn runs_before(&self) -> &[Self::Key];
}

/// Answers from both units' declarations.
///
/// `a` goes first when `a` declares "before b" or `b` declares "after a".
/// Declarations pointing both ways make both units claim to go first, which
/// the engine reports as a 2-cycle. Two units with the same key are
/// `Equivalent`.
pub struct DeclaredDependencyAnalyzer<U> {
    _unit: PhantomData<fn(&U)>,
}

impl<U> DeclaredDependencyAnalyzer<U> {
    pub fn new() -> Self {
        Self {
            _unit: PhantomData,
        }
    }
}

impl<U> Default for DeclaredDependencyAnalyzer<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: DeclaresDependencies> DependencyAnalyzer<U> for DeclaredDependencyAnalyzer<U> {
    type Error = Infallible;

    fn relation(&self, first: &U, second: &U) -> Result<DependencyRelation, Infallible> {
        if first.key() == second.key() {
            return Ok(DependencyRelation::Equivalent);
        }

        let first_goes_first = first.runs_before().contains(second.key())
            || second.runs_after().contains(first.key());
        let second_goes_first = first.runs_after().contains(second.key())
            || second.runs_before().contains(first.key());

        Ok(match (first_goes_first, second_goes_first) {
            (true, _) => DependencyRelation::MustPrecede,
            (false, true) => DependencyRelation::MustFollow,
            (false, false) => DependencyRelation::Unrelated,
        })
    }
}

/// Named unit with explicit ordering declarations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredUnit {
    pub name: String,
    #[serde(default)]
    pub after: Vec<String>,
    #[serde(default)]
    pub before: Vec<String>,
}

impl DeclaredUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            after: Vec::new(),
            before: Vec::new(),
        }
    }

    pub fn after(mut self, key: impl Into<String>) -> Self {
        self.after.push(key.into());
        self
    }

    pub fn before(mut self, key: impl Into<String>) -> Self {
        self.before.push(key.into());
        self
    }
}

impl DeclaresDependencies for DeclaredUnit {
    type Key = String;

    fn key(&self) -> &String {
        &self.name
    }

    fn runs_after(&self) -> &[String] {
        &self.after
    }

    fn runs_before(&self) -> &[String] {
        &self.before
    }
}

impl fmt::Display for DeclaredUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
