//! Builder API for invariant rules.

use crate::core::{Guard, State};
use crate::invariants::rules::{InvariantCheck, InvariantRules};
use crate::invariants::violations::InvariantViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating invariant rules
pub struct InvariantBuilder<S: State> {
    checks: Vec<InvariantCheck<S>>,
}

impl<S: State + 'static> InvariantBuilder<S> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Start from an existing rule set.
    pub fn extend(rules: InvariantRules<S>) -> Self {
        Self {
            checks: rules.checks,
        }
    }

    /// Add a check that may report several violations
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&S) -> Validation<(), NonEmptyVec<InvariantViolation>> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a guard that must hold, reporting `violation` when it does not
    pub fn require_guard<F>(mut self, predicate: F, violation: InvariantViolation) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        let guard = Guard::new(predicate);
        let check = move |state: &S| {
            if guard.check(state) {
                Validation::success(())
            } else {
                Validation::fail(violation.clone())
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Add a guard with a free-form failure message
    pub fn require_pred<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        let violation = InvariantViolation::CustomCheckFailed {
            message: message.into(),
        };
        self.require_guard(predicate, violation)
    }

    pub fn build(self) -> InvariantRules<S> {
        InvariantRules {
            checks: self.checks,
        }
    }
}

impl<S: State + 'static> Default for InvariantBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
