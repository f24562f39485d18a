//! Invariant rules evaluated with `Validation`.

use crate::calculator::{parse_operand, CalculatorState};
use crate::core::State;
use crate::invariants::builder::InvariantBuilder;
use crate::invariants::violations::InvariantViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for invariant check functions
pub type InvariantCheck<S> =
    Box<dyn Fn(&S) -> Validation<(), NonEmptyVec<InvariantViolation>> + Send + Sync>;

/// A set of invariants over a state type.
/// Checking accumulates ALL violations rather than stopping at the first.
pub struct InvariantRules<S: State> {
    pub(crate) checks: Vec<InvariantCheck<S>>,
}

impl<S: State> InvariantRules<S> {
    /// Rules that accept every state.
    pub fn none() -> Self {
        Self { checks: Vec::new() }
    }

    /// Check every rule against the state.
    /// Returns `Validation::Failure` with every violation if any rule fails.
    pub fn enforce(&self, state: &S) -> Validation<(), NonEmptyVec<InvariantViolation>> {
        if self.checks.is_empty() {
            return Validation::success(());
        }

        let checks: Vec<Validation<(), NonEmptyVec<InvariantViolation>>> =
            self.checks.iter().map(|check| check(state)).collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Like [`enforce`](Self::enforce), flattened into a plain list.
    pub fn violations(&self, state: &S) -> Vec<InvariantViolation> {
        match self.enforce(state) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<S: State> Default for InvariantRules<S> {
    fn default() -> Self {
        Self::none()
    }
}

impl InvariantRules<CalculatorState> {
    /// The invariants every reachable calculator state satisfies.
    pub fn calculator() -> Self {
        InvariantBuilder::new()
            .require_guard(
                |s: &CalculatorState| s.operation().is_none() || s.previous_operand().is_some(),
                InvariantViolation::OperationWithoutOperand,
            )
            .require(|s: &CalculatorState| match (s.previous_operand(), s.operation()) {
                (Some(operand), None) => Validation::fail(InvariantViolation::OperandWithoutOperation {
                    operand: operand.to_string(),
                }),
                _ => Validation::success(()),
            })
            .require(|s: &CalculatorState| match s.current_operand() {
                Some(operand) if operand.matches('.').count() > 1 => {
                    Validation::fail(InvariantViolation::TooManyDecimalPoints {
                        operand: operand.to_string(),
                    })
                }
                _ => Validation::success(()),
            })
            .require(|s: &CalculatorState| {
                let checks: Vec<Validation<(), NonEmptyVec<InvariantViolation>>> = [
                    s.previous_operand(),
                    s.current_operand(),
                ]
                .into_iter()
                .flatten()
                .map(|operand| {
                    if is_operand_text(operand) {
                        Validation::success(())
                    } else {
                        Validation::fail(InvariantViolation::MalformedOperand {
                            operand: operand.to_string(),
                        })
                    }
                })
                .collect();

                if checks.is_empty() {
                    Validation::success(())
                } else {
                    Validation::all_vec(checks).map(|_| ())
                }
            })
            .build()
    }
}

/// Text that digit entry or an evaluation can leave in an operand.
fn is_operand_text(operand: &str) -> bool {
    operand.is_empty()
        || operand == "NaN"
        || operand.chars().all(|c| c.is_ascii_digit() || c == '.')
        || parse_operand(operand).is_some()
}
