//! Build errors for the state machine builder.

use crate::invariants::InvariantViolation;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state breaks {} invariant(s): {}", .0.len(), describe(.0))]
    InvalidInitialState(Vec<InvariantViolation>),
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
