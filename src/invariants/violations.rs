//! Invariant violation errors.

use thiserror::Error;

/// A property a state is required to hold but does not
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Current operand '{operand}' has more than one decimal point")]
    TooManyDecimalPoints { operand: String },

    #[error("Operation is set without a previous operand")]
    OperationWithoutOperand,

    #[error("Previous operand '{operand}' has no pending operation")]
    OperandWithoutOperation { operand: String },

    #[error("Operand '{operand}' is neither keypad entry nor a result")]
    MalformedOperand { operand: String },

    #[error("Invariant check failed: {message}")]
    CustomCheckFailed { message: String },
}
