//! Validation-based invariant checks for states.
//!
//! Rules are checked with Stillwater's `Validation`, which accumulates every
//! violation instead of failing fast. The machine builder uses them to vet
//! a seeded initial state.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::calculator::CalculatorState;
//! use keypad_calc::invariants::{InvariantRules, InvariantViolation};
//!
//! let rules = InvariantRules::calculator();
//! let state = CalculatorState::default().with_current_operand("1.2.3");
//!
//! assert!(matches!(
//!     rules.violations(&state).as_slice(),
//!     [InvariantViolation::TooManyDecimalPoints { .. }]
//! ));
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::InvariantBuilder;
pub use rules::InvariantRules;
pub use violations::InvariantViolation;
