//! Keypad Calc: a four-function calculator as a pure functional state machine
//!
//! The calculator follows a "pure core, imperative shell" split. A reducer
//! maps `(state, action)` to a new state with no side effects; a thin
//! machine shell owns the current value, records history and logs through
//! `tracing`.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, an immutable record of the two operands,
//!   the pending operation and the overwrite flag
//! - **Actions**: keypad events (`AddDigit`, `ChooseOperation`, `Clear`,
//!   `DeleteDigit`, `Evaluate`)
//! - **Reducer**: `CalculatorReducer`, total over every state and action
//! - **Evaluator**: two operands, one operator, eager left-to-right chaining
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::calculator::{Action, CalculatorReducer, CalculatorState, Digit, Operation};
//! use keypad_calc::core::Reducer;
//!
//! let state = CalculatorState::default();
//! let state = CalculatorReducer::reduce(&state, &Action::add_digit(Digit::SIX));
//! let state = CalculatorReducer::reduce(&state, &Action::choose_operation(Operation::Divide));
//! let state = CalculatorReducer::reduce(&state, &Action::add_digit(Digit::ZERO));
//! let state = CalculatorReducer::reduce(&state, &Action::Evaluate);
//!
//! assert_eq!(state.current_operand(), Some("Infinity"));
//! ```

pub mod builder;
pub mod calculator;
pub mod core;
pub mod invariants;
pub mod keypad;
pub mod machine;

// Re-export commonly used types
pub use calculator::{Action, CalculatorReducer, CalculatorState, Digit, Operation, Screen};
pub use self::core::{Guard, Reducer, State, StateHistory, StateTransition};
pub use machine::{Calculator, DispatchResult, StateMachine};
