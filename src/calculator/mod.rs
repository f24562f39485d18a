//! Four-function calculator built on the core reducer types.
//!
//! - `Action`, `Digit`, `Operation`: keypad input events
//! - `CalculatorState`: immutable record of operands, operator and overwrite flag
//! - `CalculatorReducer`: the transition function
//! - `evaluate`: two-operand arithmetic over operand text
//! - `Screen`: the two display lines for a state

mod action;
mod evaluate;
mod reducer;
mod state;
mod view;

pub use action::{Action, Digit, Operation};
pub use evaluate::{evaluate, evaluate_state, evaluate_symbol, format_number, parse_operand};
pub use reducer::CalculatorReducer;
pub use state::{CalculatorState, Phase};
pub use view::Screen;
