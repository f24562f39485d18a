//! Imperative shell around the pure reducers.
//!
//! The reducer computes; the machine remembers. `StateMachine` owns the
//! current state and its history, and `Calculator` adds keypad entry points.

mod calculator;
mod shell;

pub use calculator::Calculator;
pub use shell::{DispatchResult, StateMachine, DEFAULT_MAX_HISTORY};
