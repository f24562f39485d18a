//! Core state machine types.
//!
//! - States via the `State` trait
//! - Pure transitions via the `Reducer` trait
//! - Guard predicates over states
//! - Immutable transition history
//!
//! Nothing in this module performs I/O or mutates shared data.

mod guard;
mod history;
mod reducer;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use reducer::Reducer;
pub use state::State;
