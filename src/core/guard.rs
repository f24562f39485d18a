//! Guard predicates over states.
//!
//! A guard is a pure boolean function of a state. Invariant rules are built
//! from guards, and the shell uses them to decide whether a state is
//! acceptable as a starting point.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate over a state.
///
/// # Example
///
/// ```rust
/// use keypad_calc::calculator::CalculatorState;
/// use keypad_calc::core::Guard;
///
/// let has_operand = Guard::new(|s: &CalculatorState| s.current_operand().is_some());
///
/// assert!(!has_operand.check(&CalculatorState::default()));
/// assert!(has_operand.check(&CalculatorState::default().with_current_operand("7")));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure, thread-safe predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check whether the state satisfies the predicate.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
