//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::Reducer;
use crate::invariants::InvariantRules;
use crate::machine::{StateMachine, DEFAULT_MAX_HISTORY};
use stillwater::validation::Validation;
use tracing::warn;

/// Builder for constructing state machines with a fluent API.
///
/// Defaults: the reducer state's `Default` value, history recording on and
/// capped at [`DEFAULT_MAX_HISTORY`] entries, no invariants.
pub struct StateMachineBuilder<R: Reducer> {
    initial: Option<R::State>,
    record_history: bool,
    max_history: Option<usize>,
    invariants: InvariantRules<R::State>,
}

impl<R: Reducer> StateMachineBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            record_history: true,
            max_history: Some(DEFAULT_MAX_HISTORY),
            invariants: InvariantRules::none(),
        }
    }

    /// Seed the machine with a starting state.
    pub fn initial(mut self, state: R::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Turn transition history on or off.
    pub fn record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Keep at most `limit` history entries, dropping the oldest.
    pub fn max_history(mut self, limit: usize) -> Self {
        self.max_history = Some(limit);
        self
    }

    /// Keep every history entry.
    pub fn unbounded_history(mut self) -> Self {
        self.max_history = None;
        self
    }

    /// Invariants the initial state must satisfy.
    pub fn invariants(mut self, rules: InvariantRules<R::State>) -> Self {
        self.invariants = rules;
        self
    }

    /// Build the state machine.
    /// Returns an error listing every invariant the initial state breaks.
    pub fn build(self) -> Result<StateMachine<R>, BuildError> {
        let initial = self.initial.unwrap_or_default();

        if let Validation::Failure(errors) = self.invariants.enforce(&initial) {
            let violations: Vec<_> = errors.iter().cloned().collect();
            warn!(count = violations.len(), "rejected initial state");
            return Err(BuildError::InvalidInitialState(violations));
        }

        let mut machine = StateMachine::new(initial);
        machine.set_record_history(self.record_history);
        machine.set_max_history(self.max_history);
        Ok(machine)
    }
}

impl<R: Reducer> Default for StateMachineBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Action, CalculatorReducer, CalculatorState, Digit, Operation};
    use crate::invariants::InvariantViolation;
    use crate::machine::Calculator;

    #[test]
    fn defaults_to_cleared_state() {
        let machine = StateMachineBuilder::<CalculatorReducer>::new()
            .build()
            .unwrap();

        assert!(machine.current_state().is_cleared());
        assert!(machine.records_history());
    }

    #[test]
    fn seeds_valid_initial_state() {
        let seed = CalculatorState::default()
            .with_previous_operand("4")
            .with_operation(Operation::Subtract);

        let mut machine = Calculator::builder().initial(seed).build().unwrap();
        machine.dispatch(Action::add_digit(Digit::ONE));
        machine.dispatch(Action::Evaluate);

        assert_eq!(machine.current_state().current_operand(), Some("3"));
    }

    #[test]
    fn rejects_state_breaking_invariants() {
        let seed = CalculatorState::default()
            .with_operation(Operation::Add)
            .with_current_operand("1..2");

        let result = Calculator::builder().initial(seed).build();

        match result {
            Err(BuildError::InvalidInitialState(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&InvariantViolation::OperationWithoutOperand));
            }
            Ok(_) => panic!("Expected invalid initial state"),
        }
    }

    #[test]
    fn generic_builder_skips_invariants() {
        let seed = CalculatorState::default().with_operation(Operation::Add);

        let machine = StateMachineBuilder::<CalculatorReducer>::new()
            .initial(seed.clone())
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), &seed);
    }

    #[test]
    fn history_recording_can_be_disabled() {
        let mut machine = Calculator::builder()
            .record_history(false)
            .build()
            .unwrap();
        machine.dispatch(Action::add_digit(Digit::NINE));

        assert!(machine.history().is_empty());
    }

    #[test]
    fn history_cap_applies_to_long_sessions() {
        let mut machine = Calculator::builder().max_history(100).build().unwrap();

        for _ in 0..10_000 {
            machine.dispatch(Action::add_digit(Digit::ONE));
            machine.dispatch(Action::DeleteDigit);
        }

        assert_eq!(machine.max_history(), Some(100));
        assert_eq!(machine.history().len(), 100);
        assert_eq!(machine.history().transitions()[99].sequence, 20_000);
        assert!(machine.current_state().is_cleared());
    }

    #[test]
    fn default_history_is_capped() {
        let machine = Calculator::builder().build().unwrap();
        assert_eq!(machine.max_history(), Some(DEFAULT_MAX_HISTORY));

        let machine = Calculator::builder().unbounded_history().build().unwrap();
        assert_eq!(machine.max_history(), None);
    }

    #[test]
    fn error_message_lists_violations() {
        let err = BuildError::InvalidInitialState(vec![
            InvariantViolation::OperationWithoutOperand,
        ]);
        assert_eq!(
            err.to_string(),
            "Initial state breaks 1 invariant(s): Operation is set without a previous operand"
        );
    }
}
