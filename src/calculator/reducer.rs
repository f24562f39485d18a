//! The calculator's transition function.

use super::action::{Action, Digit, Operation};
use super::evaluate::evaluate_state;
use super::state::CalculatorState;
use crate::core::Reducer;

/// Reducer for the four-function calculator.
///
/// Every action is total: inputs that do not apply return the state
/// unchanged.
///
/// ```rust
/// use keypad_calc::calculator::{Action, CalculatorReducer, CalculatorState, Digit, Operation};
/// use keypad_calc::core::Reducer;
///
/// let actions = [
///     Action::add_digit(Digit::FIVE),
///     Action::choose_operation(Operation::Add),
///     Action::add_digit(Digit::THREE),
///     Action::choose_operation(Operation::Add),
///     Action::add_digit(Digit::TWO),
///     Action::Evaluate,
/// ];
///
/// let state = actions
///     .iter()
///     .fold(CalculatorState::default(), |state, action| {
///         CalculatorReducer::reduce(&state, action)
///     });
///
/// assert_eq!(state.current_operand(), Some("10"));
/// assert!(state.overwrite());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Action = Action;

    fn reduce(state: &CalculatorState, action: &Action) -> CalculatorState {
        match action {
            Action::AddDigit { digit } => add_digit(state, *digit),
            Action::ChooseOperation { operation } => choose_operation(state, *operation),
            Action::Clear => CalculatorState::default(),
            Action::DeleteDigit => delete_digit(state),
            Action::Evaluate => evaluate(state),
        }
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite() {
        return state
            .with_current_operand(digit.to_string())
            .with_overwrite(false);
    }

    let current = state.current_operand().unwrap_or_default();
    if digit.is_zero() && current == "0" {
        return state.clone();
    }
    if digit.is_point() && current.contains('.') {
        return state.clone();
    }

    state.with_current_operand(format!("{current}{digit}"))
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    match (state.previous_operand(), state.current_operand()) {
        (None, None) => state.clone(),
        (Some(_), None) => state.with_operation(operation),
        (None, Some(current)) => state
            .with_previous_operand(current)
            .with_operation(operation)
            .without_current_operand(),
        // Chained entry folds the pending expression into the new left operand.
        (Some(_), Some(_)) => state
            .with_previous_operand(evaluate_state(state))
            .with_operation(operation)
            .without_current_operand(),
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite() {
        return state.without_current_operand().with_overwrite(false);
    }

    match state.current_operand() {
        None => state.clone(),
        Some(current) if current.chars().count() == 1 => state.without_current_operand(),
        // An empty operand stays empty; only a single character clears to absent.
        Some(current) => {
            let mut trimmed = current.to_string();
            trimmed.pop();
            state.with_current_operand(trimmed)
        }
    }
}

fn evaluate(state: &CalculatorState) -> CalculatorState {
    if state.operation().is_none()
        || state.current_operand().is_none()
        || state.previous_operand().is_none()
    {
        return state.clone();
    }

    state
        .with_current_operand(evaluate_state(state))
        .without_previous_operand()
        .without_operation()
        .with_overwrite(true)
}
