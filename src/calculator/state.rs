//! The calculator's state record.

use super::action::Operation;
use super::evaluate::parse_operand;
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Immutable calculator state.
///
/// Every field is optional; the default value is the cleared calculator.
/// Updates go through the `with_*` / `without_*` methods, which return a
/// modified copy.
///
/// The JSON form uses camelCase keys and omits absent fields, so the cleared
/// state serializes as `{}`.
///
/// ```rust
/// use keypad_calc::calculator::{CalculatorState, Operation};
/// use keypad_calc::core::State;
///
/// let state = CalculatorState::default()
///     .with_previous_operand("12")
///     .with_operation(Operation::Multiply);
///
/// assert_eq!(state.name(), "Pending");
/// assert_eq!(state.current_operand(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorState {
    #[serde(skip_serializing_if = "Option::is_none")]
    current_operand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_operand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<Operation>,
    #[serde(skip_serializing_if = "is_false")]
    overwrite: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Coarse position of the calculator in an entry cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing entered.
    Cleared,
    /// An operand is being typed and no operator is pending.
    Entering,
    /// An operator is chosen and the second operand has not started.
    Pending,
    /// Both operands and an operator are present.
    Ready,
    /// A result is shown and the next digit starts a new number.
    Result,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Cleared => "Cleared",
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Ready => "Ready",
            Self::Result => "Result",
        }
    }
}

impl CalculatorState {
    pub fn current_operand(&self) -> Option<&str> {
        self.current_operand.as_deref()
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Whether the next digit replaces the current operand.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.previous_operand, self.operation, &self.current_operand) {
            (_, Some(_), Some(_)) => Phase::Ready,
            (_, Some(_), None) => Phase::Pending,
            _ if self.overwrite => Phase::Result,
            (None, None, None) => Phase::Cleared,
            _ => Phase::Entering,
        }
    }

    pub fn with_current_operand(&self, operand: impl Into<String>) -> Self {
        Self {
            current_operand: Some(operand.into()),
            ..self.clone()
        }
    }

    pub fn without_current_operand(&self) -> Self {
        Self {
            current_operand: None,
            ..self.clone()
        }
    }

    pub fn with_previous_operand(&self, operand: impl Into<String>) -> Self {
        Self {
            previous_operand: Some(operand.into()),
            ..self.clone()
        }
    }

    pub fn without_previous_operand(&self) -> Self {
        Self {
            previous_operand: None,
            ..self.clone()
        }
    }

    pub fn with_operation(&self, operation: Operation) -> Self {
        Self {
            operation: Some(operation),
            ..self.clone()
        }
    }

    pub fn without_operation(&self) -> Self {
        Self {
            operation: None,
            ..self.clone()
        }
    }

    pub fn with_overwrite(&self, overwrite: bool) -> Self {
        Self {
            overwrite,
            ..self.clone()
        }
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        self.phase().name()
    }

    /// True when a committed value is empty, infinite or NaN.
    ///
    /// The digits being typed are not checked; `.` alone is a valid
    /// intermediate entry.
    fn is_error(&self) -> bool {
        let not_finite = |text: &str| !parse_operand(text).is_some_and(f64::is_finite);

        self.previous_operand().is_some_and(not_finite)
            || (self.overwrite && self.current_operand().is_some_and(not_finite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cleared() {
        let state = CalculatorState::default();
        assert!(state.is_cleared());
        assert_eq!(state.phase(), Phase::Cleared);
        assert!(!state.overwrite());
    }

    #[test]
    fn functional_update_leaves_original_untouched() {
        let original = CalculatorState::default().with_current_operand("4");
        let updated = original.with_operation(Operation::Subtract);

        assert_eq!(original.operation(), None);
        assert_eq!(updated.operation(), Some(Operation::Subtract));
        assert_eq!(updated.current_operand(), Some("4"));
    }

    #[test]
    fn phase_tracks_entry_cycle() {
        let entering = CalculatorState::default().with_current_operand("3");
        assert_eq!(entering.name(), "Entering");

        let pending = CalculatorState::default()
            .with_previous_operand("3")
            .with_operation(Operation::Add);
        assert_eq!(pending.name(), "Pending");

        let ready = pending.with_current_operand("4");
        assert_eq!(ready.name(), "Ready");

        let result = CalculatorState::default()
            .with_current_operand("7")
            .with_overwrite(true);
        assert_eq!(result.name(), "Result");
    }

    #[test]
    fn error_flags_non_finite_results() {
        let infinite = CalculatorState::default()
            .with_current_operand("Infinity")
            .with_overwrite(true);
        assert!(infinite.is_error());

        let empty = CalculatorState::default()
            .with_current_operand("")
            .with_overwrite(true);
        assert!(empty.is_error());

        let typing_point = CalculatorState::default().with_current_operand(".");
        assert!(!typing_point.is_error());

        let chained_nan = CalculatorState::default()
            .with_previous_operand("NaN")
            .with_operation(Operation::Add);
        assert!(chained_nan.is_error());
    }

    #[test]
    fn cleared_state_serializes_to_empty_object() {
        assert_eq!(
            serde_json::to_string(&CalculatorState::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn json_uses_camel_case_and_symbols() {
        let state = CalculatorState::default()
            .with_previous_operand("8")
            .with_operation(Operation::Divide)
            .with_current_operand("2");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["previousOperand"], "8");
        assert_eq!(json["operation"], "÷");
        assert_eq!(json["currentOperand"], "2");
        assert!(json.get("overwrite").is_none());

        let back: CalculatorState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn missing_fields_deserialize_as_absent() {
        let state: CalculatorState = serde_json::from_str(r#"{"overwrite":true}"#).unwrap();
        assert!(state.overwrite());
        assert_eq!(state.current_operand(), None);
    }
}
