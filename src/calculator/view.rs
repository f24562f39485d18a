//! Text the calculator screen shows for a state.

use super::state::CalculatorState;
use std::fmt;

/// The two lines of the calculator screen.
///
/// `previous` holds the committed operand and pending operator,
/// `current` holds the operand being typed or the last result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    pub previous: String,
    pub current: String,
}

impl From<&CalculatorState> for Screen {
    fn from(state: &CalculatorState) -> Self {
        let operation = state.operation().map(|op| op.symbol()).unwrap_or_default();
        let previous = format!("{} {}", state.previous_operand().unwrap_or_default(), operation);

        Self {
            previous: previous.trim().to_string(),
            current: state.current_operand().unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous)?;
        write!(f, "{}", self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn cleared_state_renders_blank() {
        let screen = Screen::from(&CalculatorState::default());
        assert_eq!(screen, Screen::default());
    }

    #[test]
    fn pending_expression_renders_on_top_line() {
        let state = CalculatorState::default()
            .with_previous_operand("12")
            .with_operation(Operation::Divide)
            .with_current_operand("4");

        let screen = Screen::from(&state);
        assert_eq!(screen.previous, "12 ÷");
        assert_eq!(screen.current, "4");
        assert_eq!(screen.to_string(), "12 ÷\n4");
    }

    #[test]
    fn empty_result_renders_nothing() {
        let state = CalculatorState::default()
            .with_current_operand("")
            .with_overwrite(true);
        assert_eq!(Screen::from(&state).current, "");
    }
}
