//! The calculator machine and its keypad conveniences.

use super::shell::{DispatchResult, StateMachine};
use crate::builder::StateMachineBuilder;
use crate::calculator::{CalculatorReducer, CalculatorState, Screen};
use crate::invariants::InvariantRules;
use crate::keypad::{self, KeyError};
use stillwater::validation::Validation;

/// A calculator: the shell driven by [`CalculatorReducer`].
///
/// ```rust
/// use keypad_calc::Calculator;
///
/// let mut calc = Calculator::default();
/// calc.press_all(["5", "+", "3", "+", "2", "="]).unwrap();
///
/// assert_eq!(calc.screen().current, "10");
/// ```
pub type Calculator = StateMachine<CalculatorReducer>;

impl StateMachine<CalculatorReducer> {
    /// Builder preloaded with the calculator invariants.
    pub fn builder() -> StateMachineBuilder<CalculatorReducer> {
        StateMachineBuilder::new().invariants(InvariantRules::calculator())
    }

    /// What the screen shows right now.
    pub fn screen(&self) -> Screen {
        Screen::from(self.current_state())
    }

    /// Press a single key by its label.
    pub fn press(&mut self, label: &str) -> Result<DispatchResult<CalculatorState>, KeyError> {
        let action = keypad::parse_key(label)?;
        Ok(self.dispatch(action))
    }

    /// Press a run of keys.
    ///
    /// Labels are all checked first; if any is unknown nothing is
    /// dispatched and every bad label is returned.
    pub fn press_all<I, T>(&mut self, labels: I) -> Result<Screen, Vec<KeyError>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        match keypad::parse_keys(labels) {
            Validation::Success(actions) => {
                self.dispatch_all(actions);
                Ok(self.screen())
            }
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    /// Press a compact or whitespace-separated key sequence such as `"12+3="`.
    pub fn press_sequence(&mut self, input: &str) -> Result<Screen, Vec<KeyError>> {
        self.press_all(keypad::split_labels(input))
    }
}
