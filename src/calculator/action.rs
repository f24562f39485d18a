//! Keypad actions and the values they carry.

use crate::keypad::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single keypad character that can be appended to an operand: `0`-`9` or `.`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const ONE: Digit = Digit('1');
    pub const TWO: Digit = Digit('2');
    pub const THREE: Digit = Digit('3');
    pub const FOUR: Digit = Digit('4');
    pub const FIVE: Digit = Digit('5');
    pub const SIX: Digit = Digit('6');
    pub const SEVEN: Digit = Digit('7');
    pub const EIGHT: Digit = Digit('8');
    pub const NINE: Digit = Digit('9');
    pub const POINT: Digit = Digit('.');

    /// Every key on the digit pad, in `0`-`9`, `.` order.
    pub const ALL: [Digit; 11] = [
        Self::ZERO,
        Self::ONE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
        Self::POINT,
    ];

    /// Returns `None` for anything other than an ASCII digit or `.`.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Digit(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }

    pub fn is_zero(self) -> bool {
        self.0 == '0'
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Digit {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::new(c).ok_or_else(|| KeyError::unknown(s)),
            _ => Err(KeyError::unknown(s)),
        }
    }
}

impl TryFrom<String> for Digit {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Digit> for String {
    fn from(digit: Digit) -> Self {
        digit.0.to_string()
    }
}

/// One of the four binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
    ];

    /// The symbol printed on the key.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Accepts the key symbols plus `/` as an ASCII spelling of `÷`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// IEEE-754 arithmetic; division by zero is not special-cased.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| KeyError::unknown(s))
    }
}

/// Input events dispatched by the keypad.
///
/// The serialized form is adjacently tagged, e.g.
/// `{"type":"add-digit","payload":{"digit":"5"}}` or `{"type":"clear"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    AddDigit { digit: Digit },
    ChooseOperation { operation: Operation },
    Clear,
    DeleteDigit,
    Evaluate,
}

impl Action {
    pub fn add_digit(digit: Digit) -> Self {
        Self::AddDigit { digit }
    }

    pub fn choose_operation(operation: Operation) -> Self {
        Self::ChooseOperation { operation }
    }

    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDigit { .. } => "add-digit",
            Self::ChooseOperation { .. } => "choose-operation",
            Self::Clear => "clear",
            Self::DeleteDigit => "delete-digit",
            Self::Evaluate => "evaluate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit { digit } => write!(f, "{digit}"),
            Self::ChooseOperation { operation } => write!(f, "{operation}"),
            Self::Clear => f.write_str("AC"),
            Self::DeleteDigit => f.write_str("DEL"),
            Self::Evaluate => f.write_str("="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_accepts_only_keypad_characters() {
        assert_eq!(Digit::new('4'), Some(Digit::FOUR));
        assert_eq!(Digit::new('.'), Some(Digit::POINT));
        assert_eq!(Digit::new('a'), None);
        assert_eq!(Digit::new('-'), None);
    }

    #[test]
    fn digit_from_str_rejects_multiple_characters() {
        assert_eq!("8".parse::<Digit>().unwrap(), Digit::EIGHT);
        assert!("12".parse::<Digit>().is_err());
        assert!("".parse::<Digit>().is_err());
    }

    #[test]
    fn operation_symbols_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol("/"), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol("%"), None);
    }

    #[test]
    fn divide_by_zero_follows_ieee() {
        assert_eq!(Operation::Divide.apply(6.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-6.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn action_wire_shape_matches_keypad_events() {
        let action: Action =
            serde_json::from_str(r#"{"type":"add-digit","payload":{"digit":"7"}}"#).unwrap();
        assert_eq!(action, Action::add_digit(Digit::SEVEN));

        let action: Action =
            serde_json::from_str(r#"{"type":"choose-operation","payload":{"operation":"÷"}}"#)
                .unwrap();
        assert_eq!(action, Action::choose_operation(Operation::Divide));

        let action: Action = serde_json::from_str(r#"{"type":"evaluate"}"#).unwrap();
        assert_eq!(action, Action::Evaluate);
    }

    #[test]
    fn action_rejects_bad_digit_payload() {
        let result: Result<Action, _> =
            serde_json::from_str(r#"{"type":"add-digit","payload":{"digit":"x"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn action_serializes_with_kebab_tag() {
        let json = serde_json::to_value(Action::add_digit(Digit::POINT)).unwrap();
        assert_eq!(json["type"], "add-digit");
        assert_eq!(json["payload"]["digit"], ".");
    }
}
