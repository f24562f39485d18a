//! Keypad labels to actions.
//!
//! The keypad carries `0`-`9`, `.`, the operators `+ - * ÷`, and the `AC`,
//! `DEL` and `=` keys. `/` is accepted as an ASCII spelling of `÷`, and the
//! word keys are matched case-insensitively.
//!
//! Parsing a whole sequence uses Stillwater's `Validation`, so every bad
//! label is reported at once instead of stopping at the first.
//!
//! ```rust
//! use keypad_calc::keypad::parse_sequence;
//! use stillwater::validation::Validation;
//!
//! match parse_sequence("7x+y=") {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("expected bad keys"),
//! }
//! ```

mod error;

pub use error::KeyError;

use crate::calculator::{Action, Digit, Operation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Labels in the order they appear on the keypad, top row first.
pub const LABELS: [&str; 18] = [
    "AC", "DEL", "÷", "1", "2", "3", "*", "4", "5", "6", "+", "7", "8", "9", "-", ".", "0", "=",
];

const WORD_KEYS: [&str; 2] = ["AC", "DEL"];

/// Map one key label to its action.
pub fn parse_key(label: &str) -> Result<Action, KeyError> {
    let label = label.trim();

    if label.eq_ignore_ascii_case("AC") {
        return Ok(Action::Clear);
    }
    if label.eq_ignore_ascii_case("DEL") {
        return Ok(Action::DeleteDigit);
    }
    if label == "=" {
        return Ok(Action::Evaluate);
    }
    if let Some(operation) = Operation::from_symbol(label) {
        return Ok(Action::choose_operation(operation));
    }

    label.parse::<Digit>().map(Action::add_digit)
}

/// Map every label, accumulating all unknown ones.
///
/// Errors carry the zero-based position of the label in the input.
pub fn parse_keys<I, T>(labels: I) -> Validation<Vec<Action>, NonEmptyVec<KeyError>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let checks: Vec<Validation<Action, NonEmptyVec<KeyError>>> = labels
        .into_iter()
        .enumerate()
        .map(|(position, label)| match parse_key(label.as_ref()) {
            Ok(action) => Validation::success(action),
            Err(error) => Validation::fail(error.at_position(position)),
        })
        .collect();

    if checks.is_empty() {
        return Validation::success(Vec::new());
    }

    Validation::all_vec(checks)
}

/// Split a key sequence into labels and parse them.
///
/// Whitespace-separated input is split on whitespace. Compact input such as
/// `"12+3="` or `"9DEL8AC"` is split into single characters, with `AC` and
/// `DEL` recognised as whole words.
pub fn parse_sequence(input: &str) -> Validation<Vec<Action>, NonEmptyVec<KeyError>> {
    parse_keys(split_labels(input))
}

/// Labels of a key sequence without mapping them.
pub fn split_labels(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.contains(char::is_whitespace) {
        return input.split_whitespace().map(str::to_string).collect();
    }

    let mut labels = Vec::new();
    let mut rest = input;
    'scan: while !rest.is_empty() {
        for word in WORD_KEYS {
            if let Some(head) = rest.get(..word.len()) {
                if head.eq_ignore_ascii_case(word) {
                    labels.push(head.to_string());
                    rest = &rest[word.len()..];
                    continue 'scan;
                }
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            labels.push(c.to_string());
        }
        rest = chars.as_str();
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keypad_label_parses() {
        for label in LABELS {
            assert!(parse_key(label).is_ok(), "label {label} should parse");
        }
    }

    #[test]
    fn word_keys_are_case_insensitive() {
        assert_eq!(parse_key("ac").unwrap(), Action::Clear);
        assert_eq!(parse_key("Del").unwrap(), Action::DeleteDigit);
    }

    #[test]
    fn slash_maps_to_divide() {
        assert_eq!(
            parse_key("/").unwrap(),
            Action::choose_operation(Operation::Divide)
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(parse_key("%").unwrap_err().key(), "%");
        assert_eq!(parse_key("10").unwrap_err(), KeyError::unknown("10"));
    }

    #[test]
    fn compact_sequence_splits_word_keys() {
        assert_eq!(
            split_labels("9DEL8ac1="),
            vec!["9", "DEL", "8", "ac", "1", "="]
        );
    }

    #[test]
    fn spaced_sequence_splits_on_whitespace() {
        assert_eq!(split_labels(" 1 ÷ 4  = "), vec!["1", "÷", "4", "="]);
    }

    #[test]
    fn sequence_parses_in_order() {
        match parse_sequence("5+3=") {
            Validation::Success(actions) => assert_eq!(
                actions,
                vec![
                    Action::add_digit(Digit::FIVE),
                    Action::choose_operation(Operation::Add),
                    Action::add_digit(Digit::THREE),
                    Action::Evaluate,
                ]
            ),
            Validation::Failure(errors) => panic!("unexpected {} bad keys", errors.len()),
        }
    }

    #[test]
    fn sequence_accumulates_every_bad_key() {
        match parse_sequence("1 x 2 ? =") {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                let positions: Vec<_> = errors
                    .iter()
                    .map(|e| match e {
                        KeyError::UnknownKeyAt { position, .. } => *position,
                        KeyError::UnknownKey { .. } => usize::MAX,
                    })
                    .collect();
                assert_eq!(positions, vec![1, 3]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_sequence_is_empty_success() {
        match parse_sequence("") {
            Validation::Success(actions) => assert!(actions.is_empty()),
            Validation::Failure(_) => panic!("empty input should parse"),
        }
    }
}
