//! Two-operand evaluation and number text conversion.
//!
//! Operands and results travel as text. A result that cannot be computed is
//! the empty string, which the view renders as nothing.

use super::action::Operation;
use super::state::CalculatorState;

const EXPONENT_UPPER: f64 = 1e21;
const EXPONENT_LOWER: f64 = 1e-6;

/// Combine two operand strings with one operation.
///
/// Returns `""` if either operand is empty or does not parse.
///
/// ```rust
/// use keypad_calc::calculator::{evaluate, Operation};
///
/// assert_eq!(evaluate("2", "3", Operation::Add), "5");
/// assert_eq!(evaluate("6", "0", Operation::Divide), "Infinity");
/// assert_eq!(evaluate("abc", "3", Operation::Add), "");
/// ```
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    match (parse_operand(previous), parse_operand(current)) {
        (Some(lhs), Some(rhs)) => format_number(operation.apply(lhs, rhs)),
        _ => String::new(),
    }
}

/// Like [`evaluate`], with the operation given as its key symbol.
///
/// Unknown symbols produce `""`.
pub fn evaluate_symbol(previous: &str, current: &str, symbol: &str) -> String {
    Operation::from_symbol(symbol)
        .map(|operation| evaluate(previous, current, operation))
        .unwrap_or_default()
}

/// Evaluate the pending expression held by a state.
///
/// `""` unless both operands and the operation are present.
pub fn evaluate_state(state: &CalculatorState) -> String {
    match (
        state.previous_operand(),
        state.current_operand(),
        state.operation(),
    ) {
        (Some(previous), Some(current), Some(operation)) => {
            evaluate(previous, current, operation)
        }
        _ => String::new(),
    }
}

/// Parse operand text as produced by digit entry or by a previous result.
///
/// Accepts plain decimals (`12`, `5.`, `.5`), exponent forms (`1e+21`) and
/// `Infinity` with an optional sign. NaN is treated as unparseable.
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // f64::from_str also takes "inf" and "nan"; operands never spell those.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    text.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Canonical text for a result.
///
/// Shortest round-trip digits, no trailing `.0`, exponent form outside
/// `[1e-6, 1e21)`, and `Infinity`/`NaN` spelled out.
///
/// ```rust
/// use keypad_calc::calculator::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_integers() {
        assert_eq!(evaluate("2", "3", Operation::Add), "5");
    }

    #[test]
    fn covers_all_operations() {
        assert_eq!(evaluate("7", "10", Operation::Subtract), "-3");
        assert_eq!(evaluate("1.5", "4", Operation::Multiply), "6");
        assert_eq!(evaluate("9", "4", Operation::Divide), "2.25");
    }

    #[test]
    fn keeps_binary_float_artifacts() {
        assert_eq!(evaluate("0.1", "0.2", Operation::Add), "0.30000000000000004");
    }

    #[test]
    fn division_by_zero_is_not_a_parse_failure() {
        assert_eq!(evaluate("6", "0", Operation::Divide), "Infinity");
        assert_eq!(evaluate("-6", "0", Operation::Divide), "-Infinity");
        assert_eq!(evaluate("0", "0", Operation::Divide), "NaN");
    }

    #[test]
    fn unparseable_operands_yield_empty() {
        assert_eq!(evaluate("", "3", Operation::Add), "");
        assert_eq!(evaluate("3", ".", Operation::Add), "");
        assert_eq!(evaluate("NaN", "1", Operation::Add), "");
        assert_eq!(evaluate("inf", "1", Operation::Add), "");
    }

    #[test]
    fn unknown_symbol_yields_empty() {
        assert_eq!(evaluate_symbol("2", "3", "%"), "");
        assert_eq!(evaluate_symbol("2", "3", "÷"), "0.6666666666666666");
    }

    #[test]
    fn previous_results_parse_back() {
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
        assert_eq!(parse_operand("-3"), Some(-3.0));
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand(".5"), Some(0.5));
    }

    #[test]
    fn formats_edge_magnitudes() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
    }

    #[test]
    fn evaluate_state_needs_all_parts() {
        let partial = CalculatorState::default()
            .with_previous_operand("2")
            .with_operation(Operation::Add);
        assert_eq!(evaluate_state(&partial), "");
        assert_eq!(evaluate_state(&partial.with_current_operand("8")), "10");
    }
}
