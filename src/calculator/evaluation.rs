//! Binary arithmetic over display text.
//!
//! Operands are parsed as 32-bit floats and results are rendered back to
//! text in the form the display shows.

use super::CalcError;
use crate::model::Operator;
use std::fmt;

/// Literal shown in place of a result when dividing by zero.
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero";

const NON_FINITE: [&str; 3] = ["Infinity", "-Infinity", "NaN"];

/// Whether `text` is a terminal result rather than an editable numeral.
pub fn is_error_text(text: &str) -> bool {
    text == DIVISION_BY_ZERO || NON_FINITE.contains(&text)
}

/// Result of applying an operator to two operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f32),
    DivisionByZero,
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::DivisionByZero)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => f.write_str(&format_number(*v)),
            Outcome::DivisionByZero => f.write_str(DIVISION_BY_ZERO),
        }
    }
}

/// Apply `operator` to the numerals `lhs` and `rhs`.
pub fn evaluate(lhs: &str, rhs: &str, operator: Operator) -> Result<Outcome, CalcError> {
    let left = parse_operand(lhs)?;
    let right = parse_operand(rhs)?;

    let value = match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Ok(Outcome::DivisionByZero);
            }
            left / right
        }
        Operator::Percent => (left * right) / 100.0,
    };

    Ok(Outcome::Value(value))
}

fn parse_operand(text: &str) -> Result<f32, CalcError> {
    text.parse::<f32>().map_err(|source| CalcError::Parse {
        text: text.to_string(),
        source,
    })
}

/// Format a value as a plain decimal numeral that always has a fractional part.
pub fn format_number(value: f32) -> String {
    if value.is_nan() {
        return NON_FINITE[2].to_string();
    }
    if value.is_infinite() {
        let msg = if value.is_sign_positive() {
            NON_FINITE[0]
        } else {
            NON_FINITE[1]
        };
        return msg.to_string();
    }

    // `Display` for floats never uses exponent notation.
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(lhs: &str, rhs: &str, op: Operator) -> String {
        evaluate(lhs, rhs, op).unwrap().to_string()
    }

    #[test]
    fn test_basic_operators() {
        assert_eq!(eval("2", "3", Operator::Add), "5.0");
        assert_eq!(eval("2", "3", Operator::Subtract), "-1.0");
        assert_eq!(eval("2.5", "3", Operator::Multiply), "7.5");
        assert_eq!(eval("6", "3", Operator::Divide), "2.0");
        assert_eq!(eval("1", "2", Operator::Divide), "0.5");
    }

    #[test]
    fn test_percent() {
        assert_eq!(eval("50", "10", Operator::Percent), "5.0");
        assert_eq!(eval("200", "-25", Operator::Percent), "-50.0");
    }

    #[test]
    fn test_division_by_zero() {
        let outcome = evaluate("5", "0", Operator::Divide).unwrap();
        assert!(outcome.is_error());
        assert_eq!(outcome.to_string(), DIVISION_BY_ZERO);

        let outcome = evaluate("5", "-0.", Operator::Divide).unwrap();
        assert_eq!(outcome, Outcome::DivisionByZero);
    }

    #[test]
    fn test_zero_divided_is_a_value() {
        assert_eq!(eval("0", "4", Operator::Divide), "0.0");
    }

    #[test]
    fn test_trailing_decimal_operands_parse() {
        assert_eq!(eval("3.", "1", Operator::Add), "4.0");
    }

    #[test]
    fn test_malformed_operand_is_parse_error() {
        let err = evaluate(DIVISION_BY_ZERO, "1", Operator::Add).unwrap_err();
        assert!(matches!(err, CalcError::Parse { ref text, .. } if text == DIVISION_BY_ZERO));
    }

    #[test]
    fn test_format_number_never_uses_exponent() {
        assert_eq!(format_number(1e20), "100000000000000000000.0");
        assert!(!format_number(1e-7).contains('e'));
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_error_text_detection() {
        assert!(is_error_text(DIVISION_BY_ZERO));
        assert!(is_error_text("-Infinity"));
        assert!(is_error_text(&format_number(f32::NAN)));
        assert!(!is_error_text("12.5"));
        assert!(!is_error_text("Infinit"));
    }

    #[test]
    fn test_format_overflow() {
        assert_eq!(format_number(f32::MAX * 2.0), "Infinity");
        assert_eq!(format_number(f32::MIN * 2.0), "-Infinity");
        assert_eq!(eval("3e38", "10", Operator::Multiply), "Infinity");
    }
}
