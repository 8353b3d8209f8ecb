//! Operation evaluation and result formatting.
//!
//! Applies an [`Operation`] to two operands and renders both the expression
//! and the outcome as the lines the interactive session prints.

use super::operations::Operation;

/// Result of applying an operation to two operands.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// The operation produced a value (possibly NaN or infinite).
    Success {
        /// The rendered expression, e.g. `2.0 + 3.0`.
        expression: String,
        /// The numeric value.
        value: f64,
        /// The value formatted for display.
        display_result: String,
    },
    /// The operation rejected its inputs.
    Error {
        /// The rendered expression.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// The numeric value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// The line shown to the user for this result.
    pub fn report(&self) -> String {
        match self {
            Self::Success {
                expression,
                display_result,
                ..
            } => format!("Result: {} = {}", expression, display_result),
            Self::Error { message, .. } => format!("Error: {}", message),
        }
    }
}

/// Apply `operation` to `a` and `b`.
pub fn evaluate(operation: Operation, a: f64, b: f64) -> CalcResult {
    let expression = format!(
        "{} {} {}",
        format_number(a),
        operation.symbol(),
        format_number(b)
    );

    match operation.apply(a, b) {
        Ok(value) => CalcResult::Success {
            expression,
            display_result: format_number(value),
            value,
        },
        Err(err) => CalcResult::Error {
            expression,
            message: err.to_string(),
        },
    }
}

/// Format a number the way the calculator echoes operands and results.
///
/// Integral values keep a trailing `.0`, other values use the shortest
/// representation that round-trips. Magnitudes of at least `1e16` or below
/// `1e-4` switch to scientific notation with a signed exponent of at least
/// two digits (`1e+16`, `2.5e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:?}", value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        let result = evaluate(Operation::Add, 2.0, 3.0);
        assert!(result.is_success());
        assert_eq!(result.expression(), "2.0 + 3.0");
        assert_eq!(result.display(), "5.0");
        assert_eq!(result.value(), Some(5.0));
        assert_eq!(result.report(), "Result: 2.0 + 3.0 = 5.0");
    }

    #[test]
    fn test_division_by_zero() {
        let result = evaluate(Operation::Divide, 10.0, 0.0);
        assert!(!result.is_success());
        assert_eq!(result.expression(), "10.0 / 0.0");
        assert_eq!(result.display(), "Cannot divide by zero");
        assert_eq!(result.value(), None);
        assert_eq!(result.report(), "Error: Cannot divide by zero");
    }

    #[test]
    fn test_nan_is_a_result_not_an_error() {
        let result = evaluate(Operation::Power, -1.0, 0.5);
        assert!(result.is_success());
        assert_eq!(result.report(), "Result: -1.0 ^ 0.5 = nan");
    }

    #[test]
    fn test_overflow_to_infinity() {
        let result = evaluate(Operation::Power, 10.0, 400.0);
        assert_eq!(result.display(), "inf");
        let result = evaluate(Operation::Multiply, -1e308, 10.0);
        assert_eq!(result.display(), "-inf");
    }

    #[test]
    fn test_format_integral_values() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-12.0), "-12.0");
        assert_eq!(format_number(123456789.0), "123456789.0");
    }

    #[test]
    fn test_format_decimal_values() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn test_format_scientific_values() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1e100), "1e+100");
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
