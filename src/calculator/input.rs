//! Operand parsing.
//!
//! Turns a line typed by the user into a floating-point operand. Accepts
//! plain decimals, exponent notation, `inf`/`infinity`/`nan` in any case
//! and underscore digit separators such as `1_000.5`.

use thiserror::Error;

/// A line of text that could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("invalid number: {0:?}")]
    Invalid(String),
}

/// Parse a line of user input into an operand.
///
/// Surrounding whitespace is ignored. Only ASCII digits are accepted.
pub fn parse_operand(input: &str) -> Result<f64, ParseError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let invalid = || ParseError::Invalid(trimmed.to_string());

    let cleaned = if trimmed.contains('_') {
        if !has_valid_separators(trimmed) {
            return Err(invalid());
        }
        trimmed.replace('_', "")
    } else {
        trimmed.to_string()
    };

    cleaned.parse::<f64>().map_err(|_| invalid())
}

/// Every underscore must sit between two digits.
fn has_valid_separators(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    chars.iter().enumerate().all(|(i, &c)| {
        if c != '_' {
            return true;
        }
        let prev = i.checked_sub(1).and_then(|p| chars.get(p));
        let next = chars.get(i + 1);
        matches!((prev, next), (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit())
    })
}
