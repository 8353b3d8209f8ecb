//! The five binary operations and the fixed menu table that maps keys to them.

use thiserror::Error;

/// Error raised when an operation's inputs are invalid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, failing on a zero divisor (including `-0.0`).
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

/// Raise `a` to the power of `b`.
///
/// No validation: NaN for a negative base with a fractional exponent,
/// infinity on overflow, and `0^0 == 1`.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// A calculator operation selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Resolve a trimmed menu key ("1".."5") to its operation.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    /// Menu key for this operation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::Subtract => "2",
            Self::Multiply => "3",
            Self::Divide => "4",
            Self::Power => "5",
        }
    }

    /// Heading shown once the operation is chosen.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Power => "Power",
        }
    }

    /// Short label used in the menu listing.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Power => "Power",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Apply the operation to two operands.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
            Self::Power => Ok(power(a, b)),
        }
    }
}
