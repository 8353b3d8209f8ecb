//! Calculator module for two-operand arithmetic.
//!
//! This module provides functionality to:
//! - Apply one of the five supported operations to two operands
//! - Parse operands typed by the user
//! - Format results the way the interactive session prints them

mod evaluation;
mod input;
mod operations;

pub use evaluation::{CalcResult, evaluate, format_number};
pub use input::{ParseError, parse_operand};
pub use operations::{CalcError, Operation, add, divide, multiply, power, subtract};
