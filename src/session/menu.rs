//! Menu listing and selection parsing.

use std::io::{self, Write};

use crate::calculator::Operation;

/// Key that ends the session.
pub const EXIT_KEY: &str = "6";

const RULE: &str = "==============================";

/// A parsed menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// One of the five operations.
    Operation(Operation),
    /// The exit sentinel.
    Exit,
    /// Anything else, kept trimmed for logging.
    Invalid(String),
}

impl Selection {
    /// Parse a raw input line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        let choice = line.trim();
        if choice == EXIT_KEY {
            return Self::Exit;
        }
        match Operation::from_key(choice) {
            Some(op) => Self::Operation(op),
            None => Self::Invalid(choice.to_string()),
        }
    }
}

/// Print the banner and the six numbered options.
pub fn display_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "       CALCULATOR")?;
    writeln!(out, "{RULE}")?;
    for op in Operation::ALL {
        writeln!(out, "{}. {} ({})", op.key(), op.verb(), op.symbol())?;
    }
    writeln!(out, "{EXIT_KEY}. Exit")?;
    writeln!(out, "{RULE}")
}
