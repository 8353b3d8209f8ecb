//! Interactive calculator session.
//!
//! Runs the menu loop over any line-oriented reader and writer: show the
//! menu, read a selection, prompt for two operands, print the outcome, and
//! repeat until the exit key is chosen or the input closes.

mod menu;
mod prompt;

pub use menu::{EXIT_KEY, Selection, display_menu};
pub use prompt::{INVALID_NUMBER, get_number, read_line};

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::calculator::{Operation, evaluate};

pub const WELCOME: &str = "Welcome to the Calculator!";
pub const GOODBYE: &str = "Thank you for using the calculator. Goodbye!";
pub const INVALID_CHOICE: &str = "Invalid choice. Please select 1-6.";
pub const SELECT_PROMPT: &str = "Select an operation (1-6): ";

/// Conditions that end a session abnormally.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input stream closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Terminated,
}

/// The menu loop bound to an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user exits.
    ///
    /// Returns [`SessionError::InputClosed`] if the input ends at any prompt.
    pub fn run(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{WELCOME}")?;

        let mut state = State::Running;
        while state == State::Running {
            state = self.step()?;
        }

        self.output.flush()?;
        Ok(())
    }

    /// One pass through the menu.
    fn step(&mut self) -> Result<State, SessionError> {
        display_menu(&mut self.output)?;
        let line = read_line(&mut self.input, &mut self.output, SELECT_PROMPT)?;

        match Selection::parse(&line) {
            Selection::Exit => {
                tracing::debug!("Exit selected");
                writeln!(self.output, "{GOODBYE}")?;
                Ok(State::Terminated)
            }
            Selection::Invalid(choice) => {
                tracing::debug!(%choice, "Invalid menu choice");
                writeln!(self.output, "{INVALID_CHOICE}")?;
                Ok(State::Running)
            }
            Selection::Operation(op) => {
                self.calculate(op)?;
                Ok(State::Running)
            }
        }
    }

    fn calculate(&mut self, op: Operation) -> Result<(), SessionError> {
        writeln!(self.output, "\n--- {} ---", op.name())?;
        let a = get_number(&mut self.input, &mut self.output, "Enter first number: ")?;
        let b = get_number(&mut self.input, &mut self.output, "Enter second number: ")?;

        let result = evaluate(op, a, b);
        tracing::debug!(
            operation = op.name(),
            expression = result.expression(),
            outcome = result.display(),
            "Calculated"
        );
        writeln!(self.output, "\n{}", result.report())?;
        Ok(())
    }

    /// Consume the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
