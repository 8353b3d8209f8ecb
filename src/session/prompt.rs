//! Line input helpers.

use std::io::{BufRead, Write};

use super::SessionError;
use crate::calculator::parse_operand;

pub const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";

/// Show `prompt`, then read one line.
///
/// The returned line keeps its trailing newline. Bytes that are not valid
/// UTF-8 become U+FFFD so they fail parsing downstream instead of ending the
/// session. End of input is reported as [`SessionError::InputClosed`].
pub fn read_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<String, SessionError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(SessionError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Prompt until the user types a valid number.
///
/// There is no retry limit; only a successful parse or closed input ends
/// the loop.
pub fn get_number(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<f64, SessionError> {
    loop {
        let line = read_line(input, output, prompt)?;
        match parse_operand(&line) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(%err, "Rejected operand");
                writeln!(output, "{INVALID_NUMBER}")?;
            }
        }
    }
}
