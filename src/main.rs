use std::io::{self, Write};

use clap::Parser;

use zcalc::cli::Cli;
use zcalc::logging;
use zcalc::session::{Session, SessionError};

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    logging::setup();

    let result = Session::new(io::stdin().lock(), io::stdout().lock()).run();

    match result {
        Ok(()) => Ok(()),
        Err(SessionError::InputClosed) => {
            // stdout may already be gone (broken pipe); the error below still reports.
            let _ = writeln!(io::stdout());
            tracing::warn!("Input closed before exit was selected");
            Err(SessionError::InputClosed.into())
        }
        Err(err) => Err(err.into()),
    }
}
