use clap::Parser;

/// Interactive menu-driven calculator.
///
/// Pick an operation from the menu, enter two numbers, and read the result.
/// Set `RUST_LOG` to see diagnostics on stderr.
#[derive(Parser, Debug)]
#[command(name = "zcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        assert!(Cli::try_parse_from(["zcalc"]).is_ok());
        assert!(Cli::try_parse_from(["zcalc", "extra"]).is_err());
        assert!(Cli::try_parse_from(["zcalc", "--unknown"]).is_err());
    }
}
