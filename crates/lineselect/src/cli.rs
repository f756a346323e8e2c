//! Command line surface.

use std::ffi::OsString;

use clap::Parser;

/// Print the first or second line of ./input.txt, lower-cased.
///
/// Help and version flags are disabled: every token, including `--help`, is a
/// candidate selector.
#[derive(Debug, Parser)]
#[command(
    name = "lineselect",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Trailing arguments; only the last one is read and must be `one` or `two`.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_trailing_token() {
        let cli = Cli::try_parse_from(["lineselect", "run", "--quiet", "two"]).unwrap();
        assert_eq!(cli.args, ["run", "--quiet", "two"]);
    }

    #[test]
    fn accepts_no_tokens() {
        let cli = Cli::try_parse_from(["lineselect"]).unwrap();
        assert!(cli.args.is_empty());
    }

    #[test]
    fn help_and_version_are_plain_tokens() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let cli = Cli::try_parse_from(["lineselect", flag]).unwrap();
            assert_eq!(cli.args, [flag]);
        }
    }

    #[cfg(unix)]
    #[test]
    fn accepts_non_utf8_tokens() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'o', 0xff]);
        let cli = Cli::try_parse_from([OsString::from("lineselect"), raw.clone()]).unwrap();
        assert_eq!(cli.args, [raw]);
    }

    #[test]
    fn debug_asserts() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
