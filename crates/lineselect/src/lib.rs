pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::select::select_line;
use crate::cli::Cli;
use crate::domain::model::Selector;
use crate::infra::input::{default_input_path, read_input};

pub fn init() {
    infra::logging::init();
}

/// Run against `./input.txt`, printing to standard output.
pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&default_input_path(), cli.args.as_slice(), &mut out)
}

/// Read `path`, pick the line named by the last of `args`, and write it with a
/// trailing newline to `out`.
///
/// The file is read before the selector is checked, so a missing input fails
/// first. Nothing is written unless selection succeeds.
pub fn run_with<S, W>(path: &Path, args: &[S], out: &mut W) -> Result<()>
where
    S: AsRef<OsStr>,
    W: Write,
{
    let contents = read_input(path)?;
    let selector = Selector::from_args(args)?;
    let mut line = select_line(&contents, selector)?;
    info!(%selector, bytes = line.len(), "selected line");

    line.push(b'\n');
    out.write_all(&line).context("failed to write selected line")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::errors::SelectError;

    fn run_in_temp(contents: &[u8], args: &[&str]) -> (Result<()>, Vec<u8>) {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("input.txt");
        fs::write(&path, contents).expect("write input");
        let mut out = Vec::new();
        let result = run_with(&path, args, &mut out);
        (result, out)
    }

    #[test]
    fn prints_selected_line_with_newline() {
        let (result, out) = run_in_temp(b"Hello\nWorld", &["one"]);
        result.unwrap();
        assert_eq!(out, b"hello\n");

        let (result, out) = run_in_temp(b"Hello\nWorld", &["two"]);
        result.unwrap();
        assert_eq!(out, b"world\n");
    }

    #[test]
    fn invalid_selector_writes_nothing() {
        let (result, out) = run_in_temp(b"Hello\nWorld", &["three"]);
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<SelectError>(),
            Some(&SelectError::InvalidArgument)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn missing_input_fails_before_selector_check() {
        let temp = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = run_with(&temp.path().join("input.txt"), &["three"], &mut out).unwrap_err();
        assert!(err.downcast_ref::<SelectError>().is_none());
        assert!(err.to_string().starts_with("failed to read input file"));
        assert!(out.is_empty());
    }

    #[test]
    fn out_of_range_is_an_error_not_empty_output() {
        let (result, out) = run_in_temp(b"Hello", &["two"]);
        assert!(matches!(
            result.unwrap_err().downcast_ref::<SelectError>(),
            Some(SelectError::LineOutOfRange { index: 1, len: 1 })
        ));
        assert!(out.is_empty());
    }
}
