//! Domain models for the selector token and the split line sequence.

use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::SelectError;

/// Which line of the input to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    One,
    Two,
}

impl Selector {
    /// Zero-based index of the line this selector picks.
    pub fn index(self) -> usize {
        match self {
            Selector::One => 0,
            Selector::Two => 1,
        }
    }

    /// Resolve the selector from user-supplied arguments.
    ///
    /// Only the last token is inspected; anything before it is ignored. A
    /// token that is not valid UTF-8 is as invalid as any other unknown one.
    pub fn from_args<I, S>(args: I) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        args.into_iter()
            .last()
            .ok_or(SelectError::InvalidArgument)?
            .as_ref()
            .to_str()
            .ok_or(SelectError::InvalidArgument)?
            .parse()
    }
}

impl FromStr for Selector {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(Selector::One),
            "two" => Ok(Selector::Two),
            _ => Err(SelectError::InvalidArgument),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::One => f.write_str("one"),
            Selector::Two => f.write_str("two"),
        }
    }
}

/// Ordered line sequence produced by splitting raw input on `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lines(Vec<Vec<u8>>);

impl Lines {
    /// Split `bytes` on every `\n`.
    ///
    /// Carriage returns are kept and a trailing newline leaves an empty final
    /// element, so empty input still produces one (empty) line.
    pub fn split(bytes: &[u8]) -> Self {
        Self(bytes.split(|b| *b == b'\n').map(<[u8]>::to_vec).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.0.get(index).map(Vec::as_slice)
    }

    /// Replace every line with `f` applied to it, keeping order.
    pub fn map_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&[u8]) -> Vec<u8>,
    {
        for line in &mut self.0 {
            *line = f(line.as_slice());
        }
    }

    /// Line picked by `selector`, failing when the input is too short.
    pub fn select(&self, selector: Selector) -> Result<&[u8], SelectError> {
        let index = selector.index();
        self.get(index).ok_or(SelectError::LineOutOfRange {
            index,
            len: self.len(),
        })
    }
}
