//! Domain-specific errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("Invalid argument")]
    InvalidArgument,
    #[error("line index {index} out of range for input with {len} line(s)")]
    LineOutOfRange { index: usize, len: usize },
}
