//! Infrastructure adapters for the input file and logging.

pub mod input;
pub mod logging;
