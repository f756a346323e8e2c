//! Domain models for selectors, line sequences, and their errors.

pub mod errors;
pub mod model;
