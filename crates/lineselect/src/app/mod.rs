//! Application layer: the pure split, lower-case, and select pipeline.

pub mod select;
