//! Input file access.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Name of the input file, resolved against the working directory.
pub const INPUT_FILE: &str = "input.txt";

pub fn default_input_path() -> PathBuf {
    PathBuf::from(INPUT_FILE)
}

/// Read the whole input file as raw bytes.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    debug!(path = %path.display(), bytes = data.len(), "read input");
    Ok(data)
}
