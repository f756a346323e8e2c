//! Line transform and selection.

use tracing::debug;

use crate::domain::errors::SelectError;
use crate::domain::model::{Lines, Selector};

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Lower-case a single line one character at a time.
///
/// Each character maps to exactly one character using the simple case
/// mapping, with no context rules (a final `Σ` becomes `σ`). Every byte of an
/// invalid UTF-8 sequence becomes its own U+FFFD.
pub fn lowercase_line(line: &[u8]) -> Vec<u8> {
    if line.is_ascii() {
        return line.to_ascii_lowercase();
    }

    let mut out = String::with_capacity(line.len());
    for chunk in line.utf8_chunks() {
        out.extend(chunk.valid().chars().map(lowercase_char));
        out.extend(std::iter::repeat_n(REPLACEMENT, chunk.invalid().len()));
    }
    out.into_bytes()
}

fn lowercase_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        // U+0130 is the only character whose full lowercase expands.
        _ if c == '\u{130}' => 'i',
        _ => c,
    }
}

/// Split `contents`, lower-case every line, and return the one `selector` picks.
pub fn select_line(contents: &[u8], selector: Selector) -> Result<Vec<u8>, SelectError> {
    let mut lines = Lines::split(contents);
    lines.map_each(lowercase_line);
    debug!(lines = lines.len(), %selector, "selecting line");
    lines.select(selector).map(<[u8]>::to_vec)
}
