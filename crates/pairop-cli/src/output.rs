//! CLI output formatting.

use std::io::{self, Write};

use pairop_core::constants::LINE_TERMINATOR;

/// Format a result for display: its decimal representation.
#[must_use]
pub fn format_result(value: i32) -> String {
    value.to_string()
}

/// Write `text` followed by the CRLF terminator.
///
/// # Errors
///
/// Returns an I/O error if the writer rejects the bytes.
pub fn write_line(out: &mut dyn Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.write_all(LINE_TERMINATOR.as_bytes())?;
    out.flush()
}
