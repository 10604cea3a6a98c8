//! Plain transcript writer.
//!
//! The transcript is the extracted payloads joined by `\n`, exactly what
//! [`Extractor::extract`](crate::Extractor::extract) returns, written as UTF-8
//! with no trailing newline.

use std::fs;
use std::path::Path;

use crate::dialogue::{DialogueLine, join_lines};
use crate::error::Result;

/// Writes the transcript to a file, replacing any existing content.
pub fn write_text(lines: &[DialogueLine], output_path: impl AsRef<Path>) -> Result<()> {
    fs::write(output_path, to_text(lines))?;
    Ok(())
}

/// Renders the transcript as a string.
pub fn to_text(lines: &[DialogueLine]) -> String {
    join_lines(lines)
}
