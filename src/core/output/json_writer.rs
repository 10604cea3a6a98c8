//! JSON array output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::JsonLine;
use crate::core::models::OutputConfig;
use crate::dialogue::DialogueLine;
use crate::error::Result;

/// Writes dialogue lines as a pretty-printed JSON array.
///
/// ```json
/// [
///   {
///     "time": "15:50:12",
///     "content": "<Kohaku [dit]> h_uh^bthaah?."
///   }
/// ]
/// ```
pub fn write_json(
    lines: &[DialogueLine],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_json(lines, config)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders dialogue lines as a pretty-printed JSON array.
pub fn to_json(lines: &[DialogueLine], config: &OutputConfig) -> Result<String> {
    let json_lines: Vec<JsonLine<'_>> = lines
        .iter()
        .map(|line| JsonLine::from_line(line, config))
        .collect();
    Ok(serde_json::to_string_pretty(&json_lines)?)
}
