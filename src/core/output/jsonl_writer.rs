//! JSON Lines (JSONL) output writer.
//!
//! One JSON object per dialogue line, handy for piping a transcript into
//! `jq` or a line-oriented ingestion job.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::JsonLine;
use crate::core::models::OutputConfig;
use crate::dialogue::DialogueLine;
use crate::error::Result;

/// Writes dialogue lines to JSONL (JSON Lines) format.
///
/// ```jsonl
/// {"content":"<Kohaku> hi"}
/// {"content":"* Kohaku waves *"}
/// ```
pub fn write_jsonl(
    lines: &[DialogueLine],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        let json = serde_json::to_string(&JsonLine::from_line(line, config))?;
        writeln!(writer, "{json}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders dialogue lines as JSONL, each record terminated by `\n`.
pub fn to_jsonl(lines: &[DialogueLine], config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for line in lines {
        out.push_str(&serde_json::to_string(&JsonLine::from_line(line, config))?);
        out.push('\n');
    }
    Ok(out)
}
