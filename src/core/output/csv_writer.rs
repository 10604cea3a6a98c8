//! CSV output writer.

use std::fs::File;
use std::path::Path;

use crate::core::models::{OutputConfig, TIME_FORMAT};
use crate::dialogue::DialogueLine;
use crate::error::{DialogError, Result};

/// Writes dialogue lines to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: depend on `OutputConfig`
///   - Basic: `Content`
///   - With line numbers: `Line`, `Content`
///   - With timestamps: `Time`, `Content`
/// - Encoding: UTF-8
pub fn write_csv(
    lines: &[DialogueLine],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, lines, config)?;
    writer.flush()?;
    Ok(())
}

/// Renders dialogue lines as CSV.
pub fn to_csv(lines: &[DialogueLine], config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, lines, config)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| DialogError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    lines: &[DialogueLine],
    config: &OutputConfig,
) -> Result<()> {
    writer.write_record(build_header(config))?;
    for line in lines {
        writer.write_record(build_record(line, config))?;
    }
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_line_numbers {
        header.push("Line");
    }
    if config.include_timestamps {
        header.push("Time");
    }
    header.push("Content");

    header
}

/// Build CSV record for a single dialogue line.
fn build_record(line: &DialogueLine, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_line_numbers {
        record.push(line.line_number.to_string());
    }
    if config.include_timestamps {
        record.push(
            line.timestamp
                .map(|ts| ts.format(TIME_FORMAT).to_string())
                .unwrap_or_default(),
        );
    }
    record.push(line.content.clone());

    record
}
