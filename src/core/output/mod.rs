//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_text`] / [`to_text`] - the plain transcript, one line per chat message
//! - [`write_json`] / [`to_json`] - JSON array of lines - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//!
//! Every writer produces UTF-8, whatever encoding the log was read with.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> dialog_extractor::Result<()> {
//! use dialog_extractor::core::output::{write_csv, write_json, write_text, to_jsonl};
//! use dialog_extractor::core::models::OutputConfig;
//! use dialog_extractor::Extractor;
//!
//! let lines = Extractor::new().extract_lines("[12:00:00] [CHAT] <Bob> hi");
//! let config = OutputConfig::new().with_timestamps();
//!
//! write_text(&lines, "latest-dialog-extracted.log")?;
//! write_json(&lines, "dialogue.json", &config)?;
//! write_csv(&lines, "dialogue.csv", &config)?;
//!
//! let jsonl_string = to_jsonl(&lines, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text};

#[cfg(feature = "json-output")]
use serde::Serialize;

#[cfg(feature = "json-output")]
use crate::core::models::{OutputConfig, TIME_FORMAT};
#[cfg(feature = "json-output")]
use crate::dialogue::DialogueLine;

/// Minimal line structure shared by the JSON writers.
/// Only includes fields enabled in `OutputConfig`.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    content: &'a str,
}

#[cfg(feature = "json-output")]
impl<'a> JsonLine<'a> {
    fn from_line(line: &'a DialogueLine, config: &OutputConfig) -> Self {
        Self {
            line: config.include_line_numbers.then_some(line.line_number),
            time: if config.include_timestamps {
                line.timestamp.map(|ts| ts.format(TIME_FORMAT).to_string())
            } else {
                None
            },
            content: &line.content,
        }
    }
}
