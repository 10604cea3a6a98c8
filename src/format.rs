//! Output format selection and output path naming.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> dialog_extractor::Result<()> {
//! use dialog_extractor::format::{OutputFormat, to_format_string};
//! use dialog_extractor::core::OutputConfig;
//! use dialog_extractor::Extractor;
//!
//! let lines = Extractor::new().extract_lines("[CHAT] <Bob> hi");
//!
//! let text = to_format_string(&lines, OutputFormat::Text, &OutputConfig::new())?;
//! assert_eq!(text, "<Bob> hi");
//!
//! // Or detect the format from an extension
//! let format = OutputFormat::from_path("dialogue.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! # #[cfg(feature = "json-output")]
//! # example().unwrap();
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::dialogue::DialogueLine;
use crate::error::{DialogError, Result};

/// Suffix appended to the input's base name for the default output file.
pub const OUTPUT_SUFFIX: &str = "-dialog-extracted";

/// Output format for extracted dialogue.
///
/// - [`Text`](OutputFormat::Text) - the plain transcript (default)
/// - [`Json`](OutputFormat::Json) - JSON array of lines
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Payloads joined by newlines
    #[default]
    Text,

    /// JSON array of lines
    Json,

    /// JSON Lines (NDJSON)
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use dialog_extractor::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "log");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "log",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "jsonl", "ndjson", "csv"]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "log" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(DialogError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: log, txt, json, jsonl, csv",
                    ext
                ),
            )),
        }
    }

    /// Name of the cargo feature that enables this format.
    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Text => "none",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            OutputFormat::Csv => "csv-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes dialogue lines to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    lines: &[DialogueLine],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        OutputFormat::Text => crate::core::output::write_text(lines, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(lines, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(lines, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(lines, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts dialogue lines to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    lines: &[DialogueLine],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(lines)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(lines, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(lines, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(lines, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

fn feature_disabled(format: OutputFormat) -> DialogError {
    DialogError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

/// Default destination for a transcript extracted from `input`.
///
/// The file sits next to the input and is named after everything before the
/// first `.` of the input's file name, so both `latest.log` and
/// `2024-01-15-1.log.gz` keep just their base name.
///
/// ```rust
/// use std::path::Path;
/// use dialog_extractor::format::{OutputFormat, default_output_path};
///
/// assert_eq!(
///     default_output_path(Path::new("logs/2024-01-15-1.log.gz"), OutputFormat::Text),
///     Path::new("logs/2024-01-15-1-dialog-extracted.log"),
/// );
/// ```
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default();
    let base = if base.is_empty() { "dialogue" } else { base };
    let name = format!("{base}{OUTPUT_SUFFIX}.{}", format.extension());
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("TXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "Text");
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("out.log").unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::from_path("out.txt").unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::from_path("/path/to/file.JSON").unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path("out.ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert!(OutputFormat::from_path("out.xml").is_err());
        assert!(OutputFormat::from_path("noext").is_err());
    }

    #[test]
    fn test_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/logs/latest.log"), OutputFormat::Text),
            PathBuf::from("/logs/latest-dialog-extracted.log")
        );
        assert_eq!(
            default_output_path(Path::new("2024-01-15-1.log.gz"), OutputFormat::Json),
            PathBuf::from("2024-01-15-1-dialog-extracted.json")
        );
        assert_eq!(
            default_output_path(Path::new(".hidden.log"), OutputFormat::Text),
            PathBuf::from("dialogue-dialog-extracted.log")
        );
    }

    #[test]
    fn test_to_format_string_text() {
        let lines = vec![DialogueLine::new("a", 1), DialogueLine::new("b", 2)];
        assert_eq!(
            to_format_string(&lines, OutputFormat::Text, &OutputConfig::new()).unwrap(),
            "a\nb"
        );
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
        let parsed: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, OutputFormat::Text);
    }
}
