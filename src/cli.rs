//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`StrategyArg`], [`EncodingArg`], [`FormatArg`] - value enums that map
//!   onto the library's [`DetectionStrategy`], [`SourceEncoding`] and
//!   [`OutputFormat`]
//!
//! The library types stay free of clap; the conversions live here.
//!
//! ```rust
//! use clap::Parser;
//! use dialog_extractor::cli::Args;
//! use dialog_extractor::config::{DetectionStrategy, ExtractorConfig};
//!
//! let args = Args::parse_from(["dialog-extractor", "latest.log", "-s", "strict"]);
//! let config = args.extractor_config(ExtractorConfig::default());
//! assert_eq!(config.strategy, DetectionStrategy::Strict);
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::{DetectionStrategy, ExtractorConfig};
use crate::core::models::OutputConfig;
use crate::format::{OutputFormat, default_output_path};
use crate::source::SourceEncoding;

/// Base name used for output when reading from standard input.
const STDIN_BASE_NAME: &str = "dialogue";

/// Extract the chat dialogue from Minecraft client logs.
#[derive(Parser, Debug, Clone)]
#[command(name = "dialog-extractor")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    dialog-extractor latest.log
    dialog-extractor 2024-01-15-1.log.gz -o session.log
    dialog-extractor latest.log -e utf-8 -s strict --stdout
    dialog-extractor latest.log -f jsonl -t --line-numbers
    cat latest.log | dialog-extractor - --stdout")]
pub struct Args {
    /// Path to a .log, .txt or .log.gz file; omit or use "-" for stdin
    pub input: Option<PathBuf>,

    /// Path to output file [default: <input base>-dialog-extracted.<ext>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Character encoding of the input
    #[arg(short, long, value_enum, default_value = "windows-1252")]
    pub encoding: EncodingArg,

    /// Chat line detection strategy [default: lenient, or the config file's]
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Output format [default: from the output extension, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Additional payload to drop as noise (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub noise: Vec<String>,

    /// Additional color code marker (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub marker: Vec<String>,

    /// Drop chat lines that are empty after cleaning
    #[arg(long)]
    pub skip_empty: bool,

    /// Include timestamps in structured output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include source line numbers in structured output
    #[arg(long)]
    pub line_numbers: bool,

    /// JSON file with an extractor configuration; flags are applied on top
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Returns the input file, or `None` when reading standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Layers the command-line flags over a base configuration.
    pub fn extractor_config(&self, base: ExtractorConfig) -> ExtractorConfig {
        let mut config = base;
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy.into());
        }
        for marker in &self.marker {
            config = config.with_color_marker(marker.clone());
        }
        for noise in &self.noise {
            config = config.with_noise_line(noise.clone());
        }
        if self.skip_empty {
            config = config.with_skip_empty(true);
        }
        config
    }

    /// Builds the output configuration from the metadata flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.line_numbers {
            config = config.with_line_numbers();
        }
        config
    }

    /// Resolves the output format: explicit flag, then the output file's
    /// extension, then plain text.
    pub fn output_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }

    /// Resolves where the result is written.
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let input = self
            .input_path()
            .unwrap_or_else(|| Path::new(STDIN_BASE_NAME));
        default_output_path(input, format)
    }
}

/// Chat line detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum StrategyArg {
    /// Any line containing [CHAT]
    #[default]
    Lenient,

    /// Only fully formed client chat lines
    Strict,
}

impl From<StrategyArg> for DetectionStrategy {
    fn from(strategy: StrategyArg) -> DetectionStrategy {
        match strategy {
            StrategyArg::Lenient => DetectionStrategy::Lenient,
            StrategyArg::Strict => DetectionStrategy::Strict,
        }
    }
}

/// Input character encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum EncodingArg {
    /// Windows-1252 (Western European)
    #[default]
    #[value(name = "windows-1252", alias = "cp1252")]
    Windows1252,

    /// UTF-8
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
}

impl From<EncodingArg> for SourceEncoding {
    fn from(encoding: EncodingArg) -> SourceEncoding {
        match encoding {
            EncodingArg::Windows1252 => SourceEncoding::Windows1252,
            EncodingArg::Utf8 => SourceEncoding::Utf8,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum FormatArg {
    /// Plain transcript, one line per message
    #[default]
    #[value(alias = "txt")]
    Text,

    /// JSON array
    Json,

    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,

    /// Semicolon-delimited CSV
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut full = vec!["dialog-extractor"];
        full.extend_from_slice(args);
        Args::parse_from(full)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["latest.log"]);
        assert_eq!(args.input_path(), Some(Path::new("latest.log")));
        assert_eq!(args.encoding, EncodingArg::Windows1252);
        assert_eq!(args.output_format(), OutputFormat::Text);
        assert_eq!(
            args.output_path(OutputFormat::Text),
            PathBuf::from("latest-dialog-extracted.log")
        );
        assert_eq!(
            args.extractor_config(ExtractorConfig::default()),
            ExtractorConfig::default()
        );
    }

    #[test]
    fn test_stdin_input() {
        assert_eq!(parse(&[]).input_path(), None);
        let args = parse(&["-", "-f", "json"]);
        assert_eq!(args.input_path(), None);
        assert_eq!(
            args.output_path(args.output_format()),
            PathBuf::from("dialogue-dialog-extracted.json")
        );
    }

    #[test]
    fn test_encoding_aliases() {
        assert_eq!(parse(&["a.log", "-e", "cp1252"]).encoding, EncodingArg::Windows1252);
        assert_eq!(parse(&["a.log", "-e", "utf8"]).encoding, EncodingArg::Utf8);
        assert_eq!(
            SourceEncoding::from(parse(&["a.log", "-e", "utf-8"]).encoding),
            SourceEncoding::Utf8
        );
    }

    #[test]
    fn test_flags_layer_over_config() {
        let base = ExtractorConfig::strict().with_noise_line("Reloading");
        let args = parse(&[
            "a.log",
            "--noise",
            "Welcome!",
            "--marker",
            "ยง",
            "--skip-empty",
        ]);
        let config = args.extractor_config(base);
        assert_eq!(config.strategy, DetectionStrategy::Strict);
        assert_eq!(config.noise_lines, vec!["Shaders Reloaded!", "Reloading", "Welcome!"]);
        assert_eq!(config.color_markers, vec!["§", "ยง"]);
        assert!(config.skip_empty);

        let args = parse(&["a.log", "-s", "lenient"]);
        assert_eq!(
            args.extractor_config(ExtractorConfig::strict()).strategy,
            DetectionStrategy::Lenient
        );
    }

    #[test]
    fn test_format_from_output_extension() {
        let args = parse(&["a.log", "-o", "out.csv"]);
        assert_eq!(args.output_format(), OutputFormat::Csv);
        assert_eq!(args.output_path(OutputFormat::Csv), PathBuf::from("out.csv"));

        let args = parse(&["a.log", "-o", "out.csv", "-f", "ndjson"]);
        assert_eq!(args.output_format(), OutputFormat::Jsonl);

        let args = parse(&["a.log", "-o", "transcript"]);
        assert_eq!(args.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_output_config() {
        let config = parse(&["a.log", "-t", "--line-numbers"]).output_config();
        assert!(config.include_timestamps);
        assert!(config.include_line_numbers);
        assert_eq!(parse(&["a.log"]).output_config(), OutputConfig::new());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result =
            Args::try_parse_from(["dialog-extractor", "a.log", "-s", "regex"]);
        assert!(result.is_err());
        let result = Args::try_parse_from(["dialog-extractor", "a.log", "-e", "latin1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
