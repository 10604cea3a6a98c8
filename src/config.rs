//! Configuration types for dialogue extraction.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`DetectionStrategy`] - how chat lines are recognised
//! - [`ExtractorConfig`] - strategy, color markers, noise list and empty-line policy
//!
//! # Example
//!
//! ```rust
//! use dialog_extractor::config::{DetectionStrategy, ExtractorConfig};
//! use dialog_extractor::Extractor;
//!
//! let config = ExtractorConfig::new()
//!     .with_strategy(DetectionStrategy::Strict)
//!     .with_noise_line("Reloading ResourceManager")
//!     .with_misdecoded_markers();
//!
//! let extractor = Extractor::with_config(config).unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DialogError, Result};

/// Canonical Minecraft section sign that starts every color code.
pub const SECTION_SIGN: &str = "§";

/// The section sign as it appears when the UTF-8 bytes `C2 A7` are decoded
/// as TIS-620 / Windows-874.
pub const MISDECODED_SECTION_SIGN: &str = "ยง";

/// The section sign as it appears when the UTF-8 bytes `C2 A7` are decoded
/// as Windows-1252.
pub const CP1252_SECTION_SIGN: &str = "Â§";

/// System message emitted when shaders are reloaded; carries the chat marker
/// but is not dialogue.
pub const SHADERS_RELOADED: &str = "Shaders Reloaded!";

/// How chat lines are recognised among other log lines.
///
/// The two strategies disagree on malformed or partial lines. A bare
/// `[CHAT] <name> hello` line is dialogue under [`Lenient`](Self::Lenient)
/// and ignored under [`Strict`](Self::Strict).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionStrategy {
    /// Any line containing `[CHAT]`; the payload follows the last occurrence.
    #[default]
    Lenient,

    /// Only `[HH:MM:SS] [Render thread/INFO]: [System] [CHAT] ...` lines.
    Strict,
}

impl DetectionStrategy {
    /// Returns all strategy names.
    pub fn all_names() -> &'static [&'static str] {
        &["lenient", "strict"]
    }
}

impl std::fmt::Display for DetectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionStrategy::Lenient => write!(f, "lenient"),
            DetectionStrategy::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for DetectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(DetectionStrategy::Lenient),
            "strict" => Ok(DetectionStrategy::Strict),
            _ => Err(format!(
                "Unknown strategy: '{}'. Expected one of: {}",
                s,
                DetectionStrategy::all_names().join(", ")
            )),
        }
    }
}

/// Configuration for the dialogue extractor.
///
/// Every field has a serde default, so a JSON config file only needs the
/// keys it wants to change:
///
/// ```rust
/// use dialog_extractor::config::{DetectionStrategy, ExtractorConfig};
///
/// let config: ExtractorConfig = serde_json::from_str(r#"{"strategy": "strict"}"#).unwrap();
/// assert_eq!(config.strategy, DetectionStrategy::Strict);
/// assert_eq!(config.noise_lines, vec!["Shaders Reloaded!".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Chat line detection strategy (default: lenient)
    pub strategy: DetectionStrategy,

    /// Strings that start a two-character color code (default: `["§"]`)
    pub color_markers: Vec<String>,

    /// Cleaned payloads dropped by exact, case-sensitive equality
    /// (default: `["Shaders Reloaded!"]`)
    pub noise_lines: Vec<String>,

    /// Drop chat lines whose payload is empty after cleaning (default: false)
    pub skip_empty: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            strategy: DetectionStrategy::default(),
            color_markers: vec![SECTION_SIGN.to_string()],
            noise_lines: vec![SHADERS_RELOADED.to_string()],
            skip_empty: false,
        }
    }
}

impl ExtractorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration using the strict detection strategy.
    pub fn strict() -> Self {
        Self {
            strategy: DetectionStrategy::Strict,
            ..Self::default()
        }
    }

    /// Creates a configuration using the lenient detection strategy.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Sets the detection strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: DetectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Adds a color marker variant. Duplicates are ignored.
    #[must_use]
    pub fn with_color_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if !self.color_markers.contains(&marker) {
            self.color_markers.push(marker);
        }
        self
    }

    /// Also treats the mis-decoded section signs `ยง` and `Â§` as color markers.
    ///
    /// Useful when a UTF-8 log was read with a Thai or Western single-byte
    /// code page.
    #[must_use]
    pub fn with_misdecoded_markers(self) -> Self {
        self.with_color_marker(MISDECODED_SECTION_SIGN)
            .with_color_marker(CP1252_SECTION_SIGN)
    }

    /// Adds a noise line. Duplicates are ignored.
    #[must_use]
    pub fn with_noise_line(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        if !self.noise_lines.contains(&line) {
            self.noise_lines.push(line);
        }
        self
    }

    /// Replaces the noise list.
    #[must_use]
    pub fn with_noise_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether empty payloads are dropped.
    #[must_use]
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    /// Loads a configuration from a JSON file and validates it.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes an unusable configuration.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), strategy = %config.strategy, "Loaded extractor config");
        Ok(config)
    }

    /// Checks that the configuration can drive an extraction.
    pub fn validate(&self) -> Result<()> {
        if self.color_markers.iter().any(String::is_empty) {
            return Err(DialogError::invalid_config(
                "color marker must not be an empty string",
            ));
        }
        Ok(())
    }
}
