//! Output configuration shared by the structured writers.

use serde::{Deserialize, Serialize};

/// Configuration for structured output formats.
/// Controls which metadata fields accompany each dialogue line.
///
/// The plain-text transcript ignores this; it is always payload only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include the `[HH:MM:SS]` log time
    pub include_timestamps: bool,
    /// Include the 1-based source line number
    pub include_line_numbers: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_line_numbers(mut self) -> Self {
        self.include_line_numbers = true;
        self
    }
}

/// Format used for timestamps in every structured writer.
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";
