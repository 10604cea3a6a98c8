//! Counters describing one extraction pass.

use serde::{Deserialize, Serialize};

/// Statistics about one extraction call.
///
/// # Example
///
/// ```
/// use dialog_extractor::Extractor;
///
/// let log = "[10:00:00] [main/INFO]: boot\n[CHAT] <Bob> hi\n[CHAT] Shaders Reloaded!";
/// let (lines, stats) = Extractor::new().extract_with_stats(log);
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(stats.lines_scanned, 3);
/// assert_eq!(stats.chat_lines, 2);
/// assert_eq!(stats.noise_dropped, 1);
/// assert_eq!(stats.extracted, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Lines read from the raw log.
    pub lines_scanned: usize,
    /// Lines recognised as chat by the active strategy.
    pub chat_lines: usize,
    /// Chat lines dropped because their payload is on the noise list.
    pub noise_dropped: usize,
    /// Chat lines dropped because their payload was empty (only with `skip_empty`).
    pub empty_dropped: usize,
    /// Lines in the result.
    pub extracted: usize,
}

impl ExtractionStats {
    /// Chat lines that did not make it into the result.
    pub fn dropped(&self) -> usize {
        self.noise_dropped + self.empty_dropped
    }

    /// Percentage of scanned lines that ended up in the transcript.
    #[allow(clippy::cast_precision_loss)]
    pub fn retention_ratio(&self) -> f64 {
        if self.lines_scanned == 0 {
            return 0.0;
        }
        (self.extracted as f64 / self.lines_scanned as f64) * 100.0
    }

    /// Returns `true` if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.extracted == 0
    }
}
