//! The dialogue extraction pipeline.
//!
//! One linear pass over the raw log:
//!
//! 1. split on `\n`
//! 2. keep chat lines (per [`DetectionStrategy`])
//! 3. cut the timestamp/thread/`[CHAT]` prefix
//! 4. strip color codes, trim
//! 5. drop noise lines (and, if configured, empty payloads)
//! 6. join the survivors with `\n`
//!
//! # Example
//!
//! ```rust
//! use dialog_extractor::Extractor;
//!
//! let log = "\
//! [15:50:06] [Render thread/INFO]: Sound engine started
//! [15:50:12] [Render thread/INFO]: [System] [CHAT] <§fKohaku§f [dit]> h_uh^bthaah?.
//! [CHAT] Shaders Reloaded!";
//!
//! let dialogue = Extractor::new().extract(Some(log))?;
//! assert_eq!(dialogue, "<Kohaku [dit]> h_uh^bthaah?.");
//! # Ok::<(), dialog_extractor::DialogError>(())
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::config::{DetectionStrategy, ExtractorConfig};
use crate::core::stats::ExtractionStats;
use crate::dialogue::{DialogueLine, join_lines};
use crate::error::{DialogError, Result};
use crate::observe::ExtractionObserver;
use crate::parsing::{
    is_noise_line, match_strict_chat_line, parse_log_timestamp, strip_chat_prefix_lenient,
    strip_color_codes, strip_strict_chat_prefixes,
};

/// Extracts chat dialogue from Minecraft client logs.
///
/// An extractor is immutable once built; every call is independent, so one
/// instance can be shared freely between threads.
#[derive(Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
    observer: Option<Arc<dyn ExtractionObserver>>,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Extractor {
    /// Creates an extractor with the default (lenient) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with a custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            observer: None,
        })
    }

    /// Creates an extractor using the strict detection strategy.
    pub fn strict() -> Self {
        Self {
            config: ExtractorConfig::strict(),
            observer: None,
        }
    }

    /// Attaches an observer that receives the stats of every call.
    #[must_use]
    pub fn with_observer(mut self, observer: impl ExtractionObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Returns the detection strategy in use.
    pub fn strategy(&self) -> DetectionStrategy {
        self.config.strategy
    }

    /// Extracts the dialogue transcript from a raw log.
    ///
    /// Returns the cleaned lines joined by `\n`, or an empty string if the log
    /// holds no chat lines.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::NullReference`] if `log` is `None`. An absent
    /// log is not the same as an empty one.
    pub fn extract(&self, log: Option<&str>) -> Result<String> {
        let log = log.ok_or(DialogError::NullReference)?;
        Ok(self.extract_str(log))
    }

    /// Extracts the dialogue transcript from a log that is known to be present.
    pub fn extract_str(&self, log: &str) -> String {
        let (lines, _) = self.extract_with_stats(log);
        join_lines(&lines)
    }

    /// Extracts dialogue as structured lines.
    pub fn extract_lines(&self, log: &str) -> Vec<DialogueLine> {
        self.extract_with_stats(log).0
    }

    /// Extracts dialogue as structured lines, along with pass statistics.
    pub fn extract_with_stats(&self, log: &str) -> (Vec<DialogueLine>, ExtractionStats) {
        let mut stats = ExtractionStats::default();
        let mut lines = Vec::new();

        if !log.is_empty() {
            for (idx, raw) in log.split('\n').enumerate() {
                stats.lines_scanned += 1;

                let Some((timestamp, payload)) = self.detect(raw) else {
                    continue;
                };
                stats.chat_lines += 1;

                let cleaned = self.clean_payload(payload);
                let cleaned = cleaned.trim();

                if is_noise_line(cleaned, &self.config.noise_lines) {
                    stats.noise_dropped += 1;
                    continue;
                }
                if cleaned.is_empty() && self.config.skip_empty {
                    stats.empty_dropped += 1;
                    continue;
                }

                let mut line = DialogueLine::new(cleaned, idx + 1);
                line.timestamp = timestamp;
                lines.push(line);
            }
        }

        stats.extracted = lines.len();
        if let Some(observer) = &self.observer {
            observer.on_extraction(self.config.strategy, &stats);
        }
        (lines, stats)
    }

    /// Strips color codes and any chat prefix they uncover.
    ///
    /// Repeats until a pass removes nothing, so the result never contains a
    /// prefix the current strategy would detect.
    fn clean_payload<'a>(&self, payload: &'a str) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(payload);
        loop {
            let next = {
                let stripped = strip_color_codes(&text, &self.config.color_markers);
                let cut = match self.config.strategy {
                    DetectionStrategy::Strict => strip_strict_chat_prefixes(&stripped),
                    DetectionStrategy::Lenient => {
                        Cow::Borrowed(strip_chat_prefix_lenient(&stripped).unwrap_or(&*stripped))
                    }
                };
                // Both steps only delete, so an unchanged length means a fixed point.
                (cut.len() != text.len()).then(|| cut.into_owned())
            };
            match next {
                Some(changed) => text = Cow::Owned(changed),
                None => return text,
            }
        }
    }

    /// Returns the optional timestamp and the raw payload if `line` is chat.
    fn detect<'a>(
        &self,
        line: &'a str,
    ) -> Option<(Option<chrono::NaiveTime>, &'a str)> {
        match self.config.strategy {
            DetectionStrategy::Strict => {
                match_strict_chat_line(line).map(|m| (m.timestamp, m.payload))
            }
            DetectionStrategy::Lenient => {
                strip_chat_prefix_lenient(line).map(|p| (parse_log_timestamp(line), p))
            }
        }
    }
}

/// Extracts dialogue with the default configuration.
///
/// ```
/// assert_eq!(dialog_extractor::extract(Some("")).unwrap(), "");
/// assert!(dialog_extractor::extract(None).unwrap_err().is_null_reference());
/// ```
pub fn extract(log: Option<&str>) -> Result<String> {
    Extractor::new().extract(log)
}
