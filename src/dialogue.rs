//! Structured form of one extracted dialogue line.
//!
//! [`extract`](crate::Extractor::extract) returns plain text, which is all most
//! callers need. [`DialogueLine`] keeps the two bits of metadata the log line
//! carried alongside the payload, for the structured output writers.
//!
//! ```
//! use dialog_extractor::DialogueLine;
//! use chrono::NaiveTime;
//!
//! let line = DialogueLine::new("<Kohaku> hi", 42)
//!     .with_timestamp(NaiveTime::from_hms_opt(15, 50, 12).unwrap());
//!
//! assert_eq!(line.content(), "<Kohaku> hi");
//! assert_eq!(line.line_number(), 42);
//! assert_eq!(line.to_string(), "<Kohaku> hi");
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One cleaned chat line, in the order it appeared in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Payload with the log prefix and color codes removed, trimmed.
    pub content: String,

    /// Client-local time from the `[HH:MM:SS]` prefix, if the line had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveTime>,

    /// 1-based index of the source line in the raw log.
    pub line_number: usize,
}

impl DialogueLine {
    /// Creates a line without a timestamp.
    pub fn new(content: impl Into<String>, line_number: usize) -> Self {
        Self {
            content: content.into(),
            timestamp: None,
            line_number,
        }
    }

    /// Attaches the log timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Returns the cleaned payload.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the log timestamp, if the line carried one.
    pub fn timestamp(&self) -> Option<NaiveTime> {
        self.timestamp
    }

    /// Returns the 1-based line number in the source log.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns `true` if the payload is empty after cleaning.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for DialogueLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

/// Joins dialogue lines with `\n`, without a trailing separator.
pub fn join_lines(lines: &[DialogueLine]) -> String {
    let capacity = lines.iter().map(|l| l.content.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&line.content);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines() {
        let lines = vec![DialogueLine::new("a", 1), DialogueLine::new("b", 3)];
        assert_eq!(join_lines(&lines), "a\nb");
        assert_eq!(join_lines(&[]), "");
    }

    #[test]
    fn test_join_keeps_empty_payloads() {
        let lines = vec![
            DialogueLine::new("a", 1),
            DialogueLine::new("", 2),
            DialogueLine::new("b", 3),
        ];
        assert_eq!(join_lines(&lines), "a\n\nb");
    }

    #[test]
    fn test_is_empty() {
        assert!(DialogueLine::new("", 1).is_empty());
        assert!(!DialogueLine::new("x", 1).is_empty());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_serialize_omits_missing_timestamp() {
        let json = serde_json::to_string(&DialogueLine::new("hi", 7)).unwrap();
        assert_eq!(json, r#"{"content":"hi","line_number":7}"#);

        let with_ts = DialogueLine::new("hi", 7)
            .with_timestamp(NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        let json = serde_json::to_string(&with_ts).unwrap();
        assert!(json.contains(r#""timestamp":"09:05:00""#));
    }
}
