//! Minecraft client log line utilities.
//!
//! A client log interleaves chat with thousands of engine lines:
//!
//! ```text
//! [15:50:06] [Render thread/INFO]: Sound engine started
//! [15:50:12] [Render thread/INFO]: [System] [CHAT] <§fKohaku§f [dit]> h_uh^bthaah?.
//! ```
//!
//! These helpers recognise chat lines, cut the payload out of them and strip
//! in-band color codes. They never allocate unless a line actually changes.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

/// Marker every chat line carries, whatever the surrounding prefix.
pub const CHAT_MARKER: &str = "[CHAT]";

/// `[HH:MM:SS] [Render thread/INFO]: [System] [CHAT] payload`
const STRICT_CHAT_PATTERN: &str =
    r"^\[([0-9]{2}:[0-9]{2}:[0-9]{2})\] \[Render thread/INFO\]: \[System\] \[CHAT\](.*)$";

/// The same prefix anywhere in a line.
const STRICT_PREFIX_PATTERN: &str =
    r"\[[0-9]{2}:[0-9]{2}:[0-9]{2}\] \[Render thread/INFO\]: \[System\] \[CHAT\]";

static STRICT_CHAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRICT_CHAT_PATTERN).expect("strict chat pattern compiles"));

static STRICT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRICT_PREFIX_PATTERN).expect("strict prefix pattern compiles"));

/// A chat line recognised by the strict pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictChatLine<'a> {
    /// Parsed `[HH:MM:SS]` prefix; `None` when the digits are out of range.
    pub timestamp: Option<NaiveTime>,
    /// Everything after `[CHAT]`, untrimmed.
    pub payload: &'a str,
}

/// Matches a line against the strict render-thread chat shape.
///
/// Returns `None` for anything else, including lines that contain `[CHAT]`
/// with a different prefix.
pub fn match_strict_chat_line(line: &str) -> Option<StrictChatLine<'_>> {
    let caps = STRICT_CHAT_RE.captures(line)?;
    let timestamp = caps
        .get(1)
        .and_then(|m| NaiveTime::parse_from_str(m.as_str(), "%H:%M:%S").ok());
    let payload = caps.get(2).map_or("", |m| m.as_str());
    Some(StrictChatLine { timestamp, payload })
}

/// Removes every strict chat prefix embedded in a payload.
///
/// Removal can join the halves of an outer prefix, so this repeats until no
/// prefix is left.
pub fn strip_strict_chat_prefixes(payload: &str) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(payload);
    while STRICT_PREFIX_RE.is_match(&text) {
        text = Cow::Owned(STRICT_PREFIX_RE.replace_all(&text, "").into_owned());
    }
    text
}

/// Returns the payload after the last `[CHAT]` marker, or `None` if the line
/// has no marker.
pub fn strip_chat_prefix_lenient(line: &str) -> Option<&str> {
    line.rfind(CHAT_MARKER)
        .map(|idx| &line[idx + CHAT_MARKER.len()..])
}

/// Parses a leading `[HH:MM:SS]` prefix.
pub fn parse_log_timestamp(line: &str) -> Option<NaiveTime> {
    let bytes = line.as_bytes();
    if bytes.len() < 10 || bytes[0] != b'[' || bytes[9] != b']' {
        return None;
    }
    let time = line.get(1..9)?;
    if !time.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    NaiveTime::parse_from_str(time, "%H:%M:%S").ok()
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Removes every color code: a marker followed by any single character.
///
/// The pair is deleted outright, never replaced by a space. A marker at the
/// end of the text, or followed by a line terminator, is left in place.
/// Markers are tried in order at each position.
///
/// ```
/// use dialog_extractor::parsing::strip_color_codes;
///
/// let markers = vec!["§".to_string()];
/// assert_eq!(strip_color_codes("<§fKohaku§f [dit]>", &markers), "<Kohaku [dit]>");
/// assert_eq!(strip_color_codes("§§a", &markers), "a");
/// assert_eq!(strip_color_codes("tail§", &markers), "tail§");
/// ```
pub fn strip_color_codes<'a>(text: &'a str, markers: &[String]) -> Cow<'a, str> {
    let markers: Vec<&str> = markers
        .iter()
        .map(String::as_str)
        .filter(|m| !m.is_empty() && text.contains(m))
        .collect();
    if markers.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while !rest.is_empty() {
        for marker in &markers {
            if let Some(after) = rest.strip_prefix(marker) {
                let mut chars = after.chars();
                if chars.next().is_some_and(|c| !is_line_terminator(c)) {
                    rest = chars.as_str();
                    continue 'scan;
                }
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    Cow::Owned(out)
}

/// Exact, case-sensitive membership test against the noise list.
pub fn is_noise_line(payload: &str, noise_lines: &[String]) -> bool {
    noise_lines.iter().any(|noise| noise == payload)
}
