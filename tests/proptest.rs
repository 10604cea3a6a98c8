//! Property-based tests for dialog-extractor.
//!
//! These tests generate random logs to find edge cases in detection and
//! cleaning.

use proptest::prelude::*;

use dialog_extractor::config::SHADERS_RELOADED;
use dialog_extractor::{Extractor, extract};

/// Payload text without brackets or section signs, so it can neither start a
/// color code nor contain a chat marker.
fn arb_payload() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>.,!?*_^'-]{0,30}"
}

/// Payload text that may carry color codes, brackets and chat prefixes, or
/// fragments of them that color codes can splice back together.
fn arb_colored_payload() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 <>.!?\\[\\]]{1,8}",
            prop::sample::select(vec![
                "[CHAT]".to_string(),
                "[CH".to_string(),
                "AT]".to_string(),
                "[15:50:13] [Render thread/INFO]: [System] [CHAT]".to_string(),
                "[15:50:13] [Render thread/INFO]: [System] ".to_string(),
            ]),
            prop::sample::select(vec![
                "§f".to_string(),
                "§a".to_string(),
                "§l".to_string(),
                "§r".to_string(),
                "§§".to_string(),
                "§é".to_string(),
            ]),
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

/// One raw log line of a random kind.
fn arb_log_line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "[12:00:00] [Render thread/INFO]: [System] [CHAT] ",
            "[12:00:01] [Render thread/INFO]: ",
            "[12:00:02] [Server thread/INFO]: [CHAT] ",
            "[CHAT] ",
            "",
        ]),
        arb_colored_payload(),
    )
        .prop_map(|(prefix, payload)| format!("{prefix}{payload}"))
}

fn chat_log(payloads: &[String]) -> String {
    payloads
        .iter()
        .map(|p| format!("[CHAT] {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================
    // ORDER AND COUNT
    // ============================================

    /// Every chat line yields exactly its trimmed payload, in order
    #[test]
    fn chat_lines_kept_in_order(payloads in prop::collection::vec(arb_payload(), 0..20)) {
        prop_assume!(payloads.iter().all(|p| p.trim() != SHADERS_RELOADED));

        let lines = Extractor::new().extract_lines(&chat_log(&payloads));
        let got: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
        let expected: Vec<&str> = payloads.iter().map(|p| p.trim()).collect();
        prop_assert_eq!(got, expected);
    }

    /// Lines without a chat marker never contribute
    #[test]
    fn non_chat_lines_ignored(lines in prop::collection::vec(arb_payload(), 0..20)) {
        let log = lines.join("\n");
        prop_assert_eq!(extract(Some(&log)).unwrap(), "");
        prop_assert_eq!(Extractor::strict().extract_str(&log), "");
    }

    /// Strict detection accepts a subset of what lenient detection accepts
    #[test]
    fn strict_is_subset_of_lenient(lines in prop::collection::vec(arb_log_line(), 0..20)) {
        let log = lines.join("\n");
        let (_, strict) = Extractor::strict().extract_with_stats(&log);
        let (_, lenient) = Extractor::new().extract_with_stats(&log);
        prop_assert!(strict.chat_lines <= lenient.chat_lines);
        prop_assert_eq!(strict.lines_scanned, lenient.lines_scanned);
    }

    /// Stats always add up
    #[test]
    fn stats_are_consistent(lines in prop::collection::vec(arb_log_line(), 0..20)) {
        let log = lines.join("\n");
        let (out, stats) = Extractor::new().extract_with_stats(&log);
        prop_assert_eq!(stats.extracted, out.len());
        prop_assert_eq!(stats.chat_lines, stats.extracted + stats.dropped());
        prop_assert!(stats.chat_lines <= stats.lines_scanned);
    }

    // ============================================
    // CLEANING
    // ============================================

    /// No color code survives: a section sign may only remain as the last char
    #[test]
    fn color_codes_removed(payloads in prop::collection::vec(arb_colored_payload(), 1..10)) {
        let out = extract(Some(&chat_log(&payloads))).unwrap();
        for line in out.split('\n') {
            if let Some(idx) = line.find('§') {
                prop_assert_eq!(idx + '§'.len_utf8(), line.len(), "code left in {:?}", line);
            }
        }
    }

    /// A transcript carries no chat markers, so extracting it yields nothing
    #[test]
    fn reextracting_output_is_empty(lines in prop::collection::vec(arb_log_line(), 0..20)) {
        let log = lines.join("\n");
        for extractor in [Extractor::new(), Extractor::strict()] {
            let first = extractor.extract_str(&log);
            prop_assert_eq!(extractor.extract_str(&first), "", "from {:?}", first);
        }
    }

    /// Wrapping each transcript line back into a chat line changes nothing
    #[test]
    fn extraction_is_idempotent(payloads in prop::collection::vec(arb_colored_payload(), 0..10)) {
        let first = extract(Some(&chat_log(&payloads))).unwrap();
        let again: Vec<String> = first.split('\n').map(str::to_string).collect();
        let second = extract(Some(&chat_log(&again))).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The default noise line never appears in the output
    #[test]
    fn noise_never_emitted(
        payloads in prop::collection::vec(arb_payload(), 0..10),
        at in 0usize..10,
    ) {
        let mut payloads = payloads;
        let at = at.min(payloads.len());
        payloads.insert(at, format!("§a{SHADERS_RELOADED}  "));

        let lines = Extractor::new().extract_lines(&chat_log(&payloads));
        prop_assert!(lines.iter().all(|l| l.content != SHADERS_RELOADED));
        prop_assert!(lines.len() < payloads.len());
    }

    // ============================================
    // ROBUSTNESS
    // ============================================

    /// Arbitrary input never panics
    #[test]
    fn never_panics(log in any::<String>()) {
        let _ = Extractor::new().extract_str(&log);
        let _ = Extractor::strict().extract_str(&log);
    }
}
