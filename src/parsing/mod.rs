//! Shared line-level parsing utilities.
//!
//! Used by the [`Extractor`](crate::Extractor) for both detection strategies.

pub mod minecraft;

pub use minecraft::{
    CHAT_MARKER, StrictChatLine, is_noise_line, match_strict_chat_line, parse_log_timestamp,
    strip_chat_prefix_lenient, strip_color_codes, strip_strict_chat_prefixes,
};
