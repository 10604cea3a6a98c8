//! # dialog-extractor
//!
//! Extracts the in-game chat dialogue from Minecraft client logs.
//!
//! A client log interleaves chat with engine, resource and network messages.
//! This crate keeps only the chat lines, removes the log prefix and the `§`
//! color codes, drops known system noise and returns a clean transcript.
//!
//! ## Quick Start
//!
//! ```rust
//! use dialog_extractor::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let log = "\
//! [15:50:06] [Render thread/INFO]: Reloading ResourceManager: Default
//! [15:50:12] [Render thread/INFO]: [System] [CHAT] <§fKohaku§f [dit]> h_uh^bthaah?.
//! [15:50:30] [Render thread/INFO]: [System] [CHAT] Shaders Reloaded!";
//!
//!     let dialogue = Extractor::new().extract(Some(log))?;
//!     assert_eq!(dialogue, "<Kohaku [dit]> h_uh^bthaah?.");
//!     Ok(())
//! }
//! ```
//!
//! ## Detection strategies
//!
//! - [`DetectionStrategy::Lenient`] (default) keeps any line containing
//!   `[CHAT]`, taking the text after its last occurrence
//! - [`DetectionStrategy::Strict`] keeps only fully formed
//!   `[HH:MM:SS] [Render thread/INFO]: [System] [CHAT] ...` lines
//!
//! ## Reading log files
//!
//! ```rust,no_run
//! use dialog_extractor::prelude::*;
//! use dialog_extractor::source::{SourceEncoding, read_log};
//!
//! let raw = read_log("logs/2024-01-15-1.log.gz", SourceEncoding::Windows1252)?;
//! let lines = Extractor::new().extract_lines(&raw);
//! write_text(&lines, "logs/2024-01-15-1-dialog-extracted.log")?;
//! # Ok::<(), dialog_extractor::DialogError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`extractor`] - [`Extractor`] and the free [`extract`] function
//! - [`config`] - [`ExtractorConfig`], [`DetectionStrategy`]
//! - [`parsing`] - line-level recognisers and cleaners
//! - [`dialogue`] - [`DialogueLine`]
//! - [`observe`] - [`ExtractionObserver`], [`TracingObserver`]
//! - [`source`] - reading `.log`, `.txt` and `.log.gz` files
//! - [`core`] - [`ExtractionStats`], output configuration and writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and output naming
//! - [`error`] - [`DialogError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod dialogue;
pub mod error;
pub mod extractor;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod observe;
pub mod parsing;
pub mod source;

// Re-export the main types at the crate root for convenience
pub use config::{DetectionStrategy, ExtractorConfig};
pub use core::stats::ExtractionStats;
pub use dialogue::DialogueLine;
pub use error::{DialogError, Result};
pub use extractor::{Extractor, extract};
pub use observe::{ExtractionObserver, TracingObserver};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use dialog_extractor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{DetectionStrategy, ExtractorConfig};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::stats::ExtractionStats;
    pub use crate::dialogue::DialogueLine;
    pub use crate::error::{DialogError, Result};
    pub use crate::extractor::{Extractor, extract};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::observe::{ExtractionObserver, TracingObserver};
    pub use crate::source::{SourceEncoding, read_log};

    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
