//! Collaborator-side processing for extracted dialogue.
//!
//! This module contains:
//! - [`models`] - Output configuration
//! - [`stats`] - Per-call extraction counters
//! - [`output`] - Format writers (text, JSON, JSONL, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use dialog_extractor::Extractor;
//! use dialog_extractor::core::{OutputConfig, to_text};
//!
//! let lines = Extractor::new().extract_lines("[CHAT] <Bob> hi");
//! assert_eq!(to_text(&lines), "<Bob> hi");
//! # let _ = OutputConfig::new();
//! ```

pub mod models;
pub mod output;
pub mod stats;

// Re-export main types for convenience
pub use models::OutputConfig;
pub use stats::ExtractionStats;

pub use output::{to_text, write_text};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
