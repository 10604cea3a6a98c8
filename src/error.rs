//! Unified error types for dialog-extractor.
//!
//! This module provides a single [`DialogError`] enum covering every failure
//! in the crate, from the extraction core (an absent input) to the
//! collaborator layers that read logs and write transcripts.
//!
//! # Error Handling Philosophy
//!
//! - The extraction core fails only on an absent input, and fails the whole call
//! - Source acquisition and output writing carry the path or format involved
//! - Underlying I/O, JSON and CSV errors are kept as sources

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for dialog-extractor operations.
///
/// # Example
///
/// ```rust
/// use dialog_extractor::error::Result;
///
/// fn my_function() -> Result<String> {
///     dialog_extractor::extract(Some("[CHAT] hello"))
/// }
/// # assert_eq!(my_function().unwrap(), "hello");
/// ```
pub type Result<T> = std::result::Result<T, DialogError>;

/// The error type for all dialog-extractor operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DialogError {
    /// The log text handed to the extractor was absent.
    ///
    /// An absent input is never treated as an empty log.
    #[error("Null reference: no log text was supplied to the extractor")]
    NullReference,

    /// The source file cannot be read as a Minecraft log.
    ///
    /// Only `.log`, `.txt` and (with the `gzip` feature) `.gz` files are accepted.
    #[error("Unsupported source '{}': {}", path.display(), describe_extension(extension))]
    UnsupportedSource {
        /// The offending file path
        path: PathBuf,
        /// The extension that was found, if any (without the dot)
        extension: Option<String>,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The gzip stream is truncated or corrupt
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The extractor configuration is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// The requested output format is not recognised.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization or config parsing error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

fn describe_extension(extension: &Option<String>) -> String {
    match extension {
        Some(ext) => format!("unsupported file extension '.{ext}'"),
        None => "file has no extension".to_string(),
    }
}

impl From<std::string::FromUtf8Error> for DialogError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DialogError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl DialogError {
    /// Creates an unsupported source error for the given path.
    pub fn unsupported_source(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        DialogError::UnsupportedSource { path, extension }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DialogError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        DialogError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the input text was absent.
    pub fn is_null_reference(&self) -> bool {
        matches!(self, DialogError::NullReference)
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, DialogError::Io(_))
    }

    /// Returns `true` if the source file was rejected.
    pub fn is_unsupported_source(&self) -> bool {
        matches!(self, DialogError::UnsupportedSource { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, DialogError::InvalidConfig { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
