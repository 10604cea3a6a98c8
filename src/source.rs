//! Reading raw Minecraft logs from disk or any reader.
//!
//! Client logs come in two shapes: the live `latest.log` and the rotated
//! `YYYY-MM-DD-N.log.gz` archives. Both are decoded with a caller-chosen
//! [`SourceEncoding`]; the Minecraft client on Windows writes its logs in the
//! platform code page, so Windows-1252 is the default.
//!
//! # Example
//!
//! ```no_run
//! use dialog_extractor::source::{SourceEncoding, read_log};
//! use dialog_extractor::Extractor;
//!
//! let raw = read_log("logs/2024-01-15-1.log.gz", SourceEncoding::default())?;
//! let dialogue = Extractor::new().extract(Some(&raw))?;
//! # Ok::<(), dialog_extractor::DialogError>(())
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DialogError, Result};

/// First two bytes of every gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Windows-1252 code points for bytes `0x80..=0x9F`. The five positions the
/// code page leaves undefined decode to U+FFFD.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{FFFD}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{FFFD}', '\u{017D}', '\u{FFFD}',
    '\u{FFFD}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{FFFD}', '\u{017E}', '\u{0178}',
];

/// Character encoding of a log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceEncoding {
    /// Western European single-byte code page
    #[default]
    #[serde(rename = "windows-1252")]
    Windows1252,

    /// UTF-8; invalid sequences are replaced with U+FFFD
    #[serde(rename = "utf-8")]
    Utf8,
}

impl SourceEncoding {
    /// Returns all accepted encoding names.
    pub fn all_names() -> &'static [&'static str] {
        &["windows-1252", "cp1252", "utf-8", "utf8"]
    }

    /// Decodes `bytes` into text.
    ///
    /// Never fails: every byte sequence has a decoding in both encodings.
    ///
    /// ```rust
    /// use dialog_extractor::source::SourceEncoding;
    ///
    /// assert_eq!(SourceEncoding::Windows1252.decode(b"\xa7a caf\xe9 \x80"), "§a café €");
    /// assert_eq!(SourceEncoding::Utf8.decode("§a".as_bytes()), "§a");
    /// ```
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            SourceEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            SourceEncoding::Windows1252 => bytes.iter().map(|&b| cp1252_char(b)).collect(),
        }
    }
}

fn cp1252_char(byte: u8) -> char {
    match byte {
        0x80..=0x9F => CP1252_HIGH[usize::from(byte - 0x80)],
        _ => char::from(byte),
    }
}

impl std::fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceEncoding::Windows1252 => write!(f, "windows-1252"),
            SourceEncoding::Utf8 => write!(f, "utf-8"),
        }
    }
}

impl std::str::FromStr for SourceEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows-1252" | "cp1252" => Ok(SourceEncoding::Windows1252),
            "utf-8" | "utf8" => Ok(SourceEncoding::Utf8),
            _ => Err(format!(
                "Unknown encoding: '{}'. Expected one of: {}",
                s,
                SourceEncoding::all_names().join(", ")
            )),
        }
    }
}

/// Container of a log source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceKind {
    /// Uncompressed text, decoded verbatim
    #[default]
    Plain,

    /// Gzip-compressed text (rotated client logs)
    Gzip,
}

impl SourceKind {
    /// Detects the source kind from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::UnsupportedSource`] for anything other than
    /// `.log`, `.txt` or, with the `gzip` feature, `.gz`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());

        match ext.as_deref() {
            Some("log" | "txt") => Ok(SourceKind::Plain),
            #[cfg(feature = "gzip")]
            Some("gz") => Ok(SourceKind::Gzip),
            _ => Err(DialogError::unsupported_source(path)),
        }
    }

    /// Returns `true` if `bytes` start with the gzip magic number.
    pub fn is_gzip(bytes: &[u8]) -> bool {
        bytes.starts_with(&GZIP_MAGIC)
    }
}

/// Reads and decodes a log file.
///
/// The kind is taken from the extension, but gzip content is recognised by
/// its magic bytes even behind a `.log` name.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not supported
/// - The file cannot be read
/// - The gzip stream is corrupt
pub fn read_log(path: impl AsRef<Path>, encoding: SourceEncoding) -> Result<String> {
    let path = path.as_ref();
    let kind = SourceKind::from_path(path)?;
    let bytes = fs::read(path)?;
    tracing::debug!(
        path = %path.display(),
        ?kind,
        %encoding,
        bytes = bytes.len(),
        "Read log source"
    );
    decode_source(&bytes, kind, encoding)
}

/// Reads and decodes a log from any reader, e.g. standard input.
///
/// # Errors
///
/// Returns an error if reading fails or the gzip stream is corrupt.
pub fn read_log_from<R: Read>(
    mut reader: R,
    kind: SourceKind,
    encoding: SourceEncoding,
) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    tracing::debug!(?kind, %encoding, bytes = bytes.len(), "Read log stream");
    decode_source(&bytes, kind, encoding)
}

fn decode_source(bytes: &[u8], kind: SourceKind, encoding: SourceEncoding) -> Result<String> {
    let kind = if kind == SourceKind::Plain && SourceKind::is_gzip(bytes) {
        tracing::debug!("Gzip magic found in plain source, decompressing");
        SourceKind::Gzip
    } else {
        kind
    };

    match kind {
        SourceKind::Plain => Ok(encoding.decode(bytes)),
        SourceKind::Gzip => {
            let inflated = gunzip(bytes)?;
            let text = encoding.decode(&inflated);
            Ok(normalize_line_breaks(&text))
        }
    }
}

/// Rejoins lines with `\n`, treating `\r\n`, a lone `\r` and `\n` alike.
///
/// A single trailing terminator does not start a new line.
fn normalize_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            chars.next_if_eq(&'\n');
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

#[cfg(feature = "gzip")]
fn gunzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = flate2::read::MultiGzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(not(feature = "gzip"))]
fn gunzip(_bytes: &[u8]) -> Result<Vec<u8>> {
    Err(DialogError::Io(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "gzip sources require the 'gzip' feature to be enabled",
    )))
}
