//! Error types for configuration, font loading and export

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a value is rejected at the input boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("text is {len} characters long (maximum is {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("font family must not be empty")]
    EmptyFontFamily,

    #[error("invalid stroke color '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),

    #[error("unknown animation timing '{0}'")]
    UnknownTiming(String),

    #[error("unknown fill mode '{0}'")]
    UnknownFillMode(String),

    #[error("unknown animation preset '{0}'")]
    UnknownPreset(String),
}

/// Errors that can occur while reading an uploaded font file
#[derive(Error, Debug)]
pub enum FontError {
    #[error("unsupported font file '{}' (expected .otf, .ttf, .woff or .woff2)", path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error("cannot derive a font name from '{}'", path.display())]
    MissingName { path: PathBuf },

    #[error("font file '{}' is empty", path.display())]
    Empty { path: PathBuf },

    #[error("failed to read font file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the copy and download actions
#[derive(Error, Debug)]
pub enum ExportError {
    /// Export is disabled while the text is empty
    #[error("nothing to export: text is empty")]
    EmptyText,

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
