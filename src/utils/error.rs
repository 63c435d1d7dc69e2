//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A trace line that does not match the expected trace format.
///
/// This is a value, not a fault: the comparator records it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("line {line_number}: {reason}")]
pub struct ParseFailure {
    /// 1-based line number (header included in the numbering)
    pub line_number: usize,

    /// The offending line as it was handed to the parser
    pub raw_line: String,

    /// Short description of what did not match
    pub reason: String,
}

impl ParseFailure {
    pub fn new(line_number: usize, raw_line: &str, reason: impl Into<String>) -> Self {
        Self {
            line_number,
            raw_line: raw_line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while acquiring trace lines
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read trace: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid trace path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading or rendering a column layout
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Layout TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Layout TOML serialization error: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("Invalid column range for {field}: {start}..{end}")]
    InvalidRange {
        field: &'static str,
        start: usize,
        end: usize,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
