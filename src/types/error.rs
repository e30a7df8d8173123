//! Error types for the library loan engine
//!
//! Two kinds of failure exist and they are deliberately kept apart:
//!
//! - **Fatal errors** ([`LibraryError`]): I/O failures while reading a data
//!   file or writing a report. These abort the current menu action and are
//!   reported to the caller as `Err`.
//! - **Recoverable line errors** ([`LoadError`]): validation and
//!   cross-reference problems on individual input lines. These are data, not
//!   `Err`s — they are accumulated in arrival order on the store and the bad
//!   line is skipped, never aborting the rest of the file.

use std::fmt;
use thiserror::Error;

/// Fatal error for file load and report export operations
///
/// Line-level validation problems never appear here; they are collected as
/// [`LoadError`] records instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading a data file or writing a report
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Input file is not valid UTF-8
    #[error("File '{path}' is not valid UTF-8")]
    InvalidEncoding {
        /// The offending file path
        path: String,
    },
}

impl From<std::io::Error> for LibraryError {
    fn from(error: std::io::Error) -> Self {
        LibraryError::Io {
            message: error.to_string(),
        }
    }
}

/// Which input file kind a [`LoadError`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Users,
    Books,
    Loans,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SourceKind::Users => "users",
            SourceKind::Books => "books",
            SourceKind::Loans => "loans",
        };
        f.write_str(tag)
    }
}

/// One recoverable per-line load error
///
/// Accumulated in arrival order and never deduplicated. The message body comes
/// from the validator (character, field-count, empty-field or date errors) or
/// from the cross-reference check during loan loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// Which input file kind produced the error
    pub source: SourceKind,
    /// 1-indexed line number in the input file
    pub line: u64,
    /// Human-readable description of the problem
    pub message: String,
}

impl LoadError {
    pub fn new(source: SourceKind, line: u64, message: impl Into<String>) -> Self {
        LoadError {
            source,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Line {}: {}", self.source, self.line, self.message)
    }
}
