//! Error types for parsing and scheduling.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level errors returned by the parsing API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested language has no registered adapter.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A grammar's ABI version falls outside the runtime's supported range.
    #[error(
        "grammar ABI mismatch for {language}: version {version} not in supported range {minimum}..={maximum}"
    )]
    GrammarAbiMismatch {
        /// Language whose grammar failed validation.
        language: String,
        /// ABI version reported by the grammar.
        version: usize,
        /// Oldest ABI version the runtime accepts.
        minimum: usize,
        /// Newest ABI version the runtime accepts.
        maximum: usize,
    },

    /// The parser could not produce a tree for a file.
    #[error("failed to parse {path}: {message}")]
    ParseFailed {
        /// File that failed to parse.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// File contents were not valid UTF-8.
    #[error("invalid UTF-8 in {path}")]
    InvalidEncoding {
        /// File with undecodable contents.
        path: PathBuf,
    },

    /// Filesystem error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The worker pool could not be constructed or a task failed outright.
    #[error("scheduling failure: {0}")]
    Scheduling(String),
}

/// Category of a per-file failure recorded during batch parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseErrorKind {
    /// The grammar rejected the file outright.
    ParseFailed,
    /// No adapter registered for the file's language.
    UnsupportedLanguage,
    /// File contents were not valid UTF-8.
    EncodingError,
    /// The file could not be read.
    IoError,
}

impl ParseErrorKind {
    /// Short stable name, used in log fields and serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParseFailed => "parse_failed",
            Self::UnsupportedLanguage => "unsupported_language",
            Self::EncodingError => "encoding_error",
            Self::IoError => "io_error",
        }
    }
}

/// A single file's failure, collected (rather than fatal) when a batch runs
/// with `ignore_errors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseError {
    /// File that failed.
    pub path: PathBuf,
    /// What category of failure occurred.
    pub kind: ParseErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl ParseError {
    /// Build a `ParseError` from a top-level error, preserving its category.
    #[must_use]
    pub fn from_error(path: PathBuf, error: &Error) -> Self {
        let kind = match error {
            Error::UnsupportedLanguage(_) | Error::GrammarAbiMismatch { .. } => {
                ParseErrorKind::UnsupportedLanguage
            }
            Error::ParseFailed { .. } => ParseErrorKind::ParseFailed,
            Error::InvalidEncoding { .. } => ParseErrorKind::EncodingError,
            Error::Io(_) | Error::Scheduling(_) => ParseErrorKind::IoError,
        };
        Self {
            path,
            kind,
            message: error.to_string(),
        }
    }

    /// True when the failure is attributable to the input file rather than
    /// the runtime (bad syntax, bad encoding, unknown language).
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::ParseFailed
                | ParseErrorKind::EncodingError
                | ParseErrorKind::UnsupportedLanguage
        )
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.kind.as_str(),
            self.path.display(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_preserves_category() {
        let err = Error::UnsupportedLanguage("cobol".into());
        let pe = ParseError::from_error(PathBuf::from("a.cbl"), &err);
        assert_eq!(pe.kind, ParseErrorKind::UnsupportedLanguage);
        assert!(pe.is_input_error());
    }

    #[test]
    fn io_errors_are_not_input_errors() {
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let pe = ParseError::from_error(PathBuf::from("missing.py"), &io);
        assert_eq!(pe.kind, ParseErrorKind::IoError);
        assert!(!pe.is_input_error());
    }

    #[test]
    fn display_includes_kind_and_path() {
        let pe = ParseError {
            path: PathBuf::from("src/app.js"),
            kind: ParseErrorKind::ParseFailed,
            message: "syntax error".into(),
        };
        let rendered = pe.to_string();
        assert!(rendered.contains("parse_failed"));
        assert!(rendered.contains("src/app.js"));
    }

    #[test]
    fn abi_mismatch_message_names_the_range() {
        let err = Error::GrammarAbiMismatch {
            language: "go".into(),
            version: 12,
            minimum: 13,
            maximum: 15,
        };
        let msg = err.to_string();
        assert!(msg.contains("go"));
        assert!(msg.contains("13..=15"));
    }
}
