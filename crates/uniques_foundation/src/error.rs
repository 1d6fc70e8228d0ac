//! Error types for the uniques system.
//!
//! Analysis paths (matching, compliance, validation) never fail; they return
//! data. These errors cover the fallible helper APIs: parsing `Stats`
//! literals and resolving names to identifiers.

use thiserror::Error;

/// The main error type for uniques operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid stats literal error.
    #[must_use]
    pub fn invalid_stats(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidStats {
            text: text.into(),
            reason: reason.into(),
        })
    }

    /// Creates an unknown stat name error.
    #[must_use]
    pub fn unknown_stat(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownStat(name.into()))
    }

    /// Creates an unknown unique type error.
    #[must_use]
    pub fn unknown_unique_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownUniqueType(name.into()))
    }

    /// Creates an unknown name category error.
    #[must_use]
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCategory(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text is not a well-formed `Stats` literal.
    #[error("invalid stats literal `{text}`: {reason}")]
    InvalidStats {
        /// The offending text.
        text: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Name does not denote a stat.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// Name does not denote a catalog entry.
    #[error("unknown unique type: {0}")]
    UnknownUniqueType(String),

    /// Name does not denote a ruleset category.
    #[error("unknown ruleset category: {0}")]
    UnknownCategory(String),
}

/// Result type alias for uniques operations.
pub type Result<T> = std::result::Result<T, Error>;
