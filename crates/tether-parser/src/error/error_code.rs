//! Error codes for alignment rule diagnostics.

use std::fmt;

/// Error codes for categorizing invalid alignment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unknown anchor token.
    ///
    /// The token is neither a named anchor of the axis nor a percentage.
    E001,

    /// Malformed anchor pair.
    ///
    /// A rule aligning against another element must contain exactly one
    /// `on` separator between two anchors.
    E002,

    /// Percentage out of range.
    ///
    /// A percentage token was well formed but lies outside `0%..=100%`.
    E003,
}

impl ErrorCode {
    /// Returns the error code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
        }
    }

    /// Returns a short description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unknown anchor",
            ErrorCode::E002 => "malformed anchor pair",
            ErrorCode::E003 => "percentage out of range",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
