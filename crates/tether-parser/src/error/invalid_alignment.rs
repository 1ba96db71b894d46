//! The [`InvalidAlignment`] error raised for rejected alignment rules.

use thiserror::Error;

use tether_core::geometry::Axis;

use crate::{error::ErrorCode, span::Span};

/// An alignment rule that could not be parsed.
///
/// Carries the full rule text together with the span of the offending part,
/// so callers can render the rule as the diagnostic source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {axis} alignment `{rule}`: {message}")]
pub struct InvalidAlignment {
    code: ErrorCode,
    axis: Axis,
    rule: String,
    span: Span,
    message: String,
    help: Option<String>,
}

impl InvalidAlignment {
    pub(crate) fn new(
        code: ErrorCode,
        axis: Axis,
        rule: impl Into<String>,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            axis,
            rule: rule.into(),
            span,
            message: message.into(),
            help: None,
        }
    }

    pub(crate) fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The axis the rule was parsed for.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The full rule text as written by the caller.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// The part of [`rule`](Self::rule) that was rejected.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the message describing the rejected part.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the help text.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}
