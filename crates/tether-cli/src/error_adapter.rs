//! Error adapter for converting TetherError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Rejected alignment
//! rules are rendered with the rule itself as source and the offending token
//! labelled.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use tether::{InvalidAlignment, Span, TetherError, identifier::ElementId};

/// Adapter for a rejected alignment rule.
pub struct AlignmentAdapter<'a> {
    /// The element the rule was applied to
    element: ElementId,
    err: &'a InvalidAlignment,
    /// The rule text, shown as the diagnostic source
    rule: &'a str,
}

impl<'a> AlignmentAdapter<'a> {
    pub fn new(element: ElementId, err: &'a InvalidAlignment) -> Self {
        Self {
            element,
            err,
            rule: err.rule(),
        }
    }
}

impl fmt::Debug for AlignmentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignmentAdapter")
            .field("element", &self.element)
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for AlignmentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} alignment for `{}`",
            self.err.axis(),
            self.element
        )
    }
}

impl std::error::Error for AlignmentAdapter<'_> {}

impl MietteDiagnostic for AlignmentAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.err
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.rule as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = span_to_miette(self.err.span());
        let message = Some(self.err.message().to_string());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(message, span),
        )))
    }
}

/// Adapter for [`TetherError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a TetherError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TetherError::Io(_) => "tether::io",
            TetherError::SceneFormat(_) => "tether::scene_format",
            TetherError::Scene(_) => "tether::scene",
            TetherError::Alignment { .. } => return None,
            TetherError::UnknownElement(_) => "tether::element",
            TetherError::Config(_) => "tether::config",
            TetherError::Export(_) => "tether::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rejected rule with the offending token labelled.
    Alignment(AlignmentAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Alignment(a) => fmt::Display::fmt(a, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Alignment(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Alignment(a) => a.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Alignment(a) => a.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Alignment(a) => a.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Alignment(a) => a.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a tether [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`TetherError`] into a list of reportable errors.
pub fn to_reportables(err: &TetherError) -> Vec<Reportable<'_>> {
    match err {
        TetherError::Alignment { element, err } => {
            vec![Reportable::Alignment(AlignmentAdapter::new(*element, err))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
