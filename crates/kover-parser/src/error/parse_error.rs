//! The ParseError type returned when a scene is rejected.

use std::fmt;

use crate::{
    error::{Diagnostic, SceneErrorKind},
    span::Span,
};

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for reading a scene.
///
/// Holds the typed [`SceneErrorKind`] and the [`Diagnostic`] describing
/// where in the source it happened. Displays as the plain error message.
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: SceneErrorKind,
    diagnostic: Diagnostic,
}

impl ParseError {
    /// Create a parse error; the diagnostic takes its message, code and help
    /// text from `kind`.
    pub fn new(kind: SceneErrorKind) -> Self {
        let mut diagnostic = Diagnostic::error(kind.to_string()).with_code(kind.code());
        if let Some(help) = kind.help() {
            diagnostic = diagnostic.with_help(help);
        }
        Self { kind, diagnostic }
    }

    /// Add a primary label to the diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.diagnostic = self.diagnostic.with_label(span, message);
        self
    }

    /// Add a secondary label to the diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.diagnostic = self.diagnostic.with_secondary_label(span, message);
        self
    }

    /// What went wrong.
    pub fn kind(&self) -> &SceneErrorKind {
        &self.kind
    }

    /// Where it went wrong.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for ParseError {}

impl From<SceneErrorKind> for ParseError {
    fn from(kind: SceneErrorKind) -> Self {
        Self::new(kind)
    }
}
