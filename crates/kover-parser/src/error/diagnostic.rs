//! The diagnostic type attached to every parse error.
//!
//! A [`Diagnostic`] carries an optional error code, labeled source spans,
//! and help text, which is everything a renderer needs to point at the
//! offending line of a scene.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E302]: buildings A and B are overlapping
///   ,-[3:1]
/// 2 | building A 0 0 5 5
///   : --------+---------
///   :         `-- `A` is defined here
/// 3 | building B 5 0 5 5
///   : ---------+--------
///   :          `-- overlaps `A`
///   `----
///   help: buildings may share an edge but must not overlap
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use kover_parser::error::{Diagnostic, ErrorCode};
    /// # use kover_parser::Span;
    ///
    /// let diag = Diagnostic::error("invalid identifier \"1abc\" (line #2)")
    ///     .with_code(ErrorCode::E200)
    ///     .with_label(Span::new(21..25), "expected an identifier");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_with_labels() {
        let diag = Diagnostic::error("building identifier A is non unique")
            .with_label(Span::new(40..58), "duplicate definition")
            .with_secondary_label(Span::new(12..30), "first defined here");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("unrecognized line (line #3)").with_code(ErrorCode::E100);

        assert_eq!(diag.to_string(), "error[E100]: unrecognized line (line #3)");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("last line must be exactly 'end scene'");

        assert_eq!(
            diag.to_string(),
            "error: last line must be exactly 'end scene'"
        );
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::error("invalid integer \"01\" (line #2)")
            .with_help("write integers without leading zeros");

        assert_eq!(diag.help(), Some("write integers without leading zeros"));
    }
}
