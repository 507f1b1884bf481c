//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A labeled span in the scene source.
///
/// # Primary vs Secondary Labels
///
/// - **Primary labels** mark the line or token that caused the error.
/// - **Secondary labels** point at related entities, such as the building
///   a new building overlaps with.
///
/// For the scene
///
/// ```text
/// begin scene
/// building A 0 0 5 5
/// building B 5 0 5 5
/// end scene
/// ```
///
/// the overlap error carries a secondary label on line 2 and a primary label
/// on line 3:
///
/// ```
/// # use kover_parser::error::Label;
/// # use kover_parser::Span;
///
/// let defined = Label::secondary(Span::new(12..30), "`A` is defined here");
/// let overlap = Label::primary(Span::new(31..49), "overlaps `A`");
///
/// assert!(defined.is_secondary());
/// assert!(overlap.is_primary());
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    ///
    /// # Example
    ///
    /// ```
    /// # use kover_parser::error::Label;
    /// # use kover_parser::Span;
    ///
    /// // `1abc` in `building 1abc 0 0 1 1`, starting at byte 12
    /// let label = Label::primary(Span::new(21..25), "expected an identifier");
    /// assert_eq!(label.message(), "expected an identifier");
    /// ```
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    ///
    /// # Example
    ///
    /// ```
    /// # use kover_parser::error::Label;
    /// # use kover_parser::Span;
    ///
    /// // The first `antenna a ...` line of a scene with a duplicate `a`
    /// let label = Label::secondary(Span::new(12..27), "first defined here");
    /// assert_eq!(label.span().len(), 15);
    /// ```
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
