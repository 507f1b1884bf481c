//! Error and diagnostic system for the Kover scene parser.
//!
//! Scene reading is fail-fast: the first problem found, in line order, stops
//! the read and is returned as a [`ParseError`]. A parse error pairs the
//! typed [`SceneErrorKind`] with a [`Diagnostic`] carrying:
//! - an error code for documentation and searchability
//! - labeled spans pointing into the scene source
//! - optional help text
//!
//! # Example
//!
//! ```
//! # use kover_parser::error::{Diagnostic, ErrorCode};
//! # use kover_parser::Span;
//!
//! let diag = Diagnostic::error("buildings A and B are overlapping")
//!     .with_code(ErrorCode::E302)
//!     .with_label(Span::new(40..58), "overlaps `A`")
//!     .with_secondary_label(Span::new(12..30), "`A` is defined here")
//!     .with_help("buildings may share an edge but must not overlap");
//! ```

mod diagnostic;
mod error_code;
mod kind;
mod label;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use kind::SceneErrorKind;
pub use label::Label;
pub use parse_error::ParseError;
