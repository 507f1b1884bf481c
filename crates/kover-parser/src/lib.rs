//! # Kover Parser
//!
//! Reader and validator for the Kover scene format. A scene is a line-based
//! text document declaring rectangular buildings and circular antennas on an
//! integer grid:
//!
//! ```text
//! begin scene
//! building hall 0 0 10 4
//! antenna north 0 20 5
//! end scene
//! ```
//!
//! ## Usage
//!
//! ```
//! # use kover_parser::{parse, ParseConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "begin scene\nbuilding hall 0 0 10 4\nantenna north 0 20 5\nend scene\n";
//!
//!     let scene = parse(source, ParseConfig::default())?;
//!     assert_eq!(scene.building_count(), 1);
//!     assert_eq!(scene.antenna_count(), 1);
//!     Ok(())
//! }
//! ```

mod builder;
mod config;
pub mod error;
pub mod lexical;
mod line;
mod reader;
mod span;

pub use config::{
    DEFAULT_MAX_ANTENNAS, DEFAULT_MAX_BUILDINGS, DEFAULT_MAX_TOKEN_LENGTH, ParseConfig,
};
pub use line::Keyword;
pub use reader::{BEGIN_MARKER, END_MARKER};
pub use span::{Span, Spanned};

use log::{debug, info};

use kover_core::scene::Scene;

use error::ParseError;

/// Parse scene source text into a validated [`Scene`].
///
/// The read is fail-fast: lines are processed in order and the first
/// problem found is returned. On success every scene invariant holds:
/// identifiers are unique per kind, no two buildings overlap, and no two
/// antennas share a position.
///
/// # Arguments
///
/// * `source` - The complete scene text
/// * `config` - Limits on token length and entity counts
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem, with its
/// [`SceneErrorKind`](error::SceneErrorKind) and a diagnostic pointing
/// into `source`.
pub fn parse(source: &str, config: ParseConfig) -> Result<Scene, ParseError> {
    info!(bytes = source.len(); "Parsing scene");
    debug!(config:?; "Parse configuration");

    reader::read_scene(source, config)
}
