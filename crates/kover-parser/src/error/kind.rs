//! The kinds of failure a scene read can end with.

use thiserror::Error;

use kover_core::scene::Conflict;

use crate::{error::ErrorCode, line::Keyword};

/// Why a scene was rejected.
///
/// Messages are the exact wording reported to users. Line numbers are
/// 1-based, the `begin scene` line being line 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneErrorKind {
    #[error("first line must be exactly 'begin scene'")]
    MissingBeginMarker,

    #[error("last line must be exactly 'end scene'")]
    MissingEndMarker,

    #[error("unrecognized line (line #{line})")]
    UnrecognizedLine { line: usize },

    #[error("{keyword} line has wrong number of arguments (line #{line})")]
    WrongArgumentCount { line: usize, keyword: Keyword },

    #[error("token \"{token}\" exceeds the maximum length of {max} characters (line #{line})")]
    TokenTooLong {
        line: usize,
        token: String,
        max: usize,
    },

    #[error("invalid identifier \"{token}\" (line #{line})")]
    InvalidIdentifier { line: usize, token: String },

    #[error("invalid integer \"{token}\" (line #{line})")]
    InvalidInteger { line: usize, token: String },

    #[error("invalid positive integer \"{token}\" (line #{line})")]
    InvalidPositiveInteger { line: usize, token: String },

    #[error("integer \"{token}\" is out of range (line #{line})")]
    IntegerOutOfRange { line: usize, token: String },

    #[error("too many buildings, at most {max} are allowed (line #{line})")]
    TooManyBuildings { line: usize, max: usize },

    #[error("too many antennas, at most {max} are allowed (line #{line})")]
    TooManyAntennas { line: usize, max: usize },

    /// Duplicate identifiers, overlapping buildings, coincident antennas.
    #[error(transparent)]
    Conflict(#[from] Conflict),
}

impl SceneErrorKind {
    /// The diagnostic code for this kind of error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SceneErrorKind::MissingBeginMarker => ErrorCode::E001,
            SceneErrorKind::MissingEndMarker => ErrorCode::E002,
            SceneErrorKind::UnrecognizedLine { .. } => ErrorCode::E100,
            SceneErrorKind::WrongArgumentCount { .. } => ErrorCode::E101,
            SceneErrorKind::TokenTooLong { .. } => ErrorCode::E102,
            SceneErrorKind::InvalidIdentifier { .. } => ErrorCode::E200,
            SceneErrorKind::InvalidInteger { .. } => ErrorCode::E201,
            SceneErrorKind::InvalidPositiveInteger { .. } => ErrorCode::E202,
            SceneErrorKind::IntegerOutOfRange { .. } => ErrorCode::E203,
            SceneErrorKind::Conflict(Conflict::DuplicateBuildingId(_)) => ErrorCode::E300,
            SceneErrorKind::Conflict(Conflict::DuplicateAntennaId(_)) => ErrorCode::E301,
            SceneErrorKind::Conflict(Conflict::OverlappingBuildings { .. }) => ErrorCode::E302,
            SceneErrorKind::Conflict(Conflict::CoincidentAntennas { .. }) => ErrorCode::E303,
            SceneErrorKind::TooManyBuildings { .. } => ErrorCode::E304,
            SceneErrorKind::TooManyAntennas { .. } => ErrorCode::E305,
        }
    }

    /// A hint on how to fix the input, if there is a useful one.
    pub fn help(&self) -> Option<String> {
        let help = match self {
            SceneErrorKind::MissingBeginMarker => {
                "the first line must contain `begin scene` and nothing else".to_string()
            }
            SceneErrorKind::MissingEndMarker => {
                "terminate the scene with a line containing `end scene` and nothing else"
                    .to_string()
            }
            SceneErrorKind::UnrecognizedLine { .. } => {
                "lines must start with `building` or `antenna`".to_string()
            }
            SceneErrorKind::WrongArgumentCount { keyword, .. } => {
                format!("expected `{}`", keyword.usage())
            }
            SceneErrorKind::InvalidIdentifier { .. } => {
                "identifiers start with a letter or `_`, followed by letters, digits or `_`"
                    .to_string()
            }
            SceneErrorKind::InvalidInteger { .. } => {
                "integers have an optional `-` sign and no leading zeros".to_string()
            }
            SceneErrorKind::InvalidPositiveInteger { .. } => {
                "dimensions and ranges are integers greater than zero, without leading zeros"
                    .to_string()
            }
            SceneErrorKind::IntegerOutOfRange { .. } => format!(
                "coordinates must lie between {} and {}",
                i32::MIN,
                i32::MAX
            ),
            SceneErrorKind::Conflict(Conflict::OverlappingBuildings { .. }) => {
                "buildings may share an edge but must not overlap".to_string()
            }
            SceneErrorKind::TokenTooLong { .. }
            | SceneErrorKind::TooManyBuildings { .. }
            | SceneErrorKind::TooManyAntennas { .. } => {
                "the limit can be raised in the `[limits]` section of the configuration".to_string()
            }
            SceneErrorKind::Conflict(_) => return None,
        };
        Some(help)
    }
}
