//! Error codes for the Kover diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Scene framing errors
//! - `E1xx` - Line syntax errors
//! - `E2xx` - Lexical errors
//! - `E3xx` - Scene consistency errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Framing Errors (E0xx)
    // =========================================================================
    /// Missing begin marker.
    ///
    /// The first line of the input is not exactly `begin scene`.
    E001,

    /// Missing end marker.
    ///
    /// The input ended before a line exactly equal to `end scene`.
    E002,

    // =========================================================================
    // Line Syntax Errors (E1xx)
    // =========================================================================
    /// Unrecognized line.
    ///
    /// The line is empty or does not start with `building` or `antenna`.
    E100,

    /// Wrong number of arguments.
    ///
    /// A `building` line needs exactly 5 arguments, an `antenna` line exactly 4.
    E101,

    /// Token too long.
    ///
    /// An argument exceeds the configured maximum token length.
    E102,

    // =========================================================================
    // Lexical Errors (E2xx)
    // =========================================================================
    /// Invalid identifier.
    E200,

    /// Invalid integer.
    E201,

    /// Invalid positive integer.
    E202,

    /// Integer out of range.
    ///
    /// The integer is well formed but does not fit a 32-bit coordinate.
    E203,

    // =========================================================================
    // Scene Consistency Errors (E3xx)
    // =========================================================================
    /// Duplicate building identifier.
    E300,

    /// Duplicate antenna identifier.
    E301,

    /// Overlapping buildings.
    E302,

    /// Antennas at the same position.
    E303,

    /// Too many buildings.
    E304,

    /// Too many antennas.
    E305,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Framing errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            // Line syntax errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            // Lexical errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            // Scene consistency errors
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E304 => "E304",
            ErrorCode::E305 => "E305",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Framing errors
            ErrorCode::E001 => "missing begin marker",
            ErrorCode::E002 => "missing end marker",
            // Line syntax errors
            ErrorCode::E100 => "unrecognized line",
            ErrorCode::E101 => "wrong number of arguments",
            ErrorCode::E102 => "token too long",
            // Lexical errors
            ErrorCode::E200 => "invalid identifier",
            ErrorCode::E201 => "invalid integer",
            ErrorCode::E202 => "invalid positive integer",
            ErrorCode::E203 => "integer out of range",
            // Scene consistency errors
            ErrorCode::E300 => "duplicate building identifier",
            ErrorCode::E301 => "duplicate antenna identifier",
            ErrorCode::E302 => "overlapping buildings",
            ErrorCode::E303 => "antennas at the same position",
            ErrorCode::E304 => "too many buildings",
            ErrorCode::E305 => "too many antennas",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
