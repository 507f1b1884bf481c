//! Limits applied while reading a scene.

/// Default maximum length, in characters, of a line argument.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 10;

/// Default maximum number of buildings in a scene.
pub const DEFAULT_MAX_BUILDINGS: usize = 100;

/// Default maximum number of antennas in a scene.
pub const DEFAULT_MAX_ANTENNAS: usize = 100;

/// Configuration for [`parse`](crate::parse).
///
/// Inputs exceeding a limit are rejected with a dedicated error, never
/// truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    max_token_length: usize,
    max_buildings: usize,
    max_antennas: usize,
}

impl ParseConfig {
    /// Create a new parse configuration.
    ///
    /// # Arguments
    ///
    /// * `max_token_length` - Longest accepted argument, in characters.
    /// * `max_buildings` - Largest accepted number of buildings.
    /// * `max_antennas` - Largest accepted number of antennas.
    pub fn new(max_token_length: usize, max_buildings: usize, max_antennas: usize) -> Self {
        Self {
            max_token_length,
            max_buildings,
            max_antennas,
        }
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    pub fn max_buildings(&self) -> usize {
        self.max_buildings
    }

    pub fn max_antennas(&self) -> usize {
        self.max_antennas
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_TOKEN_LENGTH,
            DEFAULT_MAX_BUILDINGS,
            DEFAULT_MAX_ANTENNAS,
        )
    }
}
