//! Configuration types for Kover scene analysis.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Every field is optional and falls back to its
//! default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining limits and diagnostics settings.
//! - [`LimitsConfig`] - Input size limits applied while reading a scene.
//! - [`DiagnosticsConfig`] - How errors are shown to the user.
//!
//! # Example
//!
//! ```
//! # use kover::config::{AppConfig, DiagnosticStyle};
//! let config = AppConfig::default();
//! assert_eq!(config.limits().max_buildings(), 100);
//! assert_eq!(config.diagnostics().style(), DiagnosticStyle::Plain);
//! ```

use serde::Deserialize;

use kover_parser::{
    DEFAULT_MAX_ANTENNAS, DEFAULT_MAX_BUILDINGS, DEFAULT_MAX_TOKEN_LENGTH, ParseConfig,
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Limits configuration section.
    #[serde(default)]
    limits: LimitsConfig,

    /// Diagnostics configuration section.
    #[serde(default)]
    diagnostics: DiagnosticsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `limits` - Input size limits.
    /// * `diagnostics` - Error presentation settings.
    pub fn new(limits: LimitsConfig, diagnostics: DiagnosticsConfig) -> Self {
        Self {
            limits,
            diagnostics,
        }
    }

    /// Returns the limits configuration.
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Returns the diagnostics configuration.
    pub fn diagnostics(&self) -> &DiagnosticsConfig {
        &self.diagnostics
    }
}

/// Input size limits.
///
/// A scene exceeding a limit is rejected with an error naming the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Longest accepted argument on a scene line, in characters.
    max_token_length: usize,

    /// Largest accepted number of buildings.
    max_buildings: usize,

    /// Largest accepted number of antennas.
    max_antennas: usize,
}

impl LimitsConfig {
    /// Creates a new [`LimitsConfig`].
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

impl Default for LimitsConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_TOKEN_LENGTH,
            DEFAULT_MAX_BUILDINGS,
            DEFAULT_MAX_ANTENNAS,
        )
    }
}

impl From<&LimitsConfig> for ParseConfig {
    fn from(limits: &LimitsConfig) -> Self {
        ParseConfig::new(
            limits.max_token_length,
            limits.max_buildings,
            limits.max_antennas,
        )
    }
}

/// How errors are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStyle {
    /// A single `error: <message>` line.
    #[default]
    Plain,

    /// A rich report with error code, source snippet and help.
    Fancy,
}

/// Diagnostics configuration section.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    style: DiagnosticStyle,
}

impl DiagnosticsConfig {
    /// Creates a new [`DiagnosticsConfig`] using `style`.
    pub fn new(style: DiagnosticStyle) -> Self {
        Self { style }
    }

    /// Returns the configured [`DiagnosticStyle`].
    pub fn style(&self) -> DiagnosticStyle {
        self.style
    }
}
