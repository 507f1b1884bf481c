//! Kover - validation and reporting for building and antenna scenes.
//!
//! A scene is a line-based description of rectangular buildings and
//! circular antennas on an integer grid. This crate reads a scene, checks
//! it against the grammar and the geometric consistency rules, and renders
//! the textual reports.

pub mod config;
pub mod report;

mod error;

pub use kover_core::{geometry, identifier, scene};
pub use kover_parser::error as diagnostics;

pub use error::KoverError;
pub use report::ReportKind;

use std::io::Write;

use log::{debug, info, trace};

use kover_parser::ParseConfig;

use config::AppConfig;
use scene::Scene;

/// Entry point for parsing scenes and rendering reports.
///
/// # Examples
///
/// ```
/// use kover::{ReportKind, SceneAnalyzer, config::AppConfig};
///
/// let source = "begin scene\nbuilding B 0 0 5 5\nend scene\n";
///
/// let analyzer = SceneAnalyzer::new(AppConfig::default());
/// let scene = analyzer.parse(source).expect("Failed to parse");
///
/// let mut out = Vec::new();
/// analyzer
///     .report(ReportKind::BoundingBox, &scene, &mut out)
///     .expect("Failed to write report");
/// assert_eq!(out, b"bounding box [-5, 5] x [-5, 5]\n");
/// ```
#[derive(Debug, Default)]
pub struct SceneAnalyzer {
    config: AppConfig,
}

impl SceneAnalyzer {
    /// Create a new scene analyzer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration, including input limits
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this analyzer was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse scene source text into a validated [`Scene`].
    ///
    /// # Errors
    ///
    /// Returns [`KoverError::Parse`] for the first grammar, lexical or
    /// consistency violation found in `source`.
    pub fn parse(&self, source: &str) -> Result<Scene, KoverError> {
        info!("Parsing scene");

        let parse_config = ParseConfig::from(self.config.limits());
        let scene = kover_parser::parse(source, parse_config)
            .map_err(|err| KoverError::new_parse_error(err, source))?;

        debug!(
            buildings = scene.building_count(),
            antennas = scene.antenna_count();
            "Scene parsed successfully"
        );
        trace!(scene:?; "Parsed scene");

        Ok(scene)
    }

    /// Write the `kind` report for `scene` to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`KoverError::Io`] if writing to `out` fails.
    pub fn report(
        &self,
        kind: ReportKind,
        scene: &Scene,
        out: &mut impl Write,
    ) -> Result<(), KoverError> {
        info!(kind:?; "Writing report");
        report::write_report(kind, scene, out)?;
        Ok(())
    }

    /// Parse `source` and write the `kind` report to `out`.
    ///
    /// Nothing is written unless the whole scene is valid.
    ///
    /// # Errors
    ///
    /// Returns the first parse error, or an I/O error from `out`.
    pub fn analyze(
        &self,
        kind: ReportKind,
        source: &str,
        out: &mut impl Write,
    ) -> Result<(), KoverError> {
        let scene = self.parse(source)?;
        self.report(kind, &scene, out)
    }
}
