//! CLI logic for the Kover scene tool.
//!
//! The tool reads a scene on standard input and prints one report selected
//! by the subcommand. [`execute`] runs a whole invocation against arbitrary
//! readers and writers and returns the process exit code.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, ArgsError, Subcommand};
pub use config::{CONFIG_ENV, ConfigError, load_config};

use std::{
    borrow::Cow,
    io::{Read, Write},
    path::Path,
};

use log::{debug, info};
use thiserror::Error;

use kover::{
    KoverError, ReportKind, SceneAnalyzer,
    config::{AppConfig, DiagnosticStyle},
};

/// Usage and scene grammar, printed by `kover help`.
pub const HELP: &str = "\
Usage: kover SUBCOMMAND
Handles positioning of communication antennas by reading a scene on stdin.

SUBCOMMAND is mandatory and must take one of the following values:
  bounding-box: returns a bounding box of the loaded scene
  describe: describes the loaded scene in details
  help: shows this message
  summarize: summarizes the loaded scene

A scene is a text stream that must satisfy the following syntax:

  1. The first line must be exactly 'begin scene'
  2. The last line must be exactly 'end scene'
  3. Any line between the first and last line must either be a building line
     or an antenna line
  4. A building line has the form 'building ID X Y W H' (with any number of
     blank characters before or after), where
       ID is the building identifier
       X is the x-coordinate of the building
       Y is the y-coordinate of the building
       W is the half-width of the building
       H is the half-height of the building
  5. An antenna line has the form 'antenna ID X Y R' (with any number of
     blank characters before or after), where
       ID is the antenna identifier
       X is the x-coordinate of the antenna
       Y is the y-coordinate of the antenna
       R is the radius scope of the antenna

Environment:
  KOVER_CONFIG: path to a TOML configuration file
  KOVER_LOG: log filter written to stderr (default: off)
";

/// Any failure of a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Kover(#[from] KoverError),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Kover(KoverError::Io(err))
    }
}

/// Read a scene from `input` and write the `kind` report to `out`.
///
/// Invalid UTF-8 sequences in `input` are replaced with `U+FFFD`, so they
/// fail the lexical checks of the line they appear on and are ignored after
/// the `end scene` line.
///
/// # Errors
///
/// Returns `KoverError` for:
/// - Read failures on `input`
/// - Scene grammar and consistency errors
/// - Write failures on `out`
pub fn run(
    kind: ReportKind,
    config: AppConfig,
    mut input: impl Read,
    out: &mut impl Write,
) -> Result<(), KoverError> {
    info!(kind:?; "Processing scene");

    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let source = String::from_utf8_lossy(&bytes);
    debug!(
        bytes = bytes.len(),
        lossy = matches!(source, Cow::Owned(_));
        "Scene read from input"
    );

    let analyzer = SceneAnalyzer::new(config);
    analyzer.analyze(kind, &source, out)?;
    out.flush()?;

    info!("Report written successfully");
    Ok(())
}

/// Run a complete invocation and return the process exit code.
///
/// `help` is answered without loading the configuration or reading
/// `input`. Failures are rendered to `err_out`, in the configured
/// diagnostic style once the configuration is known.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `config_path` - Explicit configuration file, if any
/// * `input` - Scene source
/// * `out` - Report destination
/// * `err_out` - Diagnostic destination
pub fn execute(
    args: &Args,
    config_path: Option<&Path>,
    input: impl Read,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> i32 {
    let mut style = DiagnosticStyle::Plain;

    match invoke(args, config_path, input, out, &mut style) {
        Ok(()) => 0,
        Err(err) => {
            debug!(err:?; "Invocation failed");
            // Nothing sensible is left to do if stderr is gone.
            let _ = err_out.write_all(error_adapter::render(&err, style).as_bytes());
            1
        }
    }
}

/// Dispatch the subcommand, recording the diagnostic style in `style` as
/// soon as the configuration is loaded.
fn invoke(
    args: &Args,
    config_path: Option<&Path>,
    input: impl Read,
    out: &mut impl Write,
    style: &mut DiagnosticStyle,
) -> Result<(), CliError> {
    let subcommand = args.subcommand()?;
    debug!(subcommand:%; "Subcommand selected");

    let Some(kind) = subcommand.report_kind() else {
        out.write_all(HELP.as_bytes())?;
        out.flush()?;
        return Ok(());
    };

    let config = load_config(config_path)?;
    *style = config.diagnostics().style();

    run(kind, config, input, out)?;
    Ok(())
}
