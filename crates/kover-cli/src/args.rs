//! Command-line argument handling for the Kover CLI.
//!
//! The command line takes exactly one word, the subcommand. [`clap`] collects
//! the raw words with its own help and version flags disabled, so that
//! `--help` is reported like any other unknown subcommand. Every word counts,
//! a bare `--` included, and words that are not valid UTF-8 are converted
//! lossily instead of being rejected.

use std::{ffi::OsString, fmt, iter, str::FromStr};

use clap::Parser;
use thiserror::Error;

use kover::ReportKind;

/// Command-line arguments for the Kover scene tool
#[derive(Parser, Debug)]
#[command(name = "kover", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// The subcommand, followed by nothing
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

impl Args {
    /// Build arguments from already split words, without the program name.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Build arguments from the raw process arguments, program name first.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::CommandLine`] if clap rejects the words.
    pub fn from_argv<I, T>(argv: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("kover"));
        let words = argv.map(|word| OsString::from(word.to_string_lossy().into_owned()));

        // A leading `--` ends option parsing, so a user `--` is a plain word
        let escaped = iter::once(program)
            .chain(iter::once(OsString::from("--")))
            .chain(words);

        Args::try_parse_from(escaped).map_err(|err| ArgsError::CommandLine(err.kind().to_string()))
    }

    /// The requested subcommand.
    ///
    /// # Errors
    ///
    /// - [`ArgsError::SubcommandMandatory`] unless exactly one word was given
    /// - [`ArgsError::UnrecognizedSubcommand`] for an unknown word
    pub fn subcommand(&self) -> Result<Subcommand, ArgsError> {
        match self.words.as_slice() {
            [word] => word.parse(),
            _ => Err(ArgsError::SubcommandMandatory),
        }
    }
}

/// Errors in the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("subcommand is mandatory")]
    SubcommandMandatory,

    #[error("subcommand '{0}' is not recognized")]
    UnrecognizedSubcommand(String),

    #[error("invalid command line: {0}")]
    CommandLine(String),
}

/// What the tool was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    BoundingBox,
    Describe,
    Help,
    Summarize,
}

impl Subcommand {
    /// The report printed by this subcommand, `None` for `help`.
    pub fn report_kind(self) -> Option<ReportKind> {
        match self {
            Subcommand::BoundingBox => Some(ReportKind::BoundingBox),
            Subcommand::Describe => Some(ReportKind::Description),
            Subcommand::Summarize => Some(ReportKind::Summary),
            Subcommand::Help => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Subcommand::BoundingBox => "bounding-box",
            Subcommand::Describe => "describe",
            Subcommand::Help => "help",
            Subcommand::Summarize => "summarize",
        }
    }
}

impl FromStr for Subcommand {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bounding-box" => Ok(Subcommand::BoundingBox),
            "describe" => Ok(Subcommand::Describe),
            "help" => Ok(Subcommand::Help),
            "summarize" => Ok(Subcommand::Summarize),
            other => Err(ArgsError::UnrecognizedSubcommand(other.to_string())),
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
