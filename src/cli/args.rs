//! Command line argument parsing for plagcheck using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::CheckerConfig;
use crate::error::{PlagcheckError, Result};

/// Plagiarism checker
///
/// Reports the percentage of word tuples from INPUT_1 that also occur in
/// INPUT_2, treating words from the same synonym group as interchangeable.
#[derive(Parser, Debug, Clone)]
#[command(name = "plagcheck")]
#[command(about = "Plagiarism checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct PlagcheckArgs {
    /// The file containing synonym associations, one group per line
    #[arg(value_name = "SYNONYM_FILE")]
    pub synonym_file: PathBuf,

    /// The first input text
    #[arg(value_name = "INPUT_1")]
    pub input_1: PathBuf,

    /// The second input text
    #[arg(value_name = "INPUT_2")]
    pub input_2: PathBuf,

    /// Set the sizes of tuples to be compared (must be positive) [default: 3]
    #[arg(
        short = 'N',
        long = "tuple-size",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub tuple_size: Option<i64>,

    /// JSON configuration file; --tuple-size takes precedence over it
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl PlagcheckArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the checker configuration from the config file and flags.
    ///
    /// A bad `-N` is reported before the config file is read.
    pub fn checker_config(&self) -> Result<CheckerConfig> {
        if let Some(size) = self.tuple_size
            && size < 1
        {
            return Err(PlagcheckError::invalid_argument(format!(
                "tuple size must be positive, got {size}"
            )));
        }

        let config = match &self.config {
            Some(path) => CheckerConfig::from_json_file(path)?,
            None => CheckerConfig::default(),
        };

        Ok(match self.tuple_size {
            Some(size) => config.with_tuple_size(size as usize),
            None => config,
        })
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The percentage alone, e.g. `66%`
    Human,
    /// JSON object with the full report
    Json,
    /// `key,value` lines
    Csv,
}
