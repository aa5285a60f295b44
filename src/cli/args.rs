//! Command line argument parsing for the porter-stem CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// porter-stem - reduce English words to their Porter stems
#[derive(Parser, Debug, Clone)]
#[command(name = "porter-stem")]
#[command(about = "Reduce English words to their Porter stems")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StemArgs {
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

    /// Stemmer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "PORTER_STEM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StemArgs {
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

    /// The `tracing` filter directive matching the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem individual words (from arguments, or stdin when none are given)
    Stem(StemWordsArgs),

    /// Split running text into words and stem each one
    Text(TextArgs),

    /// Show what every phase does to a word
    Trace(TraceArgs),

    /// Check the stemmer against a reference vocabulary
    Verify(VerifyArgs),
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemWordsArgs {
    /// Words to stem
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

/// Arguments for stemming running text
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Text to analyze (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for tracing a word
#[derive(Parser, Debug, Clone)]
pub struct TraceArgs {
    /// Word to trace
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Only show phases that changed the word
    #[arg(long)]
    pub changes_only: bool,
}

/// Arguments for verification
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// Vocabulary file (voc.txt, two-column text, or JSON). Uses the built-in
    /// examples when omitted.
    #[arg(long, value_name = "VOCABULARY_FILE")]
    pub vocabulary: Option<PathBuf>,

    /// Expected output file aligned with the vocabulary (output.txt)
    #[arg(long, value_name = "EXPECTED_FILE", requires = "vocabulary")]
    pub expected: Option<PathBuf>,

    /// Maximum number of mismatches to print
    #[arg(long, default_value = "20")]
    pub max_mismatches: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
