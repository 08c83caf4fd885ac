//! Command line argument parsing for the langseg CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::profile::ProfileName;

/// langseg - Japanese, Korean and Thai segmentation for full-text indexing
#[derive(Parser, Debug, Clone)]
#[command(name = "langseg")]
#[command(about = "Japanese, Korean and Thai text segmentation for full-text indexing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LangsegArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON). Defaults to $LANGSEG_CONFIG.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Profile for every language, overriding the configuration
    #[arg(short, long, value_parser = parse_profile, global = true)]
    pub profile: Option<ProfileName>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LangsegArgs {
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
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Segment text given as an argument, or each line of stdin
    Segment(SegmentArgs),

    /// Segment a file line by line into a timestamped result file
    Batch(BatchArgs),

    /// Show the stages of each profile
    Profiles(ProfilesArgs),
}

/// Arguments for segmenting text
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    /// Language (ja, ko, th)
    #[arg(value_name = "LANG", value_parser = parse_language)]
    pub language: Language,

    /// Text to segment. Reads stdin line by line when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for batch segmentation
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Language (ja, ko, th)
    #[arg(value_name = "LANG", value_parser = parse_language)]
    pub language: Language,

    /// Input text file, one unit per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the result file (default: <code>_results)
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Segment lines on one thread
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for listing profiles
#[derive(Parser, Debug, Clone)]
pub struct ProfilesArgs {
    /// Only show this language
    #[arg(value_name = "LANG", value_parser = parse_language)]
    pub language: Option<Language>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e: crate::error::LangsegError| e.to_string())
}

fn parse_profile(s: &str) -> Result<ProfileName, String> {
    s.parse().map_err(|e: crate::error::LangsegError| e.to_string())
}
