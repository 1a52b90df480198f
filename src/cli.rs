//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `uupid`.
#[derive(Debug, Parser)]
#[command(name = "uupid", version, about = "Generate and validate pronounceable identifiers")]
pub struct Cli {
    /// YAML config file. Falls back to `UUPID_CONFIG`, then the reference setup.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print new identifiers, one per line.
    Generate {
        /// How many identifiers to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Check candidates; exits non-zero if any is invalid.
    Validate {
        /// Parse each candidate as a JSON value first.
        #[arg(long)]
        json: bool,
        /// Candidates to check.
        #[arg(required = true, allow_hyphen_values = true, value_name = "CANDIDATE")]
        candidates: Vec<String>,
    },
    /// Describe the active configuration and its entropy budget.
    Info,
}
