//! Command-line interface definitions for xmldupe.
//!
//! This module defines all CLI arguments, subcommands, and options using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Scan an export and list duplicate ObjectIds
//! xmldupe scan plant.xml
//!
//! # Scan with JSON output and start a review snapshot
//! xmldupe scan plant.xml --output json --save-progress review.xml
//!
//! # Mark two ids as handled and write the snapshot back
//! xmldupe resume review.xml --complete ABC --complete CG9 --save
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Find duplicate ObjectId values across ViewObject elements in XML exports.
#[derive(Debug, Parser)]
#[command(name = "xmldupe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Configuration file (TOML); defaults to the platform config directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for xmldupe.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan an XML file for duplicate ObjectIds
    Scan(ScanArgs),
    /// Resume a review from a saved progress snapshot
    Resume(ResumeArgs),
}

/// Arguments for the scan subcommand.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// XML file to analyze
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write a progress snapshot with every duplicate pending
    #[arg(long, value_name = "PATH")]
    pub save_progress: Option<PathBuf>,
}

/// Arguments for the resume subcommand.
#[derive(Debug, Args)]
pub struct ResumeArgs {
    /// Progress snapshot to load
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Mark an object id as completed (can be specified multiple times)
    #[arg(short, long, value_name = "ID")]
    pub complete: Vec<String>,

    /// Move an object id back to pending (can be specified multiple times)
    #[arg(short, long, value_name = "ID")]
    pub reopen: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Save the updated snapshot, to SNAPSHOT or to the given path
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,
}

/// Output format for results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
