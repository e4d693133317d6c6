//! xmldupe - Duplicate ObjectId finder for XML exports
//!
//! Scans an XML document for `ViewObject` elements, tallies the value of their
//! `ObjectId` property and reports ids that occur more often than their class
//! allows. Review progress over the reported ids can be saved to and resumed
//! from a small XML snapshot.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod review;
pub mod snapshot;

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{Cli, Commands, OutputFormat, ResumeArgs, ScanArgs};
use crate::config::Config;
use crate::duplicates::Analyzer;
use crate::error::ExitCode;
use crate::output::{CsvOutput, JsonOutput, JsonReviewOutput, TextOutput, TextReviewOutput};
use crate::review::ReviewState;
use crate::snapshot::ProgressSnapshot;

/// Run the application for parsed CLI arguments.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, the config file is
/// invalid, or output cannot be written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    if cli.no_color || !io::stdout().is_terminal() {
        yansi::disable();
    }

    let config = match &cli.config {
        Some(path) => Config::try_load_from_path(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::load(),
    };
    log::debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Scan(args) => run_scan(args, &config),
        Commands::Resume(args) => run_resume(args, &config),
    }
}

fn run_scan(args: ScanArgs, config: &Config) -> Result<ExitCode> {
    warn_if_not_xml(&args.path);

    let analyzer = Analyzer::new(config.rules());
    let (results, report) = analyzer
        .analyze_file(&args.path)
        .with_context(|| format!("Failed to analyze XML file: {}", args.path.display()))?;

    let exit_code = if results.is_empty() {
        ExitCode::NoDuplicates
    } else {
        ExitCode::Success
    };

    if let Some(save_path) = &args.save_progress {
        ProgressSnapshot::all_pending(results.clone())
            .save(save_path)
            .with_context(|| format!("Failed to save progress to {}", save_path.display()))?;
    }

    let name = args
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.path.display().to_string());

    let stdout = io::stdout().lock();
    match args.output.unwrap_or(config.output) {
        OutputFormat::Text => TextOutput::new(&results, &report, &name).write_to(stdout)?,
        OutputFormat::Json => JsonOutput::new(&results, &report, exit_code).write_to(stdout)?,
        OutputFormat::Csv => CsvOutput::new(&results).write_to(stdout)?,
    }

    Ok(exit_code)
}

fn run_resume(args: ResumeArgs, config: &Config) -> Result<ExitCode> {
    let snapshot = ProgressSnapshot::load(&args.snapshot).with_context(|| {
        format!(
            "Failed to load progress snapshot: {}",
            args.snapshot.display()
        )
    })?;
    let mut state = ReviewState::from_snapshot(snapshot);

    for id in &args.complete {
        state.set_checked(id, true);
    }
    for id in &args.reopen {
        state.set_checked(id, false);
    }

    if let Some(target) = &args.save {
        let path = target.as_deref().unwrap_or(args.snapshot.as_path());
        state
            .to_snapshot()
            .save(path)
            .with_context(|| format!("Failed to save progress to {}", path.display()))?;
    }

    let stdout = io::stdout().lock();
    match args.output.unwrap_or(config.output) {
        OutputFormat::Text => TextReviewOutput::new(&state).write_to(stdout)?,
        OutputFormat::Json => JsonReviewOutput::new(&state).write_to(stdout)?,
        OutputFormat::Csv => CsvOutput::for_review(&state).write_to(stdout)?,
    }

    if state.results().is_empty() {
        Ok(ExitCode::NoDuplicates)
    } else {
        Ok(ExitCode::Success)
    }
}

fn warn_if_not_xml(path: &Path) {
    let is_xml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
    if !is_xml {
        log::warn!(
            "{} does not have an .xml extension; analyzing anyway",
            path.display()
        );
    }
}
