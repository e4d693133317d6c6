//! Output formatters for scan results and review progress.
//!
//! This module provides different output formats:
//! - Text for terminals (colored via `yansi`)
//! - JSON for automation and scripting
//! - CSV for spreadsheet import
//!
//! # Example
//!
//! ```no_run
//! use xmldupe::duplicates::Analyzer;
//! use xmldupe::error::ExitCode;
//! use xmldupe::output::json::JsonOutput;
//! use std::path::Path;
//!
//! let analyzer = Analyzer::with_defaults();
//! let (results, report) = analyzer.analyze_file(Path::new("plant.xml")).unwrap();
//!
//! // Output as JSON to stdout
//! let output = JsonOutput::new(&results, &report, ExitCode::Success);
//! println!("{}", output.to_json_pretty().unwrap());
//! ```

pub mod csv;
pub mod json;
pub mod text;

// Re-export main types
pub use csv::CsvOutput;
pub use json::{JsonOutput, JsonReviewOutput};
pub use text::{TextOutput, TextReviewOutput};
