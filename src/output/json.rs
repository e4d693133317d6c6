//! JSON output formatter for scan results and review progress.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     { "objectId": "ABC", "count": 3, "className": "Widget" }
//!   ],
//!   "summary": {
//!     "view_objects": 120,
//!     "counted": 118,
//!     "skipped_blank": 1,
//!     "missing_id": 1,
//!     "distinct_ids": 110,
//!     "duplicates": 1,
//!     "exit_code": 0,
//!     "exit_code_name": "XD000"
//!   }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use xmldupe::duplicates::{Analyzer, ScanReport};
//! use xmldupe::error::ExitCode;
//! use xmldupe::output::json::JsonOutput;
//!
//! let (results, report) = Analyzer::with_defaults().analyze("<Root/>").unwrap();
//! let output = JsonOutput::new(&results, &report, ExitCode::NoDuplicates);
//! println!("{}", output.to_json_pretty().unwrap());
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateResult, ScanReport};
use crate::error::ExitCode;
use crate::review::ReviewState;

/// Scan totals in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// `ViewObject` elements visited
    pub view_objects: usize,
    /// `ViewObject` elements whose id was tallied
    pub counted: usize,
    /// `ViewObject` elements with a blank `ObjectId`
    pub skipped_blank: usize,
    /// `ViewObject` elements without an `ObjectId` property
    pub missing_id: usize,
    /// Distinct ids tallied
    pub distinct_ids: usize,
    /// Ids reported as duplicates
    pub duplicates: usize,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "XD000")
    pub exit_code_name: String,
}

impl JsonSummary {
    /// Create a JSON summary from a scan report and an exit code.
    #[must_use]
    pub fn from_report(report: &ScanReport, exit_code: ExitCode) -> Self {
        Self {
            view_objects: report.view_objects,
            counted: report.counted,
            skipped_blank: report.skipped_blank,
            missing_id: report.missing_id,
            distinct_ids: report.distinct_ids,
            duplicates: report.duplicates,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}

/// Complete JSON output for a scan.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Duplicates sorted by object id
    pub duplicates: Vec<DuplicateResult>,
    /// Scan totals
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from scan results, totals and exit code.
    #[must_use]
    pub fn new(results: &[DuplicateResult], report: &ScanReport, exit_code: ExitCode) -> Self {
        Self {
            duplicates: results.to_vec(),
            summary: JsonSummary::from_report(report, exit_code),
        }
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer).map_err(serde_json::Error::io)?;
        Ok(())
    }
}

/// JSON output for a review in progress.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReviewOutput {
    /// Items still awaiting review
    pub pending: Vec<DuplicateResult>,
    /// Items marked as handled
    pub completed: Vec<DuplicateResult>,
    /// Total items under review
    pub total: usize,
    /// Completed share, 0 to 100
    pub progress_percentage: f64,
}

impl JsonReviewOutput {
    /// Create review output from the current state.
    #[must_use]
    pub fn new(state: &ReviewState) -> Self {
        Self {
            pending: state.pending().into_iter().cloned().collect(),
            completed: state.completed().into_iter().cloned().collect(),
            total: state.results().len(),
            progress_percentage: state.progress_percentage(),
        }
    }

    /// Write pretty-printed JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer).map_err(serde_json::Error::io)?;
        Ok(())
    }
}
