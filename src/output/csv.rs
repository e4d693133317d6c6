//! CSV output formatter for scan results and review progress.
//!
//! One row is generated per duplicate id.
//!
//! # Columns
//!
//! - `object_id`: The duplicated `ObjectId` value
//! - `count`: Number of `ViewObject` elements carrying it
//! - `class_name`: `classname` of the first carrier (may be empty)
//! - `status`: `pending` or `completed` (review output only)
//!
//! # Example
//!
//! ```
//! use xmldupe::duplicates::DuplicateResult;
//! use xmldupe::output::csv::CsvOutput;
//!
//! let results = vec![DuplicateResult::new("ABC", 3, "Widget")];
//! let csv = CsvOutput::new(&results).to_string().unwrap();
//! assert!(csv.starts_with("object_id,count,class_name"));
//! ```

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::duplicates::DuplicateResult;
use crate::review::ReviewState;

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    object_id: &'a str,
    count: usize,
    class_name: &'a str,
}

#[derive(Debug, Serialize)]
struct CsvReviewRow<'a> {
    object_id: &'a str,
    count: usize,
    class_name: &'a str,
    status: &'static str,
}

const RESULT_HEADERS: [&str; 3] = ["object_id", "count", "class_name"];
const REVIEW_HEADERS: [&str; 4] = ["object_id", "count", "class_name", "status"];

enum Source<'a> {
    Results(&'a [DuplicateResult]),
    Review(&'a ReviewState),
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    source: Source<'a>,
}

impl<'a> CsvOutput<'a> {
    /// Create a CSV formatter for scan results.
    #[must_use]
    pub fn new(results: &'a [DuplicateResult]) -> Self {
        Self {
            source: Source::Results(results),
        }
    }

    /// Create a CSV formatter for a review, pending rows first.
    #[must_use]
    pub fn for_review(state: &'a ReviewState) -> Self {
        Self {
            source: Source::Review(state),
        }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        // Header is written up front so empty output still carries it.
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        match &self.source {
            Source::Results(results) => {
                csv_writer.write_record(RESULT_HEADERS)?;
                for r in results.iter() {
                    csv_writer.serialize(CsvRow {
                        object_id: &r.object_id,
                        count: r.count,
                        class_name: &r.class_name,
                    })?;
                }
            }
            Source::Review(state) => {
                csv_writer.write_record(REVIEW_HEADERS)?;
                let pending = state.pending().into_iter().map(|r| (r, "pending"));
                let completed = state.completed().into_iter().map(|r| (r, "completed"));
                for (r, status) in pending.chain(completed) {
                    csv_writer.serialize(CsvReviewRow {
                        object_id: &r.object_id,
                        count: r.count,
                        class_name: &r.class_name,
                        status,
                    })?;
                }
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
