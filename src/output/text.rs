//! Human-readable terminal output.
//!
//! Colors come from `yansi` and follow its global switch, so
//! `yansi::disable()` (set by `--no-color` / `NO_COLOR`) yields plain text.

use std::io::{self, Write};

use yansi::Paint;

use crate::duplicates::{DuplicateResult, ScanReport};
use crate::review::ReviewState;

/// Text formatter for a finished scan.
pub struct TextOutput<'a> {
    results: &'a [DuplicateResult],
    report: &'a ScanReport,
    source_name: &'a str,
}

impl<'a> TextOutput<'a> {
    /// Create a formatter; `source_name` is shown in the header.
    #[must_use]
    pub fn new(results: &'a [DuplicateResult], report: &'a ScanReport, source_name: &'a str) -> Self {
        Self {
            results,
            report,
            source_name,
        }
    }

    /// Write the report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(
            w,
            "{} {}",
            "File analyzed successfully:".green(),
            self.source_name.bold()
        )?;
        writeln!(
            w,
            "{} ViewObjects, {} ObjectIds counted ({} distinct)",
            self.report.view_objects, self.report.counted, self.report.distinct_ids
        )?;
        writeln!(w)?;

        if self.results.is_empty() {
            writeln!(
                w,
                "{}",
                "No duplicate ObjectIds found for the configured thresholds".yellow()
            )?;
            return Ok(());
        }

        writeln!(w, "{} ({})", "Duplicate ObjectIds".bold(), self.results.len())?;
        for (idx, item) in self.results.iter().enumerate() {
            write_item(&mut w, idx + 1, item, false)?;
        }
        Ok(())
    }
}

/// Text formatter for a review in progress.
pub struct TextReviewOutput<'a> {
    state: &'a ReviewState,
}

impl<'a> TextReviewOutput<'a> {
    /// Create a formatter for the review state.
    #[must_use]
    pub fn new(state: &'a ReviewState) -> Self {
        Self { state }
    }

    /// Write progress, pending items, then completed items.
    ///
    /// Numbering runs across both lists, pending first.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        let pending = self.state.pending();
        let completed = self.state.completed();
        let total = self.state.results().len();

        writeln!(
            w,
            "{} {} of {} ({:.0}% completed)",
            "Progress:".bold(),
            completed.len(),
            total,
            self.state.progress_percentage()
        )?;
        writeln!(w)?;

        writeln!(w, "{} ({})", "Pending Items".blue().bold(), pending.len())?;
        if pending.is_empty() {
            writeln!(w, "  {}", "No pending items".green())?;
        }
        for (idx, item) in pending.iter().enumerate() {
            write_item(&mut w, idx + 1, item, false)?;
        }

        if !completed.is_empty() {
            writeln!(w)?;
            writeln!(w, "{} ({})", "Completed Items".green().bold(), completed.len())?;
            for (idx, item) in completed.iter().enumerate() {
                write_item(&mut w, pending.len() + idx + 1, item, true)?;
            }
        }
        Ok(())
    }
}

fn write_item<W: Write>(w: &mut W, number: usize, item: &DuplicateResult, done: bool) -> io::Result<()> {
    let mark = if done { "[x]" } else { "[ ]" };
    if done {
        writeln!(
            w,
            "  {:>3}. {} {}  {} times  {}",
            number,
            mark,
            item.object_id.as_str().dim().strike(),
            item.count,
            item.display_class().dim()
        )
    } else {
        writeln!(
            w,
            "  {:>3}. {} {}  {} times  {}",
            number,
            mark,
            item.object_id.as_str().bold(),
            item.count.red(),
            item.display_class()
        )
    }
}
