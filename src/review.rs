//! Manual review state over a scan result.
//!
//! After a scan the user works through the duplicate ids one by one and marks
//! each as handled. [`ReviewState`] keeps the scan result together with the
//! set of handled ids and splits the result into pending and completed lists,
//! both in result order.
//!
//! # Example
//!
//! ```
//! use xmldupe::duplicates::DuplicateResult;
//! use xmldupe::review::ReviewState;
//!
//! let mut state = ReviewState::new(vec![
//!     DuplicateResult::new("A", 2, "Widget"),
//!     DuplicateResult::new("B", 5, "Gadget"),
//! ]);
//!
//! assert!(state.set_checked("A", true));
//! assert_eq!(state.pending().len(), 1);
//! assert_eq!(state.completed()[0].object_id, "A");
//! assert_eq!(state.progress_percentage(), 50.0);
//! ```

use std::collections::BTreeSet;

use crate::duplicates::DuplicateResult;
use crate::snapshot::ProgressSnapshot;

/// Scan result plus the ids the user has marked as handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewState {
    results: Vec<DuplicateResult>,
    checked: BTreeSet<String>,
}

impl ReviewState {
    /// Start a review with nothing checked.
    #[must_use]
    pub fn new(results: Vec<DuplicateResult>) -> Self {
        Self {
            results,
            checked: BTreeSet::new(),
        }
    }

    /// All results, in scan order.
    #[must_use]
    pub fn results(&self) -> &[DuplicateResult] {
        &self.results
    }

    /// Whether `object_id` is marked as handled.
    #[must_use]
    pub fn is_checked(&self, object_id: &str) -> bool {
        self.checked.contains(object_id)
    }

    /// Mark or unmark an id.
    ///
    /// Returns `false` and changes nothing if the id is not part of the results.
    pub fn set_checked(&mut self, object_id: &str, checked: bool) -> bool {
        if !self.results.iter().any(|r| r.object_id == object_id) {
            log::warn!("Ignoring unknown object id: {}", object_id);
            return false;
        }

        if checked {
            self.checked.insert(object_id.to_string());
        } else {
            self.checked.remove(object_id);
        }
        true
    }

    /// Results not yet handled.
    #[must_use]
    pub fn pending(&self) -> Vec<&DuplicateResult> {
        self.results
            .iter()
            .filter(|r| !self.checked.contains(&r.object_id))
            .collect()
    }

    /// Results marked as handled.
    #[must_use]
    pub fn completed(&self) -> Vec<&DuplicateResult> {
        self.results
            .iter()
            .filter(|r| self.checked.contains(&r.object_id))
            .collect()
    }

    /// Share of results handled, from 0 to 100. Zero when there are no results.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.completed().len() as f64 / self.results.len() as f64 * 100.0
    }

    /// Snapshot of the current partition.
    #[must_use]
    pub fn to_snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(
            self.completed().into_iter().cloned().collect(),
            self.pending().into_iter().cloned().collect(),
        )
    }

    /// Rebuild a review from a snapshot.
    ///
    /// Results are the union of both sections sorted by object id. An id saved
    /// in both sections is treated as completed.
    #[must_use]
    pub fn from_snapshot(snapshot: ProgressSnapshot) -> Self {
        let mut checked = BTreeSet::new();
        let mut results = Vec::with_capacity(snapshot.len());

        for item in snapshot.completed {
            if checked.insert(item.object_id.clone()) {
                results.push(item);
            }
        }

        let mut seen_pending = BTreeSet::new();
        for item in snapshot.pending {
            if checked.contains(&item.object_id) {
                log::warn!(
                    "Object id {} is both completed and pending; keeping it completed",
                    item.object_id
                );
                continue;
            }
            if seen_pending.insert(item.object_id.clone()) {
                results.push(item);
            }
        }

        results.sort_by(|a, b| a.object_id.cmp(&b.object_id));
        Self { results, checked }
    }
}
