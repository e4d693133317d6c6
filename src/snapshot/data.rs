//! Data structures for progress snapshots.

use serde::{Deserialize, Serialize};

use crate::duplicates::DuplicateResult;

/// Completed and pending review items, each in their saved order.
///
/// Uniqueness across the two lists is not enforced here; see
/// [`crate::review::ReviewState::from_snapshot`] for how overlaps are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Items the user has marked as handled.
    pub completed: Vec<DuplicateResult>,
    /// Items still awaiting review.
    pub pending: Vec<DuplicateResult>,
}

impl ProgressSnapshot {
    /// Create a snapshot from both sections.
    #[must_use]
    pub fn new(completed: Vec<DuplicateResult>, pending: Vec<DuplicateResult>) -> Self {
        Self { completed, pending }
    }

    /// Snapshot of a fresh scan, with every result pending.
    #[must_use]
    pub fn all_pending(results: Vec<DuplicateResult>) -> Self {
        Self::new(Vec::new(), results)
    }

    /// Total items across both sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len() + self.pending.len()
    }

    /// Whether both sections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.pending.is_empty()
    }
}
