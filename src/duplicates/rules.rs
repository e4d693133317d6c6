//! Per-class duplicate thresholds.
//!
//! Whether a tallied `ObjectId` is reported depends on the class name of the
//! first `ViewObject` that carried it. Thresholds are minimum-exclusive: an id
//! is a duplicate only when its count is strictly greater than the threshold.
//!
//! | class name       | threshold | reported when |
//! |------------------|-----------|---------------|
//! | `DistanceSensor` | 3         | count > 3     |
//! | `ConveyorGroup`  | 3         | count > 3     |
//! | anything else    | 1         | count > 1     |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Threshold applied to classes without an explicit entry.
pub const DEFAULT_THRESHOLD: usize = 1;

/// Threshold for classes that legitimately repeat ids a few times.
pub const SHARED_ID_THRESHOLD: usize = 3;

/// Decision table mapping class names to minimum-exclusive counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRules {
    default: usize,
    classes: BTreeMap<String, usize>,
}

impl Default for ThresholdRules {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
            .with_class("DistanceSensor", SHARED_ID_THRESHOLD)
            .with_class("ConveyorGroup", SHARED_ID_THRESHOLD)
    }
}

impl ThresholdRules {
    /// Create an empty table with only a default threshold.
    #[must_use]
    pub fn new(default: usize) -> Self {
        Self {
            default,
            classes: BTreeMap::new(),
        }
    }

    /// Build a table from a default and explicit class entries.
    #[must_use]
    pub fn from_parts(default: usize, classes: BTreeMap<String, usize>) -> Self {
        Self { default, classes }
    }

    /// Add or replace the threshold for a class name (exact, case-sensitive).
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>, threshold: usize) -> Self {
        self.classes.insert(class_name.into(), threshold);
        self
    }

    /// Threshold used for classes without an explicit entry.
    #[must_use]
    pub fn default_threshold(&self) -> usize {
        self.default
    }

    /// Explicit class entries.
    #[must_use]
    pub fn classes(&self) -> &BTreeMap<String, usize> {
        &self.classes
    }

    /// Threshold applicable to `class_name`.
    #[must_use]
    pub fn threshold_for(&self, class_name: &str) -> usize {
        self.classes
            .get(class_name)
            .copied()
            .unwrap_or(self.default)
    }

    /// Whether `count` occurrences of an id first seen on `class_name` is a duplicate.
    #[must_use]
    pub fn is_duplicate(&self, class_name: &str, count: usize) -> bool {
        count > self.threshold_for(class_name)
    }
}
