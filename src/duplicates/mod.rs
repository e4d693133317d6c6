//! Duplicate ObjectId detection module.
//!
//! This module provides functionality for:
//! - Parsing an XML document and tallying `ObjectId` values per `ViewObject`
//! - Per-class threshold rules deciding which tallies count as duplicates
//! - The [`DuplicateResult`] record shared by output, review and snapshots
//!
//! # Example
//!
//! ```
//! use xmldupe::duplicates::scan;
//!
//! let xml = r#"<Root>
//!   <ViewObject classname="Widget"><PROPERTY name="ObjectId" value="ABC"/></ViewObject>
//!   <ViewObject classname="Widget"><PROPERTY name="ObjectId" value="ABC"/></ViewObject>
//! </Root>"#;
//!
//! let results = scan(xml).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].object_id, "ABC");
//! assert_eq!(results[0].count, 2);
//! ```

pub mod finder;
pub mod rules;

use serde::{Deserialize, Serialize};

pub use finder::{scan, scan_file, scan_with_rules, Analyzer, ScanError, ScanReport};
pub use rules::ThresholdRules;

/// One reported duplicate `ObjectId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateResult {
    /// Value of the `ObjectId` property, exactly as it appeared in the document
    pub object_id: String,
    /// Number of `ViewObject` elements carrying this id
    pub count: usize,
    /// `classname` of the first `ViewObject` that carried this id (may be empty)
    pub class_name: String,
}

impl DuplicateResult {
    /// Create a new result record.
    #[must_use]
    pub fn new(object_id: impl Into<String>, count: usize, class_name: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            count,
            class_name: class_name.into(),
        }
    }

    /// Class name for display, `N/A` when the element had no `classname`.
    #[must_use]
    pub fn display_class(&self) -> &str {
        if self.class_name.is_empty() {
            "N/A"
        } else {
            &self.class_name
        }
    }
}
