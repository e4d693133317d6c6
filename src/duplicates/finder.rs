//! Duplicate finder over a parsed XML document.
//!
//! # Overview
//!
//! Detection runs in three steps over a fully loaded document:
//! 1. **Parse**: build a DOM with `roxmltree`; ill-formed markup fails the whole scan
//! 2. **Tally**: visit every `ViewObject` in document order and count the value of
//!    its first `PROPERTY name="ObjectId"` descendant
//! 3. **Filter**: keep ids whose count exceeds the threshold for their class
//!    (see [`ThresholdRules`]) and sort them by id
//!
//! # Example
//!
//! ```
//! use xmldupe::duplicates::{Analyzer, ThresholdRules};
//!
//! let xml = r#"<Root>
//!   <ViewObject classname="ConveyorGroup"><PROPERTY name="ObjectId" value="CG9"/></ViewObject>
//!   <ViewObject classname="ConveyorGroup"><PROPERTY name="ObjectId" value="CG9"/></ViewObject>
//! </Root>"#;
//!
//! let analyzer = Analyzer::new(ThresholdRules::default());
//! let (results, report) = analyzer.analyze(xml).unwrap();
//!
//! assert!(results.is_empty()); // ConveyorGroup needs more than 3
//! assert_eq!(report.counted, 2);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;

use super::rules::ThresholdRules;
use super::DuplicateResult;

const VIEW_OBJECT_TAG: &str = "ViewObject";
const PROPERTY_TAG: &str = "PROPERTY";
const OBJECT_ID_PROPERTY: &str = "ObjectId";
const CLASSNAME_ATTR: &str = "classname";

/// Errors that can occur while scanning a document.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input is not well-formed XML.
    #[error("Invalid XML format: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The input file could not be read.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Totals collected while scanning one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// `ViewObject` elements visited
    pub view_objects: usize,
    /// `ViewObject` elements whose id was tallied
    pub counted: usize,
    /// `ViewObject` elements whose `ObjectId` value was blank
    pub skipped_blank: usize,
    /// `ViewObject` elements without any `ObjectId` property
    pub missing_id: usize,
    /// Distinct ids tallied
    pub distinct_ids: usize,
    /// Ids reported as duplicates
    pub duplicates: usize,
}

#[derive(Debug)]
struct Tally<'a> {
    count: usize,
    class_name: &'a str,
}

/// Duplicate ObjectId analyzer.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    rules: ThresholdRules,
}

impl Analyzer {
    /// Create an analyzer with a custom threshold table.
    #[must_use]
    pub fn new(rules: ThresholdRules) -> Self {
        Self { rules }
    }

    /// Create an analyzer with the built-in threshold table.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Threshold table used by this analyzer.
    #[must_use]
    pub fn rules(&self) -> &ThresholdRules {
        &self.rules
    }

    /// Scan XML text and return the sorted duplicates plus scan totals.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Parse`] if the text is not well-formed XML. No
    /// partial results are produced.
    pub fn analyze(&self, xml: &str) -> Result<(Vec<DuplicateResult>, ScanReport), ScanError> {
        let doc = parse_document(xml)?;
        let mut report = ScanReport::default();
        let mut tallies: HashMap<&str, Tally<'_>> = HashMap::new();

        for view_object in doc
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name(VIEW_OBJECT_TAG))
        {
            report.view_objects += 1;
            let class_name = view_object.attribute(CLASSNAME_ATTR).unwrap_or("");

            let Some(property) = find_object_id_property(view_object) else {
                report.missing_id += 1;
                continue;
            };

            let object_id = property.attribute("value").unwrap_or("");
            if object_id.trim().is_empty() {
                report.skipped_blank += 1;
                continue;
            }

            report.counted += 1;
            tallies
                .entry(object_id)
                .and_modify(|t| t.count += 1)
                .or_insert_with(|| {
                    log::trace!("First sighting of {:?} on class {:?}", object_id, class_name);
                    Tally {
                        count: 1,
                        class_name,
                    }
                });
        }

        report.distinct_ids = tallies.len();

        let mut results: Vec<DuplicateResult> = tallies
            .into_iter()
            .filter(|(_, t)| self.rules.is_duplicate(t.class_name, t.count))
            .map(|(id, t)| DuplicateResult::new(id, t.count, t.class_name))
            .collect();
        results.sort_unstable_by(|a, b| a.object_id.cmp(&b.object_id));

        report.duplicates = results.len();
        log::debug!(
            "Scanned {} ViewObjects: {} ids tallied ({} distinct), {} blank, {} without ObjectId, {} duplicates",
            report.view_objects,
            report.counted,
            report.distinct_ids,
            report.skipped_blank,
            report.missing_id,
            report.duplicates
        );

        Ok((results, report))
    }

    /// Read a UTF-8 XML file and scan it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the file cannot be read and
    /// [`ScanError::Parse`] if its content is not well-formed XML.
    pub fn analyze_file(
        &self,
        path: &Path,
    ) -> Result<(Vec<DuplicateResult>, ScanReport), ScanError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from {}", content.len(), path.display());
        self.analyze(&content)
    }
}

/// Parse XML text into a DOM, accepting a `<!DOCTYPE>` declaration.
pub(crate) fn parse_document(xml: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(xml, options)
}

/// First `PROPERTY name="ObjectId"` below `view_object`, depth-first.
fn find_object_id_property<'a, 'input>(
    view_object: Node<'a, 'input>,
) -> Option<Node<'a, 'input>> {
    view_object.descendants().find(|n| {
        n.is_element()
            && n.has_tag_name(PROPERTY_TAG)
            && n.attribute("name") == Some(OBJECT_ID_PROPERTY)
    })
}

/// Scan XML text with the built-in threshold table.
///
/// # Errors
///
/// Returns [`ScanError::Parse`] if the text is not well-formed XML.
pub fn scan(xml: &str) -> Result<Vec<DuplicateResult>, ScanError> {
    scan_with_rules(xml, &ThresholdRules::default())
}

/// Scan XML text with a custom threshold table.
///
/// # Errors
///
/// Returns [`ScanError::Parse`] if the text is not well-formed XML.
pub fn scan_with_rules(
    xml: &str,
    rules: &ThresholdRules,
) -> Result<Vec<DuplicateResult>, ScanError> {
    Analyzer::new(rules.clone())
        .analyze(xml)
        .map(|(results, _)| results)
}

/// Read and scan an XML file with the built-in threshold table.
///
/// # Errors
///
/// Returns [`ScanError::Io`] or [`ScanError::Parse`].
pub fn scan_file(path: &Path) -> Result<Vec<DuplicateResult>, ScanError> {
    Analyzer::with_defaults()
        .analyze_file(path)
        .map(|(results, _)| results)
}
