//! XML encoding of progress snapshots.

use std::fmt::Write as _;
use std::path::PathBuf;

use quick_xml::escape::escape;
use roxmltree::{Document, Node};
use thiserror::Error;

use crate::duplicates::finder::parse_document;
use crate::duplicates::DuplicateResult;
use crate::snapshot::data::ProgressSnapshot;

const ROOT_TAG: &str = "ProgressData";
const COMPLETED_TAG: &str = "CompletedItems";
const PENDING_TAG: &str = "PendingItems";
const ITEM_TAG: &str = "Item";

/// Errors that can occur while reading or writing snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot text is not well-formed XML.
    #[error("Invalid progress snapshot XML: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The snapshot file could not be read or written.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path of the snapshot file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Serialize both sections into a snapshot XML document.
///
/// Attribute values are escaped, including tab, CR and LF as character
/// references, so any string round-trips through [`parse`].
#[must_use]
pub fn serialize(completed: &[DuplicateResult], pending: &[DuplicateResult]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    // Writing into a String cannot fail.
    let _ = writeln!(xml, "<{ROOT_TAG}>");
    write_section(&mut xml, COMPLETED_TAG, completed);
    write_section(&mut xml, PENDING_TAG, pending);
    let _ = write!(xml, "</{ROOT_TAG}>");
    log::debug!(
        "Serialized snapshot: {} completed, {} pending",
        completed.len(),
        pending.len()
    );
    xml
}

fn write_section(xml: &mut String, tag: &str, items: &[DuplicateResult]) {
    let _ = writeln!(xml, "  <{tag}>");
    for item in items {
        let _ = writeln!(
            xml,
            "    <{ITEM_TAG} objectId=\"{}\" count=\"{}\" className=\"{}\" />",
            escape_attr(&item.object_id),
            item.count,
            escape_attr(&item.class_name),
        );
    }
    let _ = writeln!(xml, "  </{tag}>");
}

// Raw whitespace other than a space would be normalized away on read.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in escape(value).chars() {
        match ch {
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Parse a snapshot XML document.
///
/// Missing sections are empty. On each `Item`, a missing `objectId` or
/// `className` becomes an empty string and a missing or non-numeric `count`
/// becomes 1.
///
/// # Errors
///
/// Returns [`SnapshotError::Parse`] if the text is not well-formed XML.
pub fn parse(xml: &str) -> Result<ProgressSnapshot, SnapshotError> {
    let doc = parse_document(xml)?;
    let snapshot = ProgressSnapshot::new(
        read_section(&doc, COMPLETED_TAG),
        read_section(&doc, PENDING_TAG),
    );
    log::debug!(
        "Parsed snapshot: {} completed, {} pending",
        snapshot.completed.len(),
        snapshot.pending.len()
    );
    Ok(snapshot)
}

fn read_section(doc: &Document<'_>, tag: &str) -> Vec<DuplicateResult> {
    let Some(section) = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name(tag))
    else {
        return Vec::new();
    };

    section
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name(ITEM_TAG))
        .map(read_item)
        .collect()
}

fn read_item(node: Node<'_, '_>) -> DuplicateResult {
    let count = node
        .attribute("count")
        .and_then(|c| c.trim().parse::<usize>().ok())
        .unwrap_or(1);
    DuplicateResult::new(
        node.attribute("objectId").unwrap_or(""),
        count,
        node.attribute("className").unwrap_or(""),
    )
}
