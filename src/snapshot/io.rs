//! I/O operations for progress snapshots.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::snapshot::codec::{parse, serialize, SnapshotError};
use crate::snapshot::data::ProgressSnapshot;

impl ProgressSnapshot {
    /// Serializes the snapshot to XML.
    #[must_use]
    pub fn to_xml(&self) -> String {
        serialize(&self.completed, &self.pending)
    }

    /// Parses a snapshot from XML text.
    pub fn from_xml(xml: &str) -> Result<Self, SnapshotError> {
        parse(xml)
    }

    /// Saves the snapshot to a file.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let xml = self.to_xml();
        let io_err = |source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::create(path).map_err(io_err)?;
        file.write_all(xml.as_bytes()).map_err(io_err)?;
        log::info!(
            "Saved progress ({} completed, {} pending) to {}",
            self.completed.len(),
            self.pending.len(),
            path.display()
        );
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = parse(&content)?;

        if snapshot.is_empty() {
            log::warn!("Progress snapshot contains no items: {}", path.display());
        }

        Ok(snapshot)
    }
}
