//! Progress snapshot module for saving and resuming a manual review.
//!
//! A snapshot records which duplicate ids the user has already handled
//! (`completed`) and which are still open (`pending`), so a review can be
//! resumed later or on another machine.
//!
//! # Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <ProgressData>
//!   <CompletedItems>
//!     <Item objectId="ABC" count="3" className="Widget" />
//!   </CompletedItems>
//!   <PendingItems>
//!     <Item objectId="CG9" count="4" className="ConveyorGroup" />
//!   </PendingItems>
//! </ProgressData>
//! ```
//!
//! # Architecture
//!
//! * [`data`]: the [`ProgressSnapshot`] model.
//! * [`codec`]: XML serialization and parsing.
//! * [`io`]: saving and loading snapshot files.

pub mod codec;
pub mod data;
pub mod io;

pub use codec::{parse, serialize, SnapshotError};
pub use data::ProgressSnapshot;
