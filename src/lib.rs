//! Navigable table of contents generation for tree-structured documents.
//!
//! Scans a source element for `h1`–`h6` headings and builds a nested
//! ordered-list of anchor links in a destination element, reflecting the
//! heading hierarchy. Works against any document tree implementing
//! [`DocumentModel`]; an in-memory [`Document`] arena is bundled.

// Module declarations
pub mod config;
pub mod dom;
pub mod toc;
pub mod utils;

pub use config::TocConfig;
pub use dom::{serialize_element, Document, DocumentModel, NodeId};
pub use toc::{extract_headings, heading_level, mount_toc, HeadingRef, TocBuilder};
pub use utils::error::{BoxResult, TocifyError};
