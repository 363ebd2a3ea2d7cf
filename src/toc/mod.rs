mod builder;
mod outline;

pub use builder::{derive_id, heading_level, mount_toc, TocBuilder};
pub use outline::{extract_headings, HeadingRef};
