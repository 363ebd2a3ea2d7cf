use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::config::TocConfig;
use crate::dom::DocumentModel;
use crate::utils::error::{BoxResult, TocifyError};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Heading tags scanned for, in document order of the source element.
const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Convert a tag name to its heading level: `h1` → 1 … `h6` → 6.
/// Any other tag maps to level 1.
pub fn heading_level(tag_name: &str) -> usize {
    match tag_name.to_ascii_lowercase().as_str() {
        "h1" => 1,
        "h2" => 2,
        "h3" => 3,
        "h4" => 4,
        "h5" => 5,
        "h6" => 6,
        _ => 1,
    }
}

/// Derive an anchor id from heading text: every run of whitespace becomes a
/// single underscore.
pub fn derive_id(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, "_").to_string()
}

/// Builds a nested ordered-list table of contents from the headings of a
/// source element and appends it to a destination element.
///
/// Construction scans the source for `h1`–`h6` descendants in document order
/// (restricted to the configured level range); [`TocBuilder::generate`] then
/// performs the single synchronous build pass.
pub struct TocBuilder<'a, D: DocumentModel> {
    doc: &'a mut D,
    to: D::Handle,
    headings: Vec<D::Handle>,
    holder: D::Handle,
    list_class: String,
}

impl<'a, D: DocumentModel> TocBuilder<'a, D> {
    /// Create a builder scanning `from` for headings, targeting `to`.
    ///
    /// Fails if either handle does not belong to `doc`.
    pub fn new(
        doc: &'a mut D,
        from: D::Handle,
        to: D::Handle,
        config: &TocConfig,
    ) -> BoxResult<Self> {
        if !doc.contains(from) {
            return Err(Box::new(TocifyError::Detached(format!(
                "source element {:?}",
                from
            ))));
        }
        if !doc.contains(to) {
            return Err(Box::new(TocifyError::Detached(format!(
                "destination element {:?}",
                to
            ))));
        }

        let min_level = config.min_level.clamp(1, 6);
        let max_level = config.max_level.clamp(1, 6);
        let headings: Vec<D::Handle> = doc
            .descendants_with_tags(from, &HEADING_TAGS)
            .into_iter()
            .filter(|&h| {
                let level = heading_level(doc.tag_name(h));
                level >= min_level && level <= max_level
            })
            .collect();
        debug!("Collected {} headings for table of contents", headings.len());

        let holder = doc.create_element("div");
        Ok(TocBuilder {
            doc,
            to,
            headings,
            holder,
            list_class: config.list_class.clone(),
        })
    }

    /// The most important (minimum) heading level among the collected
    /// headings, or 6 if there are none.
    pub fn base_level(&self) -> usize {
        self.headings
            .iter()
            .map(|&h| heading_level(self.doc.tag_name(h)))
            .min()
            .unwrap_or(6)
    }

    /// Make sure the heading carries a non-empty id, deriving one from its
    /// text content if needed, and return it. Idempotent: an already present
    /// id is left untouched.
    pub fn ensure_id(&mut self, heading: D::Handle) -> String {
        let existing = self
            .doc
            .attribute(heading, "id")
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        if let Some(id) = existing {
            return id;
        }
        let derived = derive_id(&self.doc.text_content(heading));
        self.doc.set_attribute(heading, "id", &derived);
        derived
    }

    /// Build the nested list and append it to the destination element.
    ///
    /// One list item is produced per collected heading, in document order;
    /// nesting follows relative heading-level changes, with skip-level jumps
    /// bridged by intermediate singleton lists. With no headings at all the
    /// destination is left untouched.
    pub fn generate(mut self) -> BoxResult<()> {
        let mut current_level = self.base_level() - 1;
        let mut cursor = self.holder;
        let headings = std::mem::take(&mut self.headings);

        for heading in headings {
            let level = heading_level(self.doc.tag_name(heading));
            let delta = level as isize - current_level as isize;

            let id = self.ensure_id(heading);
            let text = self.doc.text_content(heading);
            let link = self.doc.create_element("a");
            self.doc.set_attribute(link, "href", &format!("#{}", id));
            self.doc.set_text(link, &text);

            if delta > 0 {
                // Deeper: open one list per skipped level, then drop the link in.
                for _ in 0..delta {
                    let list = self.doc.create_element("ol");
                    let item = self.doc.create_element("li");
                    self.doc.append_child(list, item);
                    self.doc.append_child(cursor, list);
                    cursor = item;
                }
                self.doc.append_child(cursor, link);
            } else {
                // Same level or shallower: climb back up, then add a sibling item.
                for _ in 0..-delta {
                    cursor = self.ascend(cursor);
                }
                let item = self.doc.create_element("li");
                self.doc.append_child(item, link);
                let list = self.doc.parent(cursor).unwrap_or(self.holder);
                self.doc.append_child(list, item);
                cursor = item;
            }

            current_level = level;
        }

        match self.doc.first_child(self.holder) {
            Some(list) => {
                if !self.list_class.is_empty() {
                    self.doc.set_attribute(list, "class", &self.list_class);
                }
                self.doc.append_child(self.to, list);
            }
            None => debug!("No headings collected; destination left untouched"),
        }
        Ok(())
    }

    /// Move the cursor up one nesting level: from a list item over its list
    /// to the enclosing list item. The cursor never leaves the outermost
    /// list item; excess hops are clamped.
    fn ascend(&self, cursor: D::Handle) -> D::Handle {
        let target = self
            .doc
            .parent(cursor)
            .and_then(|list| self.doc.parent(list))
            .filter(|&item| item != self.holder);
        match target {
            Some(item) => item,
            None => {
                warn!("Heading hierarchy ascends past the list root; keeping cursor in place");
                cursor
            }
        }
    }
}

/// Locate the article and table of contents containers by their marker
/// classes and build the table of contents between them.
///
/// This is the explicit entry point a host calls once its document tree is
/// ready. Fails with [`TocifyError::MissingElement`] if either marker class
/// matches nothing.
pub fn mount_toc<D: DocumentModel>(doc: &mut D, config: &TocConfig) -> BoxResult<()> {
    let root = doc.root();
    let from = doc
        .find_by_class(root, &config.article_selector)
        .ok_or_else(|| TocifyError::MissingElement(config.article_selector.clone()))?;
    let to = doc
        .find_by_class(root, &config.toc_selector)
        .ok_or_else(|| TocifyError::MissingElement(config.toc_selector.clone()))?;
    debug!(
        "Mounting table of contents from '{}' into '{}'",
        config.article_selector, config.toc_selector
    );
    TocBuilder::new(doc, from, to, config)?.generate()
}
