use serde::{Deserialize, Serialize};

use crate::dom::DocumentModel;
use crate::toc::builder::{derive_id, heading_level};

/// A single heading of a document outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRef {
    pub level: usize,
    pub id: String,
    pub text: String,
}

/// Extract the flat heading outline of the subtree under `node`.
///
/// Headings appear in document order with their level, text content and
/// anchor id. A heading without an id gets one derived from its text, the
/// same way the builder would assign it; the document itself is not touched.
pub fn extract_headings<D: DocumentModel>(doc: &D, node: D::Handle) -> Vec<HeadingRef> {
    doc.descendants_with_tags(node, &["h1", "h2", "h3", "h4", "h5", "h6"])
        .into_iter()
        .map(|heading| {
            let text = doc.text_content(heading);
            let id = match doc.attribute(heading, "id") {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => derive_id(&text),
            };
            HeadingRef {
                level: heading_level(doc.tag_name(heading)),
                id,
                text,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_extract_headings_in_document_order() {
        let mut doc = Document::new();
        let root = doc.root();
        for (tag, text) in [("h1", "Introduction"), ("h2", "First Steps"), ("h2", "Next")] {
            let heading = doc.create_element(tag);
            doc.set_text(heading, text);
            doc.append_child(root, heading);
        }

        let headings = extract_headings(&doc, root);
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[0].text, "Introduction");
        assert_eq!(headings[1].id, "First_Steps");
        assert_eq!(headings[2].id, "Next");
    }

    #[test]
    fn test_extract_headings_prefers_existing_id() {
        let mut doc = Document::new();
        let root = doc.root();
        let heading = doc.create_element("h2");
        doc.set_text(heading, "Some Section");
        doc.set_attribute(heading, "id", "custom-anchor");
        doc.append_child(root, heading);

        let headings = extract_headings(&doc, root);
        assert_eq!(headings[0].id, "custom-anchor");
        // Extraction is read-only; the document keeps what it had.
        assert_eq!(doc.attribute(heading, "id"), Some("custom-anchor"));
    }

    #[test]
    fn test_heading_ref_serializes() {
        let heading = HeadingRef {
            level: 2,
            id: "setup".to_string(),
            text: "Setup".to_string(),
        };
        let json = serde_json::to_string(&heading).unwrap();
        assert_eq!(json, r#"{"level":2,"id":"setup","text":"Setup"}"#);
        let back: HeadingRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, heading);
    }
}
