use std::fmt::Debug;

use crate::dom::types::{Document, NodeId};

/// Capability set the table of contents builder needs from a document tree.
///
/// The bundled [`Document`] arena implements it, and a host can implement it
/// as an adapter over its own document model to run the builder against a
/// real rendering environment.
pub trait DocumentModel {
    /// Handle addressing one element of the tree.
    type Handle: Copy + Eq + Debug;

    fn root(&self) -> Self::Handle;

    /// Whether `node` is a valid handle into this tree.
    fn contains(&self, node: Self::Handle) -> bool;

    fn tag_name(&self, node: Self::Handle) -> &str;

    /// Concatenated text of the element and its descendants.
    fn text_content(&self, node: Self::Handle) -> String;

    fn set_text(&mut self, node: Self::Handle, text: &str);

    fn attribute(&self, node: Self::Handle, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, node: Self::Handle, name: &str, value: &str);

    fn parent(&self, node: Self::Handle) -> Option<Self::Handle>;

    fn first_child(&self, node: Self::Handle) -> Option<Self::Handle>;

    fn create_element(&mut self, tag_name: &str) -> Self::Handle;

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);

    /// All descendants of `node` (excluding `node` itself) in document order.
    fn descendants(&self, node: Self::Handle) -> Vec<Self::Handle>;

    /// Descendants of `node` whose tag name matches one of `tags`
    /// (ASCII case-insensitive), in document order.
    fn descendants_with_tags(&self, node: Self::Handle, tags: &[&str]) -> Vec<Self::Handle> {
        self.descendants(node)
            .into_iter()
            .filter(|&n| tags.iter().any(|tag| tag.eq_ignore_ascii_case(self.tag_name(n))))
            .collect()
    }

    /// First element at or below `node` carrying `class` as one of its
    /// whitespace-separated class tokens.
    fn find_by_class(&self, node: Self::Handle, class: &str) -> Option<Self::Handle> {
        let has_class = |n: Self::Handle| {
            self.attribute(n, "class")
                .map(|value| value.split_whitespace().any(|token| token == class))
                .unwrap_or(false)
        };
        if has_class(node) {
            return Some(node);
        }
        self.descendants(node).into_iter().find(|&n| has_class(n))
    }
}

impl DocumentModel for Document {
    type Handle = NodeId;

    fn root(&self) -> NodeId {
        Document::root(self)
    }

    fn contains(&self, node: NodeId) -> bool {
        Document::contains(self, node)
    }

    fn tag_name(&self, node: NodeId) -> &str {
        Document::tag_name(self, node)
    }

    fn text_content(&self, node: NodeId) -> String {
        Document::text_content(self, node)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        Document::set_text(self, node, text)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        Document::attribute(self, node, name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        Document::set_attribute(self, node, name, value)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Document::parent(self, node)
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        Document::first_child(self, node)
    }

    fn create_element(&mut self, tag_name: &str) -> NodeId {
        Document::create_element(self, tag_name)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        Document::append_child(self, parent, child)
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        Document::descendants(self, node)
    }
}
