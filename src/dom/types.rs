use std::collections::BTreeMap;

/// Handle to an element stored in a [`Document`].
///
/// Handles are plain indexes into the document arena; they are only
/// meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single element: tag name, attributes, its own text and tree links.
#[derive(Debug)]
struct ElementData {
    tag_name: String,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ElementData {
    fn new(tag_name: &str) -> Self {
        ElementData {
            tag_name: tag_name.to_string(),
            attributes: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// In-memory element tree.
///
/// This is the bundled stand-in for a host rendering environment's document
/// model: elements carry a tag name, attributes, their own text, and
/// parent/child links. Nodes are arena-allocated and addressed by [`NodeId`],
/// so moving a subtree is a matter of relinking, not copying.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<ElementData>,
    root: NodeId,
}

impl Document {
    /// Create a document with an empty `body` root element.
    pub fn new() -> Self {
        Document {
            nodes: vec![ElementData::new("body")],
            root: NodeId(0),
        }
    }

    /// The root element of the document.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Whether `node` belongs to this document.
    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    /// Create a detached element with the given tag name.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementData::new(tag_name));
        id
    }

    pub fn tag_name(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag_name
    }

    /// The element's own text, excluding descendants.
    pub fn own_text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    /// Concatenated text of the element and all its descendants, in
    /// document order.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(node, &mut text);
        text
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let data = &self.nodes[node.0];
        out.push_str(&data.text);
        for &child in &data.children {
            self.collect_text(child, out);
        }
    }

    /// Replace the element's own text.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text = text.to_string();
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Attributes in lexical name order.
    pub fn attributes(&self, node: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.nodes[node.0]
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].children.first().copied()
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first. Appending a node to itself is ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child {
            return;
        }
        if let Some(old_parent) = self.nodes[child.0].parent {
            self.nodes[old_parent.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// All descendants of `node` (excluding `node` itself) in document order.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.0].children.iter().rev().copied());
        }
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}
