use crate::dom::types::{Document, NodeId};

/// Render an element subtree as an HTML string.
///
/// Text content and attribute values are escaped; attributes are emitted in
/// lexical name order so output is stable for a given tree.
pub fn serialize_element(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_element(doc, node, &mut out);
    out
}

fn write_element(doc: &Document, node: NodeId, out: &mut String) {
    let tag = doc.tag_name(node);
    out.push('<');
    out.push_str(tag);
    for (name, value) in doc.attributes(node) {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');
    out.push_str(&html_escape::encode_text(doc.own_text(node)));
    for &child in doc.children(node) {
        write_element(doc, child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested_elements() {
        let mut doc = Document::new();
        let list = doc.create_element("ol");
        let item = doc.create_element("li");
        let link = doc.create_element("a");
        doc.set_attribute(link, "href", "#Intro");
        doc.set_text(link, "Intro");
        doc.append_child(list, item);
        doc.append_child(item, link);

        assert_eq!(
            serialize_element(&doc, list),
            "<ol><li><a href=\"#Intro\">Intro</a></li></ol>"
        );
    }

    #[test]
    fn test_serialize_escapes_text_and_attributes() {
        let mut doc = Document::new();
        let link = doc.create_element("a");
        doc.set_attribute(link, "href", "#a\"b");
        doc.set_text(link, "Fish & <Chips>");

        let html = serialize_element(&doc, link);
        assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(!html.contains("\"#a\"b\""));
    }
}
