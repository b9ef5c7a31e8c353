use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Neutral tree node produced by XML export
///
/// Attributes are kept sorted by name so two exports of the same tree
/// always compare and render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of `set_attribute`
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute, replacing any previous value under the same name
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn push(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First direct child with the given tag
    pub fn find_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(XmlNode::node_count).sum::<usize>()
    }

    fn escape_attr(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    /// Render as compact XML text
    pub fn to_xml_string(&self) -> String {
        let mut output = String::new();
        self.write_xml(&mut output);
        output
    }

    fn write_xml(&self, output: &mut String) {
        output.push('<');
        output.push_str(&self.tag);
        for (name, value) in &self.attributes {
            output.push(' ');
            output.push_str(name);
            output.push_str("=\"");
            output.push_str(&Self::escape_attr(value));
            output.push('"');
        }

        if self.children.is_empty() {
            output.push_str("/>");
            return;
        }

        output.push('>');
        for child in &self.children {
            child.write_xml(output);
        }
        output.push_str("</");
        output.push_str(&self.tag);
        output.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_replaces() {
        let mut node = XmlNode::new("Item").with_attribute("Value", "a");
        node.set_attribute("Value", "b");

        assert_eq!(node.attributes.len(), 1);
        assert_eq!(node.attribute("Value"), Some("b"));
    }

    #[test]
    fn test_to_xml_string_nested() {
        let mut root = XmlNode::new("For");
        root.push(XmlNode::new("Initialization"));
        let mut condition = XmlNode::new("Condition");
        condition.push(XmlNode::new("Item").with_attribute("Value", "i<10"));
        root.push(condition);

        assert_eq!(
            root.to_xml_string(),
            r#"<For><Initialization/><Condition><Item Value="i&lt;10"/></Condition></For>"#
        );
        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn test_attributes_render_sorted() {
        let node = XmlNode::new("File")
            .with_attribute("Value", "")
            .with_attribute("FileName", "main.qml");

        assert_eq!(node.to_xml_string(), r#"<File FileName="main.qml" Value=""/>"#);
    }

    #[test]
    fn test_find_child() {
        let mut root = XmlNode::new("Root");
        root.push(XmlNode::new("A"));
        root.push(XmlNode::new("B"));

        assert_eq!(root.find_child("B").map(|n| n.tag.as_str()), Some("B"));
        assert!(root.find_child("C").is_none());
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let node = XmlNode::new("Item");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"tag":"Item"}"#);

        let back: XmlNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
