//! shelf-dom — DomNode tree types for shelf views
//!
//! Views are assembled as a tree of `DomNode`s and handed to
//! `shelf-render-html` for serialization. The tree is plain data, so it can
//! also be dumped as JSON for debugging.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single element in a view tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomNode {
    /// HTML tag name (e.g. "div", "form", "input")
    pub tag: String,

    /// Stable identity, rendered as `data-key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// HTML attributes; ordered so output is deterministic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<BTreeMap<String, String>>,

    /// Text content, written before children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DomNode>>,
}

impl DomNode {
    /// Create an empty element
    pub fn el(tag: &str) -> Self {
        DomNode {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Create a simple text node
    pub fn text(tag: &str, content: &str) -> Self {
        DomNode {
            tag: tag.to_string(),
            text: Some(content.to_string()),
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Set a boolean attribute (`open`, `required`, ...) only when `on`.
    pub fn with_flag(self, name: &str, on: bool) -> Self {
        if on {
            self.with_attr(name, name)
        } else {
            self
        }
    }

    pub fn with_child(mut self, child: DomNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = DomNode>,
    {
        self.children.get_or_insert_with(Vec::new).extend(children);
        self
    }

    /// Get a class attribute if present
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(name).map(|s| s.as_str())
    }

    /// Iterate over children (empty slice if none)
    pub fn children_iter(&self) -> &[DomNode] {
        match &self.children {
            Some(c) => c,
            None => &[],
        }
    }

    /// Depth-first search for the first node with the given key.
    pub fn find_key(&self, key: &str) -> Option<&DomNode> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children_iter().iter().find_map(|c| c.find_key(key))
    }
}

/// Parse a single DomNode from a JSON string
pub fn parse_node(json: &str) -> Result<DomNode, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node() {
        let json = r#"{
            "tag": "table",
            "key": "books",
            "children": [
                { "tag": "tr", "key": "978-1", "children": [ { "tag": "td", "text": "Ivanhoe" } ] },
                { "tag": "tr", "key": "978-2", "attrs": { "class": "row" } }
            ]
        }"#;

        let node = parse_node(json).unwrap();
        assert_eq!(node.tag, "table");
        assert_eq!(node.key.as_deref(), Some("books"));
        assert_eq!(node.children_iter().len(), 2);
        assert_eq!(node.children_iter()[1].class(), Some("row"));
        assert_eq!(
            node.find_key("978-1").unwrap().children_iter()[0].text.as_deref(),
            Some("Ivanhoe")
        );
    }

    #[test]
    fn test_builder() {
        let form = DomNode::el("details")
            .with_flag("open", true)
            .with_flag("hidden", false)
            .with_child(DomNode::text("summary", "Add a book"));

        assert_eq!(form.attr("open"), Some("open"));
        assert_eq!(form.attr("hidden"), None);
        assert_eq!(form.children_iter()[0].text.as_deref(), Some("Add a book"));

        let json = serde_json::to_string(&DomNode::el("br")).unwrap();
        assert_eq!(json, r#"{"tag":"br"}"#);
    }
}
