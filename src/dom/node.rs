use crate::analysis::{Issue, PerformanceFlags};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Kind of a snapshot node, mirroring the standard node-type taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Element,
    Text,
    Comment,
    /// Anything else (doctype, processing instruction, unreadable node)
    Other,
}

/// One node of a document tree at the moment of extraction.
///
/// Immutable after the snapshot pipeline finishes: the extractor builds the
/// structure, the analyzers fill in issues and flags, and from then on the
/// tree is only read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomNode {
    /// Unique token assigned at extraction, stable only within one snapshot
    pub id: String,

    /// Node kind
    pub kind: NodeKind,

    /// Lowercase tag name, present iff this is an element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,

    /// Attributes in document order (names unique)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    /// Trimmed text for text nodes, raw text for comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DomNode>,

    /// Distance from the snapshot root (root is 0)
    #[serde(default)]
    pub depth: usize,

    /// Slash-delimited ordinal path from the root, e.g. `/0/2/1`
    #[serde(default)]
    pub path: String,

    /// Structural XPath, elements only, best-effort
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    /// CSS selector, elements only, best-effort
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_selector: Option<String>,

    /// Whether the element was visible at extraction time (static heuristic)
    #[serde(default = "default_visible")]
    pub is_visible: bool,

    /// Issues attached by the analyzers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,

    /// Performance flags attached by the analyzers
    #[serde(default, skip_serializing_if = "PerformanceFlags::is_empty")]
    pub performance: PerformanceFlags,
}

fn default_visible() -> bool {
    true
}

impl DomNode {
    /// Create a new element node
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::new(NodeKind::Element).with_tag(tag_name)
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text).with_text(content)
    }

    /// Create a new comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Comment).with_text(content)
    }

    /// Create an empty node of the given kind
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: String::new(),
            kind,
            tag_name: None,
            attributes: IndexMap::new(),
            text_content: None,
            children: Vec::new(),
            depth: 0,
            path: String::new(),
            xpath: None,
            css_selector: None,
            is_visible: true,
            issues: Vec::new(),
            performance: PerformanceFlags::default(),
        }
    }

    /// A stand-in for a node that could not be read during traversal.
    /// Keeps the tree shape intact so extraction can continue past it.
    pub fn sentinel(depth: usize, path: impl Into<String>, reason: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Other);
        node.depth = depth;
        node.path = path.into();
        node.text_content = Some(format!("unreadable node: {}", reason.into()));
        node
    }

    /// Builder method: set id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder method: set tag name
    pub fn with_tag(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    /// Builder method: set attributes
    pub fn with_attributes(mut self, attributes: IndexMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method: set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<DomNode>) -> Self {
        self.children = children;
        self
    }

    /// Builder method: set depth
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Builder method: set ordinal path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Builder method: set visibility
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Add a child node
    pub fn add_child(&mut self, child: DomNode) {
        self.children.push(child);
    }

    /// Get attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check if the attribute is present, regardless of value
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Get the element's id attribute
    pub fn dom_id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Check if the element carries a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        match self.attribute("class") {
            Some(classes) => classes.split_whitespace().any(|c| c == class_name),
            None => false,
        }
    }

    /// Check if this is an element with the given tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    pub fn is_comment(&self) -> bool {
        self.kind == NodeKind::Comment
    }

    /// Negation of the visibility snapshot
    pub fn is_hidden(&self) -> bool {
        !self.is_visible
    }

    /// Find a node by its snapshot id (pre-order)
    pub fn find_by_id(&self, id: &str) -> Option<&DomNode> {
        if self.id == id {
            return Some(self);
        }

        for child in &self.children {
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }

        None
    }

    /// Find a node by its ordinal path (pre-order)
    pub fn find_by_path(&self, path: &str) -> Option<&DomNode> {
        if self.path == path {
            return Some(self);
        }

        for child in &self.children {
            if let Some(found) = child.find_by_path(path) {
                return Some(found);
            }
        }

        None
    }

    /// Count all nodes in this subtree, including self
    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(DomNode::count_nodes).sum::<usize>()
    }
}

/// Split an inline style attribute into (property, value) declarations.
/// Properties and values are trimmed and lowercased; empty segments dropped.
pub(crate) fn style_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim().to_ascii_lowercase();
            let value = value.trim().to_ascii_lowercase();
            if prop.is_empty() || value.is_empty() {
                return None;
            }
            Some((prop, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_creation() {
        let mut attrs = IndexMap::new();
        attrs.insert("id".to_string(), "submit".to_string());
        attrs.insert("class".to_string(), "btn primary".to_string());

        let node = DomNode::element("button")
            .with_id("dominator-abc123def")
            .with_attributes(attrs)
            .with_depth(2)
            .with_path("/0/1/0");

        assert_eq!(node.kind, NodeKind::Element);
        assert_eq!(node.tag_name.as_deref(), Some("button"));
        assert_eq!(node.dom_id(), Some("submit"));
        assert_eq!(node.depth, 2);
        assert_eq!(node.path, "/0/1/0");
        assert!(node.is_visible);
    }

    #[test]
    fn test_attribute_order_preserved() {
        let mut node = DomNode::element("div");
        node.add_attribute("zeta", "1");
        node.add_attribute("alpha", "2");
        node.add_attribute("mid", "3");

        let names: Vec<&String> = node.attributes.keys().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_has_class() {
        let mut node = DomNode::element("div");
        node.add_attribute("class", "container main active");

        assert!(node.has_class("container"));
        assert!(node.has_class("active"));
        assert!(!node.has_class("hidden"));
        assert!(!DomNode::element("div").has_class("anything"));
    }

    #[test]
    fn test_is_tag_case_insensitive() {
        let node = DomNode::element("div");
        assert!(node.is_tag("div"));
        assert!(node.is_tag("DIV"));
        assert!(!node.is_tag("span"));
        assert!(!DomNode::text("hello").is_tag("div"));
    }

    #[test]
    fn test_find_by_id_and_path() {
        let mut root = DomNode::element("body").with_id("a").with_path("/0");
        let mut div = DomNode::element("div").with_id("b").with_path("/0/0");
        div.add_child(DomNode::text("hi").with_id("c").with_path("/0/0/0"));
        root.add_child(div);

        assert_eq!(root.find_by_id("c").unwrap().path, "/0/0/0");
        assert_eq!(root.find_by_path("/0/0").unwrap().id, "b");
        assert!(root.find_by_id("missing").is_none());
        assert!(root.find_by_path("/9/9").is_none());
    }

    #[test]
    fn test_count_nodes() {
        let mut root = DomNode::element("body");
        let mut div = DomNode::element("div");
        div.add_child(DomNode::text("hi"));
        root.add_child(div);
        root.add_child(DomNode::comment("note"));

        assert_eq!(root.count_nodes(), 4);
    }

    #[test]
    fn test_sentinel() {
        let node = DomNode::sentinel(3, "/0/1", "already borrowed");
        assert_eq!(node.kind, NodeKind::Other);
        assert_eq!(node.depth, 3);
        assert!(node.text_content.unwrap().contains("already borrowed"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut node = DomNode::element("a").with_id("dominator-xyz");
        node.add_attribute("href", "/docs");
        node.add_child(DomNode::text("Docs"));

        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"tagName\""));
        let back: DomNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn test_style_declarations() {
        let decls = style_declarations("Display: None; color:red;; opacity: 0 ");
        assert_eq!(
            decls,
            vec![
                ("display".to_string(), "none".to_string()),
                ("color".to_string(), "red".to_string()),
                ("opacity".to_string(), "0".to_string()),
            ]
        );
        assert!(style_declarations("").is_empty());
    }
}
