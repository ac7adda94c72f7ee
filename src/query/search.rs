//! Search engine
//!
//! Case-insensitive substring search over tag names, attribute names/values
//! and text content. Unlike the filter engine, a match never prunes
//! recursion: descendants of a matching node are searched independently, and
//! results come back in pre-order (document order).

use crate::dom::DomNode;
use serde::{Deserialize, Serialize};

/// Which field of the node matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    TagName,
    Attribute,
    TextContent,
}

/// One search result
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub node: &'a DomNode,
    pub kind: MatchKind,
    /// The text that matched (tag, `name="value"` pair, or text content)
    pub matched: String,
}

/// Search a tree for nodes matching the query.
///
/// An empty or whitespace-only query matches nothing.
pub fn search<'a>(root: &'a DomNode, query: &str) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    visit(root, &query, &mut hits);
    hits
}

fn visit<'a>(node: &'a DomNode, query: &str, hits: &mut Vec<SearchHit<'a>>) {
    if let Some(hit) = match_node(node, query) {
        hits.push(hit);
    }

    for child in &node.children {
        visit(child, query, hits);
    }
}

fn match_node<'a>(node: &'a DomNode, query: &str) -> Option<SearchHit<'a>> {
    if let Some(tag) = &node.tag_name {
        if tag.to_lowercase().contains(query) {
            return Some(SearchHit { node, kind: MatchKind::TagName, matched: tag.clone() });
        }
    }

    for (name, value) in &node.attributes {
        if name.to_lowercase().contains(query) || value.to_lowercase().contains(query) {
            return Some(SearchHit {
                node,
                kind: MatchKind::Attribute,
                matched: format!("{name}=\"{value}\""),
            });
        }
    }

    if let Some(text) = &node.text_content {
        if text.to_lowercase().contains(query) {
            return Some(SearchHit {
                node,
                kind: MatchKind::TextContent,
                matched: text.clone(),
            });
        }
    }

    None
}
