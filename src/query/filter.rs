//! Filter engine
//!
//! Produces a pruned copy of a snapshot tree. Two families of options behave
//! differently:
//! - show/hide toggles (`hide_*`) are exclusionary: a node they reject is
//!   dropped together with its entire subtree;
//! - positive predicates (tags, attributes, text, issue-only toggles) are
//!   retention-preserving: a node that fails them is still kept as a
//!   structural ancestor whenever one of its descendants passes, so a
//!   passing leaf never loses the chain that makes it reachable.

use crate::dom::{DomNode, NodeKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One attribute predicate: name must match; value too when given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttributePredicate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AttributePredicate {
    pub fn name(name: impl Into<String>) -> Self {
        Self { name: name.into(), value: None }
    }

    pub fn name_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: Some(value.into()) }
    }
}

/// Filter specification. All active options are AND-combined, except the
/// attribute predicates which are OR-combined among themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TreeFilter {
    /// Keep only elements with one of these tag names (case-insensitive)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_names: Vec<String>,

    /// Keep only elements matching one of these attribute predicates
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributePredicate>,

    /// Keep only nodes whose text contains this substring (case-insensitive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_script_tags: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_comments: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_empty_text_nodes: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_invisible_elements: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_only_accessibility_issues: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_only_performance_issues: bool,
}

impl TreeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the exclusionary toggles reject this node outright
    fn excludes(&self, node: &DomNode) -> bool {
        if self.hide_script_tags && node.is_tag("script") {
            return true;
        }

        if self.hide_comments && node.kind == NodeKind::Comment {
            return true;
        }

        if self.hide_empty_text_nodes
            && node.kind == NodeKind::Text
            && node.text_content.as_deref().is_none_or(|t| t.trim().is_empty())
        {
            return true;
        }

        if self.hide_invisible_elements && node.is_hidden() {
            return true;
        }

        false
    }

    /// Whether any positive predicate is configured at all
    fn has_positive_predicates(&self) -> bool {
        !self.tag_names.is_empty()
            || !self.attributes.is_empty()
            || self.text_content.is_some()
            || self.show_only_accessibility_issues
            || self.show_only_performance_issues
    }

    /// Whether the node itself is a positive match.
    ///
    /// Each active predicate applies only to nodes that have the feature in
    /// question (a text node has no tag, an element carries no own text). A
    /// node fails an applicable predicate → no match; a node to which no
    /// active predicate applies is no match either, though it may still be
    /// retained as a structural ancestor. With no positive predicates
    /// configured, everything matches and only the exclusion toggles act.
    fn matches(&self, node: &DomNode) -> bool {
        let mut applied = false;

        if !self.tag_names.is_empty() {
            if let Some(tag) = &node.tag_name {
                applied = true;
                if !self.tag_names.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                    return false;
                }
            }
        }

        if !self.attributes.is_empty() && node.is_element() {
            applied = true;
            let any_match = self.attributes.iter().any(|pred| {
                node.attributes.iter().any(|(name, value)| {
                    name == &pred.name
                        && pred.value.as_ref().is_none_or(|expected| expected == value)
                })
            });
            if !any_match {
                return false;
            }
        }

        if let Some(needle) = &self.text_content {
            if let Some(text) = &node.text_content {
                applied = true;
                if !text.to_lowercase().contains(&needle.to_lowercase()) {
                    return false;
                }
            }
        }

        if self.show_only_accessibility_issues {
            applied = true;
            if node.issues.is_empty() {
                return false;
            }
        }

        if self.show_only_performance_issues {
            applied = true;
            if !node.performance.any() {
                return false;
            }
        }

        if !self.has_positive_predicates() {
            return true;
        }

        applied
    }
}

/// Apply a filter to a tree, returning the pruned copy.
///
/// Returns `None` when nothing survives (that is a normal outcome, not an
/// error). Applying the same filter to its own output changes nothing.
pub fn filter_tree(node: &DomNode, filter: &TreeFilter) -> Option<DomNode> {
    if filter.excludes(node) {
        return None;
    }

    let children: Vec<DomNode> = node
        .children
        .iter()
        .filter_map(|child| filter_tree(child, filter))
        .collect();

    if filter.matches(node) || !children.is_empty() {
        let mut kept = node.clone();
        kept.children = children;
        Some(kept)
    } else {
        None
    }
}
