//! Accessibility heuristics
//!
//! Static, single-node checks against the extracted snapshot; no computed
//! accessibility tree is consulted. The `<label for>` association is the one
//! document-wide fact needed, so it is collected up front into a
//! [`LabelIndex`].

use crate::analysis::{Issue, IssueKind};
use crate::dom::DomNode;
use std::collections::HashSet;

/// Tags that are natively interactive and need no explicit role
const INTERACTIVE_TAGS: [&str; 5] = ["button", "a", "input", "select", "textarea"];

/// Form controls that require an accessible label
const LABELLED_CONTROLS: [&str; 3] = ["input", "select", "textarea"];

/// Event handler attributes that make an element behave interactively
const HANDLER_ATTRIBUTES: [&str; 3] = ["onclick", "onkeypress", "onkeydown"];

/// The set of `<label for="...">` targets in a document
#[derive(Debug, Default)]
pub struct LabelIndex {
    targets: HashSet<String>,
}

impl LabelIndex {
    /// Collect every label target in one pass over the tree
    pub fn build(root: &DomNode) -> Self {
        let mut index = Self::default();
        index.collect(root);
        index
    }

    fn collect(&mut self, node: &DomNode) {
        if node.is_tag("label") {
            if let Some(target) = node.attribute("for") {
                self.targets.insert(target.to_string());
            }
        }
        for child in &node.children {
            self.collect(child);
        }
    }

    /// Whether some label points at the given element id
    pub fn has_label_for(&self, id: &str) -> bool {
        self.targets.contains(id)
    }
}

/// Run all accessibility checks against one element node
pub fn check(node: &DomNode, labels: &LabelIndex) -> Vec<Issue> {
    let mut issues = Vec::new();

    // Images without alternative text
    if node.is_tag("img") && !node.has_attribute("alt") {
        issues.push(Issue::error(IssueKind::MissingAlt, "Image is missing alt text"));
    }

    // Form controls without an accessible label
    if LABELLED_CONTROLS.iter().any(|t| node.is_tag(t)) {
        let has_label = node.has_attribute("aria-label")
            || node.has_attribute("aria-labelledby")
            || node.dom_id().is_some_and(|id| labels.has_label_for(id));

        if !has_label {
            issues.push(Issue::error(
                IssueKind::MissingLabel,
                "Form control is missing a label",
            ));
        }
    }

    // Handler-bearing elements that are neither natively interactive nor
    // given an explicit role
    let has_handler = HANDLER_ATTRIBUTES.iter().any(|a| node.has_attribute(a));
    if has_handler
        && !node.has_attribute("role")
        && !INTERACTIVE_TAGS.iter().any(|t| node.is_tag(t))
    {
        issues.push(Issue::warning(
            IssueKind::MissingRole,
            "Interactive element is missing a role",
        ));
    }

    // aria-hidden subtrees that still contain interactive elements: those
    // elements stay keyboard-reachable while invisible to assistive tech
    if node.attribute("aria-hidden") == Some("true") && has_interactive_descendant(node) {
        issues.push(Issue::error(
            IssueKind::AriaIssue,
            "Element with aria-hidden=\"true\" contains interactive elements",
        ));
    }

    issues
}

fn is_interactive(node: &DomNode) -> bool {
    INTERACTIVE_TAGS.iter().any(|t| node.is_tag(t)) || node.attribute("role") == Some("button")
}

fn has_interactive_descendant(node: &DomNode) -> bool {
    node.children
        .iter()
        .any(|child| is_interactive(child) || has_interactive_descendant(child))
}
