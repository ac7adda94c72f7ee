//! Structural anti-pattern heuristics
//!
//! Flags markup that works but fights the document's semantics: long chains
//! of nested `div`s, and `div`s whose class or id betrays a role that a
//! semantic element (or an ARIA role) should be carrying.

use crate::analysis::{Issue, IssueKind};
use crate::dom::DomNode;

/// Consecutive-div chain length at which nesting gets flagged
const DIV_CHAIN_THRESHOLD: usize = 3;

/// Class/id hints and the semantic element each one suggests
const SEMANTIC_HINTS: [(&str, &str); 5] = [
    ("nav", "nav"),
    ("header", "header"),
    ("footer", "footer"),
    ("main", "main"),
    ("section", "section"),
];

/// Run the anti-pattern checks against one element node.
///
/// `div_chain` is the number of consecutive `div` ancestors ending at this
/// node (including the node itself when it is a div); the annotation pass
/// threads it down the tree.
pub fn check(node: &DomNode, div_chain: usize) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !node.is_tag("div") {
        return issues;
    }

    if div_chain >= DIV_CHAIN_THRESHOLD {
        issues.push(Issue::warning(
            IssueKind::SemanticsIssue,
            format!("Deeply nested <div> chain detected ({div_chain} levels)"),
        ));
    }

    if !node.has_attribute("role") {
        if let Some((_, replacement)) = SEMANTIC_HINTS.iter().find(|(hint, _)| {
            node.attribute("class").is_some_and(|c| c.contains(hint))
                || node.attribute("id").is_some_and(|i| i.contains(hint))
        }) {
            issues.push(Issue::warning(
                IssueKind::SemanticsIssue,
                format!("Non-semantic container: replace <div> with <{replacement}>"),
            ));
        }
    }

    issues
}
