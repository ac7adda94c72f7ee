//! Static analyzers run over a snapshot tree
//!
//! Three analyzers inspect every element node in a single annotation pass:
//! - accessibility checks (missing alt/label/role, aria-hidden misuse)
//! - performance flags (deep nesting, heavy inline styles, large datasets,
//!   costly style properties)
//! - structural anti-patterns (div chains, non-semantic containers)
//!
//! Analyzers only ever append to a node's issue list; none of them removes
//! or replaces findings from another analyzer.

pub mod accessibility;
pub mod antipattern;
pub mod performance;

pub use accessibility::LabelIndex;

use crate::dom::DomNode;
use serde::{Deserialize, Serialize};

/// Severity of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Closed taxonomy of issue kinds. Analyzers never invent kinds at runtime;
/// `ContrastIssue` and `KeyboardIssue` are reserved by the taxonomy and have
/// no emitting analyzer yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    MissingAlt,
    MissingLabel,
    MissingRole,
    AriaIssue,
    SemanticsIssue,
    ContrastIssue,
    KeyboardIssue,
}

/// One finding attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    pub fn error(kind: IssueKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), severity: Severity::Error }
    }

    pub fn warning(kind: IssueKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), severity: Severity::Warning }
    }
}

/// Boolean performance conditions detected on a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceFlags {
    /// Node sits deeper than the nesting threshold
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deep_nesting: bool,

    /// Inline style attribute is unusually long or declaration-heavy
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub heavy_inline_styles: bool,

    /// Cumulative data-* attribute payload is large
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub large_dataset: bool,

    /// Inline style uses compositing-expensive properties
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub costly_styles: bool,
}

impl PerformanceFlags {
    /// True if at least one flag is set
    pub fn any(&self) -> bool {
        self.deep_nesting || self.heavy_inline_styles || self.large_dataset || self.costly_styles
    }

    /// True if no flag is set
    pub fn is_empty(&self) -> bool {
        !self.any()
    }
}

/// Run all analyzers over the tree, attaching issues and flags in place.
///
/// Must run after extraction is structurally complete: the aria-hidden check
/// looks at descendants, and the label index is collected from the whole
/// tree before any form control is judged.
pub fn annotate(root: &mut DomNode) {
    let labels = LabelIndex::build(root);
    annotate_node(root, &labels, 0);
}

fn annotate_node(node: &mut DomNode, labels: &LabelIndex, div_chain: usize) {
    let chain = if node.is_tag("div") { div_chain + 1 } else { 0 };

    if node.is_element() {
        let mut issues = accessibility::check(node, labels);
        issues.extend(antipattern::check(node, chain));
        let flags = performance::flags(node);
        node.issues.extend(issues);
        node.performance = flags;
    }

    for child in &mut node.children {
        annotate_node(child, labels, chain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_constructors() {
        let issue = Issue::error(IssueKind::MissingAlt, "Image is missing alt text");
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.kind, IssueKind::MissingAlt);

        let issue = Issue::warning(IssueKind::MissingRole, "no role");
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn test_issue_kind_serialization() {
        let json = serde_json::to_string(&IssueKind::MissingAlt).unwrap();
        assert_eq!(json, "\"missing-alt\"");
        let json = serde_json::to_string(&IssueKind::SemanticsIssue).unwrap();
        assert_eq!(json, "\"semantics-issue\"");
    }

    #[test]
    fn test_performance_flags_any() {
        let flags = PerformanceFlags::default();
        assert!(flags.is_empty());
        assert!(!flags.any());

        let flags = PerformanceFlags { deep_nesting: true, ..Default::default() };
        assert!(flags.any());
        assert!(!flags.is_empty());
    }

    #[test]
    fn test_annotate_appends_across_analyzers() {
        // A div that is both non-semantic (anti-pattern) and carries an
        // onclick without a role (accessibility): both findings must land.
        let mut root = DomNode::element("div");
        root.add_attribute("class", "nav-bar");
        root.add_attribute("onclick", "open()");

        annotate(&mut root);

        let kinds: Vec<IssueKind> = root.issues.iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&IssueKind::MissingRole));
        assert!(kinds.contains(&IssueKind::SemanticsIssue));
    }

    #[test]
    fn test_annotate_skips_non_elements() {
        let mut root = DomNode::element("p");
        root.add_child(DomNode::text("onclick mention in text"));

        annotate(&mut root);

        assert!(root.children[0].issues.is_empty());
        assert!(root.children[0].performance.is_empty());
    }
}
