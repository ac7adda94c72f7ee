use crate::dom::DomNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over one snapshot tree.
///
/// Always recomputed in full from a tree; never updated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomTreeStats {
    /// Total number of nodes in the tree
    pub total_nodes: usize,

    /// Deepest node depth observed (root is 0)
    pub max_depth: usize,

    /// Per-tag element counts, in first-seen order
    pub element_count: IndexMap<String, usize>,

    /// Elements that were hidden at extraction time
    pub hidden_elements: usize,

    /// Total number of issues attached by the analyzers
    pub accessibility_issues: usize,

    /// Number of nodes with at least one performance flag
    pub performance_issues: usize,
}

impl DomTreeStats {
    /// Single depth-first traversal; every node is visited exactly once.
    pub fn collect(root: &DomNode) -> Self {
        let mut stats = Self::default();
        stats.visit(root);
        stats
    }

    fn visit(&mut self, node: &DomNode) {
        self.total_nodes += 1;
        self.max_depth = self.max_depth.max(node.depth);

        if let Some(tag) = &node.tag_name {
            *self.element_count.entry(tag.clone()).or_insert(0) += 1;
        }

        if node.is_hidden() {
            self.hidden_elements += 1;
        }

        self.accessibility_issues += node.issues.len();

        if node.performance.any() {
            self.performance_issues += 1;
        }

        for child in &node.children {
            self.visit(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Issue, IssueKind, PerformanceFlags};

    #[test]
    fn test_collect_counts() {
        let mut root = DomNode::element("body");
        let mut div = DomNode::element("div").with_depth(1);
        div.add_child(DomNode::text("hi").with_depth(2));
        div.add_child(DomNode::element("div").with_depth(2).with_visibility(false));
        root.add_child(div);
        root.add_child(DomNode::element("p").with_depth(1));

        let stats = DomTreeStats::collect(&root);

        assert_eq!(stats.total_nodes, 5);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.element_count.get("div"), Some(&2));
        assert_eq!(stats.element_count.get("p"), Some(&1));
        assert_eq!(stats.element_count.get("body"), Some(&1));
        assert_eq!(stats.hidden_elements, 1);
    }

    #[test]
    fn test_issue_totals() {
        let mut root = DomNode::element("div");
        let mut img = DomNode::element("img").with_depth(1);
        img.issues.push(Issue::error(IssueKind::MissingAlt, "Image is missing alt text"));
        img.issues.push(Issue::warning(IssueKind::MissingRole, "role"));
        img.performance = PerformanceFlags { deep_nesting: true, ..Default::default() };
        root.add_child(img);

        let stats = DomTreeStats::collect(&root);

        assert_eq!(stats.accessibility_issues, 2);
        assert_eq!(stats.performance_issues, 1);
    }

    #[test]
    fn test_empty_root() {
        let stats = DomTreeStats::collect(&DomNode::element("html"));
        assert_eq!(stats.total_nodes, 1);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.hidden_elements, 0);
    }
}
