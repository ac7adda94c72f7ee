use crate::analysis;
use crate::dom::node::style_declarations;
use crate::dom::path::{ROOT_PATH, child_path, child_xpath, css_selector, root_xpath};
use crate::dom::stats::DomTreeStats;
use crate::dom::DomNode;
use crate::error::{InspectorError, Result};
use indexmap::IndexMap;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default recursion cap for extraction
pub const DEFAULT_MAX_DEPTH: usize = 50;

const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Allocate a fresh node identifier: a random base-36 token.
///
/// Unique within one extraction pass for any realistic tree size; no
/// registry, no cross-snapshot guarantee.
pub fn generate_node_id() -> String {
    let mut rng = rand::thread_rng();
    let token: String = (0..9)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect();
    format!("dominator-{token}")
}

/// Options controlling extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Depth at which recursion stops; deeper descendants are omitted
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the recursion cap
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// An extracted snapshot: the node tree, its statistics, and an id index
/// for re-lookup.
///
/// The id index is the snapshot-side equivalent of stamping a back-reference
/// attribute onto live elements: it maps each assigned node id to the node's
/// ordinal path without mutating the input document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomSnapshot {
    /// Root of the snapshot tree
    pub root: DomNode,

    /// Statistics over the whole tree
    pub stats: DomTreeStats,

    #[serde(default)]
    ids: IndexMap<String, String>,
}

impl DomSnapshot {
    /// Extract a snapshot from a parsed document.
    ///
    /// The extraction root is the document's first element child
    /// (conventionally `html`); doctype and processing-instruction nodes
    /// above it are skipped.
    pub fn capture(dom: &RcDom, options: &ExtractOptions) -> Result<Self> {
        let children = dom.document.children.try_borrow().map_err(|e| {
            InspectorError::NodeAccess { path: ROOT_PATH.to_string(), reason: e.to_string() }
        })?;

        let root = children
            .iter()
            .find(|child| element_tag(child).is_some())
            .cloned()
            .ok_or_else(|| {
                InspectorError::DocumentUnavailable("document has no root element".to_string())
            })?;
        drop(children);

        Self::capture_element(&root, options)
    }

    /// Extract a snapshot rooted at a specific element handle
    pub fn capture_element(root: &Handle, options: &ExtractOptions) -> Result<Self> {
        if element_tag(root).is_none() {
            return Err(InspectorError::DocumentUnavailable(
                "extraction root is not an element".to_string(),
            ));
        }

        let mut walker = Walker { options, ids: IndexMap::new() };
        let mut node = walker
            .extract_node(root, 0, ROOT_PATH.to_string(), None, 1)
            .ok_or_else(|| {
                InspectorError::DocumentUnavailable("extraction produced no root".to_string())
            })?;

        analysis::annotate(&mut node);
        let stats = DomTreeStats::collect(&node);

        log::debug!(
            "extracted snapshot: {} nodes, max depth {}",
            stats.total_nodes,
            stats.max_depth
        );

        Ok(Self { root: node, stats, ids: walker.ids })
    }

    /// Look up a node by its snapshot id, using the id index first
    pub fn find_node_by_id(&self, id: &str) -> Option<&DomNode> {
        match self.ids.get(id) {
            Some(path) => self.root.find_by_path(path),
            None => self.root.find_by_id(id),
        }
    }

    /// Look up a node by its ordinal path
    pub fn find_node_by_path(&self, path: &str) -> Option<&DomNode> {
        self.root.find_by_path(path)
    }

    /// The id → path index built during extraction
    pub fn id_index(&self) -> &IndexMap<String, String> {
        &self.ids
    }

    /// Total node count (from the stats pass)
    pub fn node_count(&self) -> usize {
        self.stats.total_nodes
    }
}

/// Parent context threaded down while walking
struct ParentInfo<'a> {
    xpath: &'a str,
    css: &'a str,
    tag: &'a str,
}

struct Walker<'a> {
    options: &'a ExtractOptions,
    ids: IndexMap<String, String>,
}

impl Walker<'_> {
    /// Extract one node. Returns `None` for node kinds the snapshot omits
    /// (doctype, processing instructions); failures on a single node degrade
    /// to a sentinel node so the rest of the tree survives.
    fn extract_node(
        &mut self,
        handle: &Handle,
        depth: usize,
        path: String,
        parent: Option<&ParentInfo<'_>>,
        position: usize,
    ) -> Option<DomNode> {
        let mut node = match &handle.data {
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref().to_ascii_lowercase();
                match self.extract_element(handle, &tag, depth, &path, parent, position) {
                    Ok(node) => node,
                    Err(err) => {
                        log::debug!("node at {path} unreadable: {err}");
                        DomNode::sentinel(depth, path.as_str(), err.to_string())
                    }
                }
            }
            NodeData::Text { contents } => match contents.try_borrow() {
                Ok(text) => DomNode::text(text.trim()),
                Err(err) => {
                    log::debug!("text node at {path} unreadable: {err}");
                    DomNode::sentinel(depth, path.as_str(), err.to_string())
                }
            },
            NodeData::Comment { contents } => DomNode::comment(contents.to_string()),
            NodeData::Document
            | NodeData::Doctype { .. }
            | NodeData::ProcessingInstruction { .. } => return None,
        };

        node.depth = depth;
        node.path = path;
        if node.id.is_empty() {
            node.id = generate_node_id();
        }
        self.ids.insert(node.id.clone(), node.path.clone());

        Some(node)
    }

    fn extract_element(
        &mut self,
        handle: &Handle,
        tag: &str,
        depth: usize,
        path: &str,
        parent: Option<&ParentInfo<'_>>,
        position: usize,
    ) -> Result<DomNode> {
        let attributes = element_attributes(handle, path)?;

        let xpath = match parent {
            Some(info) => child_xpath(info.xpath, tag, position),
            None => root_xpath(tag),
        };
        let css = css_selector(
            tag,
            attributes.get("id").map(String::as_str),
            attributes.get("class").map(String::as_str),
            parent.map(|info| (info.css, info.tag)),
        );
        let visible = !is_statically_hidden(tag, &attributes);

        // Recursion stops strictly at the cap: a node sitting at max_depth
        // keeps none of its descendants.
        let mut children = Vec::new();
        if depth < self.options.max_depth {
            let child_handles = handle.children.try_borrow().map_err(|e| {
                InspectorError::NodeAccess { path: path.to_string(), reason: e.to_string() }
            })?;

            let info = ParentInfo { xpath: &xpath, css: &css, tag };
            let mut tag_counts: HashMap<String, usize> = HashMap::new();

            for (index, child) in child_handles.iter().enumerate() {
                let child_position = match element_tag(child) {
                    Some(child_tag) => {
                        let count = tag_counts.entry(child_tag).or_insert(0);
                        *count += 1;
                        *count
                    }
                    None => 0,
                };

                if let Some(node) = self.extract_node(
                    child,
                    depth + 1,
                    child_path(path, index),
                    Some(&info),
                    child_position,
                ) {
                    children.push(node);
                }
            }
        }

        let mut node = DomNode::element(tag)
            .with_attributes(attributes)
            .with_children(children)
            .with_visibility(visible);
        node.xpath = Some(xpath);
        node.css_selector = Some(css);

        Ok(node)
    }
}

fn element_tag(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref().to_ascii_lowercase()),
        _ => None,
    }
}

fn element_attributes(handle: &Handle, path: &str) -> Result<IndexMap<String, String>> {
    let NodeData::Element { attrs, .. } = &handle.data else {
        return Ok(IndexMap::new());
    };

    let attrs = attrs.try_borrow().map_err(|e| InspectorError::NodeAccess {
        path: path.to_string(),
        reason: format!("attributes unavailable: {e}"),
    })?;

    Ok(attrs
        .iter()
        .map(|attr| (attr.name.local.as_ref().to_string(), attr.value.to_string()))
        .collect())
}

/// Static stand-in for the computed-style visibility check: inline style and
/// the `hidden` attribute are all a snapshot can see.
fn is_statically_hidden(tag: &str, attributes: &IndexMap<String, String>) -> bool {
    if attributes.contains_key("hidden") {
        return true;
    }

    if tag == "input" && attributes.get("type").map(String::as_str) == Some("hidden") {
        return true;
    }

    if let Some(style) = attributes.get("style") {
        return style_declarations(style).iter().any(|(prop, value)| {
            matches!(
                (prop.as_str(), value.as_str()),
                ("display", "none") | ("visibility", "hidden") | ("opacity", "0")
            )
        });
    }

    false
}
