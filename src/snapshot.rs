//! Bookmarks and named snapshots
//!
//! Both are references to a node-at-a-point-in-time, not live node handles:
//! they store the node's ordinal path and id and must be re-resolved against
//! a current tree. Resolution tries the path first (stable across
//! re-extractions of an unchanged document) and falls back to the id; if the
//! tree has changed shape, resolution quietly returns `None`.
//!
//! The stores are in-memory ordered registries; durable persistence is left
//! to whatever key-value collaborator embeds this crate.

use crate::dom::{DomNode, DomSnapshot, DomTreeStats, generate_node_id};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as epoch milliseconds
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// A user-created reference to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub node_id: String,
    pub path: String,
    pub name: String,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Bookmark {
    /// Create a bookmark pointing at a node
    pub fn for_node(node: &DomNode, name: impl Into<String>) -> Self {
        Self {
            id: generate_node_id(),
            node_id: node.id.clone(),
            path: node.path.clone(),
            name: name.into(),
            timestamp: now_millis(),
            notes: None,
        }
    }

    /// Builder method: attach a note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Re-resolve against a current tree: path first, then id.
    /// Returns `None` silently when the tree no longer has this node.
    pub fn resolve<'a>(&self, root: &'a DomNode) -> Option<&'a DomNode> {
        root.find_by_path(&self.path)
            .or_else(|| root.find_by_id(&self.node_id))
    }
}

/// A named, timestamped capture of a whole tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub name: String,
    pub timestamp: u64,
    pub root: DomNode,
    pub stats: DomTreeStats,
}

impl Snapshot {
    /// Capture a snapshot under a name
    pub fn new(name: impl Into<String>, snapshot: &DomSnapshot) -> Self {
        Self {
            id: generate_node_id(),
            name: name.into(),
            timestamp: now_millis(),
            root: snapshot.root.clone(),
            stats: snapshot.stats.clone(),
        }
    }
}

/// Ordered registry of bookmarks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkStore {
    map: IndexMap<String, Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bookmark and return its id
    pub fn add(&mut self, bookmark: Bookmark) -> String {
        let id = bookmark.id.clone();
        self.map.insert(id.clone(), bookmark);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        self.map.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Bookmark> {
        self.map.shift_remove(id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.map.values()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

/// Ordered registry of snapshots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotStore {
    map: IndexMap<String, Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a snapshot and return its id
    pub fn add(&mut self, snapshot: Snapshot) -> String {
        let id = snapshot.id.clone();
        self.map.insert(id.clone(), snapshot);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Snapshot> {
        self.map.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Snapshot> {
        self.map.shift_remove(id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.map.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ExtractOptions, extract_from_html};

    fn snapshot(html: &str) -> DomSnapshot {
        extract_from_html(html, &ExtractOptions::default()).unwrap()
    }

    #[test]
    fn test_bookmark_resolves_by_path() {
        let snap = snapshot("<html><body><p id=\"x\">hi</p></body></html>");
        let p = snap.find_node_by_path("/0/1/0").unwrap();
        let bookmark = Bookmark::for_node(p, "my paragraph");

        let resolved = bookmark.resolve(&snap.root).unwrap();
        assert!(resolved.is_tag("p"));
    }

    #[test]
    fn test_bookmark_survives_reextraction_of_same_document() {
        // ids change across passes, but the ordinal path stays stable
        let html = "<html><body><div><p>hi</p></div></body></html>";
        let first = snapshot(html);
        let second = snapshot(html);

        let p = first.find_node_by_path("/0/1/0/0").unwrap();
        let bookmark = Bookmark::for_node(p, "p");

        let resolved = bookmark.resolve(&second.root).unwrap();
        assert!(resolved.is_tag("p"));
        assert_ne!(resolved.id, p.id);
    }

    #[test]
    fn test_bookmark_resolution_fails_silently() {
        let first = snapshot("<html><body><div><p>hi</p></div></body></html>");
        let changed = snapshot("<html><body></body></html>");

        let p = first.find_node_by_path("/0/1/0/0").unwrap();
        let bookmark = Bookmark::for_node(p, "p");

        assert!(bookmark.resolve(&changed.root).is_none());
    }

    #[test]
    fn test_bookmark_store_order_and_removal() {
        let snap = snapshot("<html><body><p>a</p><p>b</p></body></html>");
        let body = snap.find_node_by_path("/0/1").unwrap();

        let mut store = BookmarkStore::new();
        let first = store.add(Bookmark::for_node(&body.children[0], "first"));
        let second = store.add(Bookmark::for_node(&body.children[1], "second"));

        assert_eq!(store.len(), 2);
        let names: Vec<&str> = store.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);

        assert!(store.remove(&first).is_some());
        assert!(store.get(&first).is_none());
        assert!(store.get(&second).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_store() {
        let snap = snapshot("<html><body><p>hi</p></body></html>");
        let mut store = SnapshotStore::new();

        let id = store.add(Snapshot::new("before change", &snap));

        let stored = store.get(&id).unwrap();
        assert_eq!(stored.name, "before change");
        assert_eq!(stored.stats.total_nodes, snap.stats.total_nodes);
        assert!(stored.timestamp > 0);
    }

    #[test]
    fn test_bookmark_serde_roundtrip() {
        let snap = snapshot("<html><body><p>hi</p></body></html>");
        let p = snap.find_node_by_path("/0/1/0").unwrap();
        let bookmark = Bookmark::for_node(p, "note").with_notes("check this");

        let json = serde_json::to_string(&bookmark).unwrap();
        assert!(json.contains("\"nodeId\""));
        let back: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(bookmark, back);
    }
}
