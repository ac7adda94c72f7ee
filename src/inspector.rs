use crate::dom::{self, DomNode, DomSnapshot, DomTreeStats, ExtractOptions};
use crate::error::{InspectorError, Result};
use crate::explain::{Explanation, explain_node};
use crate::export::{self, ExportFormat, JsonExportOptions};
use crate::query::{SearchHit, TreeFilter, filter_tree, search};
use crate::settings::AppSettings;
use crate::snapshot::{Bookmark, BookmarkStore, Snapshot, SnapshotStore};
use markup5ever_rcdom::RcDom;

/// Inspection session: owns the parsed document, the current snapshot and
/// the user's bookmarks, saved snapshots and settings.
///
/// There is no ambient global state; everything an operation needs travels
/// through this context object.
pub struct Inspector {
    document: Option<RcDom>,
    options: ExtractOptions,
    settings: AppSettings,
    snapshot: Option<DomSnapshot>,
    bookmarks: BookmarkStore,
    snapshots: SnapshotStore,
}

impl Inspector {
    /// Create a session with default options and no document
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create a session with specific extraction options
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            document: None,
            options,
            settings: AppSettings::default(),
            snapshot: None,
            bookmarks: BookmarkStore::new(),
            snapshots: SnapshotStore::new(),
        }
    }

    /// Parse and load an HTML document, invalidating any previous snapshot
    pub fn load_html(&mut self, html: &str) -> Result<()> {
        let dom = dom::parse_html(html)?;
        self.document = Some(dom);
        self.snapshot = None;
        Ok(())
    }

    /// Whether a document is loaded
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Extract a fresh snapshot from the loaded document
    pub fn capture(&mut self) -> Result<&DomSnapshot> {
        let dom = self.document.as_ref().ok_or_else(|| {
            InspectorError::DocumentUnavailable("no document loaded".to_string())
        })?;

        let snapshot = DomSnapshot::capture(dom, &self.options)?;
        Ok(self.snapshot.insert(snapshot))
    }

    /// The current snapshot, capturing one first if needed
    pub fn ensure_snapshot(&mut self) -> Result<&DomSnapshot> {
        if self.snapshot.is_none() {
            self.capture()?;
        }
        self.snapshot.as_ref().ok_or_else(|| {
            InspectorError::DocumentUnavailable("no snapshot available".to_string())
        })
    }

    /// The current snapshot, if one has been captured
    pub fn snapshot(&self) -> Option<&DomSnapshot> {
        self.snapshot.as_ref()
    }

    /// Stats of the current snapshot
    pub fn stats(&self) -> Option<&DomTreeStats> {
        self.snapshot.as_ref().map(|s| &s.stats)
    }

    fn current(&self) -> Result<&DomSnapshot> {
        self.snapshot.as_ref().ok_or_else(|| {
            InspectorError::DocumentUnavailable("no snapshot captured".to_string())
        })
    }

    /// Find a node in the current snapshot by id
    pub fn node_by_id(&self, id: &str) -> Option<&DomNode> {
        self.snapshot.as_ref().and_then(|s| s.find_node_by_id(id))
    }

    /// Find a node in the current snapshot by ordinal path
    pub fn node_by_path(&self, path: &str) -> Option<&DomNode> {
        self.snapshot.as_ref().and_then(|s| s.find_node_by_path(path))
    }

    /// Search the current snapshot
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit<'_>>> {
        Ok(search(&self.current()?.root, query))
    }

    /// Filter the current snapshot; `None` when nothing survives
    pub fn filter(&self, filter: &TreeFilter) -> Result<Option<DomNode>> {
        Ok(filter_tree(&self.current()?.root, filter))
    }

    /// Export the current snapshot in the given format
    pub fn export(&self, format: ExportFormat, options: JsonExportOptions) -> Result<String> {
        let snapshot = self.current()?;
        match format {
            ExportFormat::Json => export::to_json(&snapshot.root, options),
            ExportFormat::Text => Ok(export::to_text(&snapshot.root)),
        }
    }

    /// Explain a node of the current snapshot
    pub fn explain(&self, node_id: &str) -> Result<Explanation> {
        let node = self.node_by_id(node_id).ok_or_else(|| {
            InspectorError::InvalidPayload(format!("no node with id {node_id}"))
        })?;
        Ok(explain_node(node))
    }

    /// Bookmark a node of the current snapshot
    pub fn bookmark_node(
        &mut self,
        node_id: &str,
        name: &str,
        notes: Option<String>,
    ) -> Result<Bookmark> {
        let node = self.node_by_id(node_id).ok_or_else(|| {
            InspectorError::InvalidPayload(format!("no node with id {node_id}"))
        })?;

        let mut bookmark = Bookmark::for_node(node, name);
        if let Some(notes) = notes {
            bookmark = bookmark.with_notes(notes);
        }

        self.bookmarks.add(bookmark.clone());
        Ok(bookmark)
    }

    /// Save the current snapshot under a name, returning the stored id
    pub fn save_snapshot(&mut self, name: &str) -> Result<String> {
        let snapshot = self.current()?;
        let stored = Snapshot::new(name, snapshot);
        Ok(self.snapshots.add(stored))
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn bookmarks_mut(&mut self) -> &mut BookmarkStore {
        &mut self.bookmarks
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}
