//! # dominator
//!
//! A DOM snapshot inspector. Parse an HTML document, extract an immutable
//! snapshot of its tree, and work with the snapshot: statistics, static
//! accessibility/performance findings, filtering, searching, exports and
//! deterministic node explanations.
//!
//! ## Features
//!
//! - **Snapshot extraction**: depth-capped tree capture with ordinal paths,
//!   structural XPaths and CSS selectors computed per element
//! - **Analyzers**: accessibility, performance and anti-pattern heuristics
//!   attached to nodes during capture
//! - **Filter & search**: ancestor-preserving tree filtering and pre-order
//!   substring search
//! - **Tool boundary**: every operation is also exposed as a named action
//!   dispatched on JSON params, for embedding behind any transport
//!
//! ## Quick start
//!
//! ```rust
//! use dominator::Inspector;
//!
//! # fn main() -> dominator::Result<()> {
//! let mut inspector = Inspector::new();
//! inspector.load_html("<html><body><img><p>hello</p></body></html>")?;
//!
//! let snapshot = inspector.capture()?;
//! println!("{} nodes, {} issues", snapshot.stats.total_nodes, snapshot.stats.accessibility_issues);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the tool boundary
//!
//! ```rust
//! use dominator::Inspector;
//! use dominator::tools::{ToolContext, ToolRegistry};
//! use serde_json::json;
//!
//! # fn main() -> dominator::Result<()> {
//! let mut inspector = Inspector::new();
//! inspector.load_html("<html><body><p>hi</p></body></html>")?;
//!
//! let registry = ToolRegistry::with_defaults();
//! let mut context = ToolContext::new(&mut inspector);
//!
//! let response = registry.dispatch("get_dom_tree", json!({}), &mut context);
//! assert!(response.success);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module overview
//!
//! - [`dom`]: snapshot model, extraction, paths, stats
//! - [`analysis`]: issue taxonomy and the three analyzers
//! - [`query`]: filter and search engines
//! - [`export`]: JSON/text serializers
//! - [`explain`]: deterministic node explanations
//! - [`snapshot`]: bookmarks and named snapshots
//! - [`inspector`]: the session object
//! - [`tools`]: the request/response boundary
//! - [`error`]: error types and result alias

pub mod analysis;
pub mod dom;
pub mod error;
pub mod explain;
pub mod export;
pub mod inspector;
pub mod query;
pub mod settings;
pub mod snapshot;
pub mod tools;

pub use analysis::{Issue, IssueKind, PerformanceFlags, Severity};
pub use dom::{DomNode, DomSnapshot, DomTreeStats, ExtractOptions, NodeKind};
pub use error::{InspectorError, Result};
pub use explain::Explanation;
pub use export::{ExportFormat, JsonExportOptions};
pub use inspector::Inspector;
pub use query::{AttributePredicate, MatchKind, SearchHit, TreeFilter};
pub use settings::AppSettings;
pub use snapshot::{Bookmark, Snapshot};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};
