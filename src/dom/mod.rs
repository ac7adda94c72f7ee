//! Snapshot model and extraction
//!
//! This module turns a parsed HTML document into an immutable snapshot tree:
//! - [`DomNode`]: one node of the snapshot (element, text, comment, other)
//! - [`DomSnapshot`]: the extracted tree plus stats and an id index
//! - [`ExtractOptions`]: extraction knobs (depth cap)
//! - [`path`]: ordinal-path / XPath / CSS-selector builders
//! - [`stats`]: single-pass tree statistics

pub mod extract;
pub mod node;
pub mod path;
pub mod stats;

pub use extract::{DEFAULT_MAX_DEPTH, DomSnapshot, ExtractOptions, generate_node_id};
pub use node::{DomNode, NodeKind};
pub use stats::DomTreeStats;

use crate::error::{InspectorError, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;

/// Parse an HTML string into a document tree.
///
/// html5ever recovers from malformed markup the way browsers do, so this
/// only fails when the input cannot be read at all.
pub fn parse_html(html: &str) -> Result<RcDom> {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| InspectorError::ParseFailed(e.to_string()))
}

/// Parse and extract in one step
pub fn extract_from_html(html: &str, options: &ExtractOptions) -> Result<DomSnapshot> {
    let dom = parse_html(html)?;
    DomSnapshot::capture(&dom, options)
}
