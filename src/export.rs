//! Export serializers
//!
//! Two renderings of a snapshot tree: pretty-printed JSON (the full node
//! record, or a simplified form without snapshot-local identifiers) and an
//! indented pseudo-HTML text form. The text form is a debugging aid: nothing
//! is escaped and it is not meant to round-trip as valid markup.

use crate::dom::{DomNode, NodeKind};
use crate::error::{InspectorError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Supported export formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
}

impl ExportFormat {
    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

/// Options for JSON export
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonExportOptions {
    /// Include snapshot-local identifiers (ids, paths, derived selectors).
    /// When false, only the structural clone is emitted: tags, attributes,
    /// text and children.
    pub include_ids: bool,
}

/// Serialize a tree to pretty-printed JSON with stable key order
pub fn to_json(node: &DomNode, options: JsonExportOptions) -> Result<String> {
    let result = if options.include_ids {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string_pretty(&SimplifiedNode::from(node))
    };
    result.map_err(|e| InspectorError::SerializeFailed(e.to_string()))
}

/// Render a tree as indented pseudo-HTML
pub fn to_text(node: &DomNode) -> String {
    let mut out = String::new();
    write_text(node, 0, &mut out);
    out
}

/// Suggested file name for a download of the given format
pub fn export_file_name(format: ExportFormat, timestamp_ms: u64) -> String {
    format!("dominator-export-{timestamp_ms}.{}", format.extension())
}

/// Structural clone used by the simplified JSON form; field order is the
/// emitted key order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimplifiedNode<'a> {
    kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: &'a IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_content: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<SimplifiedNode<'a>>,
}

impl<'a> From<&'a DomNode> for SimplifiedNode<'a> {
    fn from(node: &'a DomNode) -> Self {
        Self {
            kind: node.kind,
            tag: node.tag_name.as_deref(),
            attributes: &node.attributes,
            text_content: node.text_content.as_deref(),
            children: node.children.iter().map(SimplifiedNode::from).collect(),
        }
    }
}

fn write_text(node: &DomNode, indentation: usize, out: &mut String) {
    let indent = "  ".repeat(indentation);

    match node.kind {
        NodeKind::Element => {
            let tag = node.tag_name.as_deref().unwrap_or("unknown");
            out.push_str(&indent);
            out.push('<');
            out.push_str(tag);
            for (name, value) in &node.attributes {
                out.push_str(&format!(" {name}=\"{value}\""));
            }

            if node.children.is_empty() {
                out.push_str(" />\n");
            } else {
                out.push_str(">\n");
                for child in &node.children {
                    write_text(child, indentation + 1, out);
                }
                out.push_str(&format!("{indent}</{tag}>\n"));
            }
        }
        NodeKind::Text => {
            if let Some(text) = node.text_content.as_deref().map(str::trim) {
                if !text.is_empty() {
                    out.push_str(&format!("{indent}{text}\n"));
                }
            }
        }
        NodeKind::Comment => {
            let text = node.text_content.as_deref().unwrap_or("");
            out.push_str(&format!("{indent}<!-- {} -->\n", text.trim()));
        }
        NodeKind::Other => {}
    }
}
