use crate::error::{InspectorError, Result};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for bookmarking a node
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddBookmarkParams {
    /// Snapshot id of the node to bookmark
    pub node_id: String,

    /// Display name for the bookmark
    pub name: String,

    /// Optional free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Bookmark a node of the current snapshot
#[derive(Default)]
pub struct AddBookmarkTool;

impl Tool for AddBookmarkTool {
    type Params = AddBookmarkParams;

    fn name(&self) -> &str {
        "add_bookmark"
    }

    fn execute_typed(
        &self,
        params: AddBookmarkParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        let bookmark =
            context.inspector.bookmark_node(&params.node_id, &params.name, params.notes)?;

        let payload = serde_json::to_value(&bookmark)
            .map_err(|e| InspectorError::SerializeFailed(e.to_string()))?;
        Ok(ToolResult::success_with(payload))
    }
}

/// Parameters for listing bookmarks (none needed)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBookmarksParams {}

/// List all bookmarks in creation order
#[derive(Default)]
pub struct ListBookmarksTool;

impl Tool for ListBookmarksTool {
    type Params = ListBookmarksParams;

    fn name(&self) -> &str {
        "list_bookmarks"
    }

    fn execute_typed(
        &self,
        _params: ListBookmarksParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        let bookmarks: Vec<serde_json::Value> = context
            .inspector
            .bookmarks()
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| InspectorError::SerializeFailed(e.to_string()))?;

        Ok(ToolResult::success_with(serde_json::json!({
            "count": bookmarks.len(),
            "bookmarks": bookmarks,
        })))
    }
}
