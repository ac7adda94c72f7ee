use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for highlighting a node
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HighlightNodeParams {
    /// Snapshot id of the node to highlight
    pub node_id: String,
}

/// Acknowledge a highlight request.
///
/// Rendering the highlight is the embedding layer's job; the core resolves
/// the node so stale ids get logged, and always acknowledges. A miss is not
/// an error: the consumer may be pointing at a previous snapshot.
#[derive(Default)]
pub struct HighlightNodeTool;

impl Tool for HighlightNodeTool {
    type Params = HighlightNodeParams;

    fn name(&self) -> &str {
        "highlight_node"
    }

    fn execute_typed(
        &self,
        params: HighlightNodeParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        if context.inspector.node_by_id(&params.node_id).is_none() {
            log::warn!("highlight requested for unknown node {}", params.node_id);
        }

        Ok(ToolResult::success_with(serde_json::json!({ "success": true })))
    }
}
