use crate::error::{InspectorError, Result};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for getting the DOM tree (none needed)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetDomTreeParams {}

/// Extract a fresh snapshot and return the tree plus its statistics
#[derive(Default)]
pub struct GetDomTreeTool;

impl Tool for GetDomTreeTool {
    type Params = GetDomTreeParams;

    fn name(&self) -> &str {
        "get_dom_tree"
    }

    fn execute_typed(
        &self,
        _params: GetDomTreeParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        let snapshot = context.inspector.capture()?;

        let dom_tree = serde_json::to_value(&snapshot.root)
            .map_err(|e| InspectorError::SerializeFailed(e.to_string()))?;
        let stats = serde_json::to_value(&snapshot.stats)
            .map_err(|e| InspectorError::SerializeFailed(e.to_string()))?;

        Ok(ToolResult::success_with(serde_json::json!({
            "domTree": dom_tree,
            "stats": stats,
        })))
    }
}
