use crate::error::{InspectorError, Result};
use crate::query::TreeFilter;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for filtering the current snapshot
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterTreeParams {
    /// The filter specification; omitted options stay inactive
    #[serde(default)]
    pub filter: TreeFilter,
}

/// Apply a filter and return the pruned tree
#[derive(Default)]
pub struct FilterTreeTool;

impl Tool for FilterTreeTool {
    type Params = FilterTreeParams;

    fn name(&self) -> &str {
        "filter_tree"
    }

    fn execute_typed(
        &self,
        params: FilterTreeParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        let filtered = context.inspector.filter(&params.filter)?;

        let tree = match &filtered {
            Some(node) => serde_json::to_value(node)
                .map_err(|e| InspectorError::SerializeFailed(e.to_string()))?,
            None => serde_json::Value::Null,
        };

        Ok(ToolResult::success_with(serde_json::json!({
            "matched": filtered.is_some(),
            "tree": tree,
        })))
    }
}
