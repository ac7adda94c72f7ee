use crate::error::{InspectorError, Result};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for saving the current snapshot
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SaveSnapshotParams {
    /// Display name for the stored snapshot
    pub name: String,
}

/// Store the current snapshot under a name for later comparison
#[derive(Default)]
pub struct SaveSnapshotTool;

impl Tool for SaveSnapshotTool {
    type Params = SaveSnapshotParams;

    fn name(&self) -> &str {
        "save_snapshot"
    }

    fn execute_typed(
        &self,
        params: SaveSnapshotParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        context.inspector.ensure_snapshot()?;
        let id = context.inspector.save_snapshot(&params.name)?;

        let stored = context
            .inspector
            .snapshots()
            .get(&id)
            .ok_or_else(|| InspectorError::Communication("snapshot vanished".to_string()))?;
        let stats = serde_json::to_value(&stored.stats)
            .map_err(|e| InspectorError::SerializeFailed(e.to_string()))?;

        Ok(ToolResult::success_with(serde_json::json!({
            "id": id,
            "name": stored.name,
            "timestamp": stored.timestamp,
            "stats": stats,
        })))
    }
}
