use crate::error::Result;
use crate::export::{ExportFormat, JsonExportOptions, export_file_name};
use crate::snapshot::now_millis;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for exporting the current snapshot
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportDomParams {
    /// Output format; falls back to the session's default export format
    #[serde(default)]
    pub format: Option<ExportFormat>,

    /// Include snapshot-local identifiers in JSON output
    #[serde(default)]
    pub include_ids: bool,
}

/// Render the current snapshot and suggest a download file name
#[derive(Default)]
pub struct ExportDomTool;

impl Tool for ExportDomTool {
    type Params = ExportDomParams;

    fn name(&self) -> &str {
        "export_dom"
    }

    fn execute_typed(
        &self,
        params: ExportDomParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        let format = params
            .format
            .unwrap_or(context.inspector.settings().default_export_format);

        let content = context
            .inspector
            .export(format, JsonExportOptions { include_ids: params.include_ids })?;

        Ok(ToolResult::success_with(serde_json::json!({
            "content": content,
            "suggestedFileName": export_file_name(format, now_millis()),
        })))
    }
}
