use crate::error::{InspectorError, Result};
use crate::explain::explain_node;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for explaining a node; one of `node_id` or `path` is required
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainNodeParams {
    #[serde(default)]
    pub node_id: Option<String>,

    #[serde(default)]
    pub path: Option<String>,
}

/// Produce the deterministic explanation and suggestions for a node
#[derive(Default)]
pub struct ExplainNodeTool;

impl Tool for ExplainNodeTool {
    type Params = ExplainNodeParams;

    fn name(&self) -> &str {
        "explain_node"
    }

    fn execute_typed(
        &self,
        params: ExplainNodeParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        let node = match (&params.node_id, &params.path) {
            (Some(id), _) => context.inspector.node_by_id(id),
            (None, Some(path)) => context.inspector.node_by_path(path),
            (None, None) => {
                return Err(InspectorError::InvalidPayload(
                    "explain_node needs nodeId or path".to_string(),
                ));
            }
        };

        let node = node.ok_or_else(|| {
            InspectorError::InvalidPayload("node not found in current snapshot".to_string())
        })?;

        let explanation = explain_node(node);
        let payload = serde_json::to_value(&explanation)
            .map_err(|e| InspectorError::SerializeFailed(e.to_string()))?;

        Ok(ToolResult::success_with(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::Inspector;

    fn inspector_with_page() -> Inspector {
        let mut inspector = Inspector::new();
        inspector
            .load_html("<html><body><img src=\"x.png\"></body></html>")
            .unwrap();
        inspector.capture().unwrap();
        inspector
    }

    #[test]
    fn test_explain_by_id() {
        let mut inspector = inspector_with_page();
        let img_id = inspector.search("img").unwrap()[0].node.id.clone();
        let mut context = ToolContext::new(&mut inspector);

        let result = ExplainNodeTool
            .execute_typed(
                ExplainNodeParams { node_id: Some(img_id), path: None },
                &mut context,
            )
            .unwrap();

        let data = result.data.unwrap();
        assert!(data["explanation"].as_str().unwrap().contains("image element"));
        assert!(!data["suggestions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_explain_by_path() {
        let mut inspector = inspector_with_page();
        let mut context = ToolContext::new(&mut inspector);

        let result = ExplainNodeTool
            .execute_typed(
                ExplainNodeParams { node_id: None, path: Some("/0/1/0".to_string()) },
                &mut context,
            )
            .unwrap();

        assert!(result.success);
    }

    #[test]
    fn test_explain_requires_a_selector() {
        let mut inspector = inspector_with_page();
        let mut context = ToolContext::new(&mut inspector);

        let err = ExplainNodeTool
            .execute_typed(ExplainNodeParams { node_id: None, path: None }, &mut context)
            .unwrap_err();
        assert!(matches!(err, InspectorError::InvalidPayload(_)));
    }

    #[test]
    fn test_explain_unknown_node() {
        let mut inspector = inspector_with_page();
        let mut context = ToolContext::new(&mut inspector);

        let err = ExplainNodeTool
            .execute_typed(
                ExplainNodeParams { node_id: Some("dominator-gone0000".to_string()), path: None },
                &mut context,
            )
            .unwrap_err();
        assert!(matches!(err, InspectorError::InvalidPayload(_)));
    }
}
