use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for searching the current snapshot
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchNodesParams {
    /// Case-insensitive substring to look for
    pub query: String,
}

/// Search tag names, attributes and text content of the current snapshot
#[derive(Default)]
pub struct SearchNodesTool;

impl Tool for SearchNodesTool {
    type Params = SearchNodesParams;

    fn name(&self) -> &str {
        "search_nodes"
    }

    fn execute_typed(
        &self,
        params: SearchNodesParams,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        let hits = context.inspector.search(&params.query)?;

        let results: Vec<serde_json::Value> = hits
            .iter()
            .map(|hit| {
                serde_json::json!({
                    "id": hit.node.id,
                    "path": hit.node.path,
                    "tagName": hit.node.tag_name,
                    "matchKind": hit.kind,
                    "matched": hit.matched,
                })
            })
            .collect();

        Ok(ToolResult::success_with(serde_json::json!({
            "count": results.len(),
            "results": results,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::Inspector;

    fn context_with_page(inspector: &mut Inspector) -> ToolContext<'_> {
        inspector
            .load_html("<html><body><div id=\"app\"><p>hello world</p></div></body></html>")
            .unwrap();
        inspector.capture().unwrap();
        ToolContext::new(inspector)
    }

    #[test]
    fn test_search_returns_ordered_results() {
        let mut inspector = Inspector::new();
        let mut context = context_with_page(&mut inspector);

        let result = SearchNodesTool
            .execute_typed(SearchNodesParams { query: "hello".to_string() }, &mut context)
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["count"], 1);
        assert_eq!(data["results"][0]["matchKind"], "textContent");
    }

    #[test]
    fn test_empty_query_finds_nothing() {
        let mut inspector = Inspector::new();
        let mut context = context_with_page(&mut inspector);

        let result = SearchNodesTool
            .execute_typed(SearchNodesParams { query: "  ".to_string() }, &mut context)
            .unwrap();

        assert_eq!(result.data.unwrap()["count"], 0);
    }
}
