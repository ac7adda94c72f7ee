//! Request/response boundary
//!
//! Every operation a consumer can ask for is a [`Tool`]: a named action with
//! typed, schema-described parameters, dispatched by name on plain JSON
//! values through a [`ToolRegistry`]. This is the synchronous stand-in for
//! message passing: an embedding layer (RPC, HTTP, extension messaging) maps
//! its requests onto [`ToolRegistry::dispatch`] and ships the [`ToolResult`]
//! back, so every code path produces a response and no error crosses the
//! boundary as a panic.

pub mod bookmark;
pub mod explain;
pub mod export;
pub mod filter;
pub mod highlight;
pub mod search;
pub mod snapshot;
pub mod tree;

pub use bookmark::{AddBookmarkTool, ListBookmarksTool};
pub use explain::ExplainNodeTool;
pub use export::ExportDomTool;
pub use filter::FilterTreeTool;
pub use highlight::HighlightNodeTool;
pub use search::SearchNodesTool;
pub use snapshot::SaveSnapshotTool;
pub use tree::GetDomTreeTool;

use crate::error::{InspectorError, Result};
use crate::inspector::Inspector;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Mutable state shared with tools during execution
pub struct ToolContext<'a> {
    pub inspector: &'a mut Inspector,
}

impl<'a> ToolContext<'a> {
    pub fn new(inspector: &'a mut Inspector) -> Self {
        Self { inspector }
    }
}

/// Outcome of a tool execution, always serializable as a response object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    /// Successful result without payload
    pub fn success() -> Self {
        Self { success: true, data: None, error: None }
    }

    /// Successful result with payload
    pub fn success_with(data: serde_json::Value) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    /// Failed result with an error message
    pub fn error(message: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(message.into()) }
    }
}

/// A named operation with typed parameters
pub trait Tool {
    type Params: DeserializeOwned + JsonSchema;

    /// Action name used for dispatch
    fn name(&self) -> &str;

    /// Execute with already-deserialized parameters
    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext<'_>)
    -> Result<ToolResult>;

    /// JSON schema of the parameters
    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Self::Params))
            .unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Execute with raw JSON parameters
    fn execute(&self, params: serde_json::Value, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        let typed: Self::Params = serde_json::from_value(params).map_err(|e| {
            InspectorError::InvalidPayload(format!("bad parameters for {}: {e}", self.name()))
        })?;
        self.execute_typed(typed, context)
    }
}

/// Object-safe adapter over [`Tool`] so the registry can hold mixed tools
trait ErasedTool {
    fn name(&self) -> &str;
    fn schema(&self) -> serde_json::Value;
    fn run(&self, params: serde_json::Value, context: &mut ToolContext<'_>) -> Result<ToolResult>;
}

impl<T: Tool> ErasedTool for T {
    fn name(&self) -> &str {
        Tool::name(self)
    }

    fn schema(&self) -> serde_json::Value {
        self.parameters_schema()
    }

    fn run(&self, params: serde_json::Value, context: &mut ToolContext<'_>) -> Result<ToolResult> {
        self.execute(params, context)
    }
}

/// Registry dispatching actions by name
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn ErasedTool>>,
}

impl ToolRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self { tools: IndexMap::new() }
    }

    /// Registry with every built-in tool registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GetDomTreeTool);
        registry.register(HighlightNodeTool);
        registry.register(SearchNodesTool);
        registry.register(FilterTreeTool);
        registry.register(ExportDomTool);
        registry.register(ExplainNodeTool);
        registry.register(SaveSnapshotTool);
        registry.register(AddBookmarkTool);
        registry.register(ListBookmarksTool);
        registry
    }

    /// Register a tool under its own name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(Tool::name(&tool).to_string(), Box::new(tool));
    }

    /// Execute a tool by name. Unknown names are an error.
    pub fn execute(
        &self,
        name: &str,
        params: serde_json::Value,
        context: &mut ToolContext<'_>,
    ) -> Result<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| InspectorError::Communication(format!("unknown action: {name}")))?;
        tool.run(params, context)
    }

    /// Execute a tool by name, folding every failure into the result object.
    /// This is the boundary entry point: it always produces a response.
    pub fn dispatch(
        &self,
        name: &str,
        params: serde_json::Value,
        context: &mut ToolContext<'_>,
    ) -> ToolResult {
        match self.execute(name, params, context) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("action {name} failed: {err}");
                ToolResult::error(err.to_string())
            }
        }
    }

    /// Parameter schema for a registered tool
    pub fn parameters_schema(&self, name: &str) -> Option<serde_json::Value> {
        self.tools.get(name).map(|t| t.schema())
    }

    /// Registered tool names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
