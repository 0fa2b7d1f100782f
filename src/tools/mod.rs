//! Tool system for driving a table of contents by name
//!
//! Each tool takes typed, JSON-schema described parameters and runs against a
//! [`ToolContext`] holding the document and the active configuration. The
//! [`ToolRegistry`] dispatches JSON parameters to tools by name.

pub mod build;
pub mod click;
pub mod render;

pub use build::{BuildTocParams, BuildTocTool};
pub use click::{TocClickParams, TocClickTool};
pub use render::{RenderFormat, RenderParams, RenderTool};

use crate::dom::DomTree;
use crate::error::{Result, TocError};
use crate::toc::TocConfig;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// State shared by tools during execution
pub struct ToolContext<'a> {
    /// Document the tools read and mutate
    pub document: &'a mut DomTree,

    /// Configuration in effect; `build_toc` overrides are kept for later tools
    pub config: TocConfig,
}

impl<'a> ToolContext<'a> {
    /// Create a context with the default configuration
    pub fn new(document: &'a mut DomTree) -> Self {
        Self::with_config(document, TocConfig::default())
    }

    /// Create a context with an explicit configuration
    pub fn with_config(document: &'a mut DomTree, config: TocConfig) -> Self {
        Self { document, config }
    }
}

/// Outcome of a tool execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success_with(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// A named operation with typed parameters
pub trait Tool: Send + Sync {
    type Params: DeserializeOwned + JsonSchema;

    fn name(&self) -> &str;

    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext) -> Result<ToolResult>;

    /// JSON schema of the parameters
    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or_default()
    }

    /// Deserialize JSON parameters and execute
    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let typed = serde_json::from_value(params).map_err(|e| {
            TocError::InvalidArgument(format!("Invalid parameters for '{}': {}", self.name(), e))
        })?;
        self.execute_typed(typed, context)
    }
}

/// Object-safe view of a [`Tool`], used by the registry
pub trait DynTool: Send + Sync {
    fn tool_name(&self) -> &str;

    fn schema(&self) -> Value;

    fn execute_json(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult>;
}

impl<T: Tool> DynTool for T {
    fn tool_name(&self) -> &str {
        self.name()
    }

    fn schema(&self) -> Value {
        self.parameters_schema()
    }

    fn execute_json(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        self.execute(params, context)
    }
}

/// Registry of tools, keyed by name in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn DynTool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in tool
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BuildTocTool);
        registry.register(TocClickTool);
        registry.register(RenderTool);
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn DynTool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name
    pub fn execute(&self, name: &str, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| TocError::InvalidArgument(format!("Unknown tool '{}'", name)))?;

        log::debug!("Executing tool '{}'", tool.tool_name());
        tool.execute_json(params, context)
    }
}
