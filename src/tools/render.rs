use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for rendering the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    #[default]
    Html,
    Json,
}

/// Parameters for the render tool
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RenderParams {
    /// Output format (default: html)
    #[serde(default)]
    pub format: RenderFormat,
}

/// Tool for rendering the current document
#[derive(Default)]
pub struct RenderTool;

impl Tool for RenderTool {
    type Params = RenderParams;

    fn name(&self) -> &str {
        "render"
    }

    fn execute_typed(&self, params: RenderParams, context: &mut ToolContext) -> Result<ToolResult> {
        let content = match params.format {
            RenderFormat::Html => context.document.to_html(),
            RenderFormat::Json => context.document.to_json()?,
        };

        Ok(ToolResult::success_with(serde_json::json!({
            "format": params.format,
            "length": content.len(),
            "content": content
        })))
    }
}
