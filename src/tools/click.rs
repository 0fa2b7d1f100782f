use crate::error::Result;
use crate::toc::{ClickEvent, TocHandler};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the toc_click tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TocClickParams {
    /// Target of the clicked link, e.g. "toc0" or "#toc0"
    pub target: String,
}

/// Tool for clicking a TOC link
#[derive(Default)]
pub struct TocClickTool;

impl Tool for TocClickTool {
    type Params = TocClickParams;

    fn name(&self) -> &str {
        "toc_click"
    }

    fn execute_typed(&self, params: TocClickParams, context: &mut ToolContext) -> Result<ToolResult> {
        let handler = TocHandler::from_config(&context.config);
        let expanded = handler.on_click(context.document, &ClickEvent::new(params.target.clone()))?;

        Ok(ToolResult::success_with(serde_json::json!({
            "container": handler.container_id(),
            "target": params.target,
            "toggled": expanded,
            "expanded": handler.expanded(context.document)?
        })))
    }
}
