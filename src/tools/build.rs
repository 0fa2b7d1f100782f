use crate::error::{Result, TocError};
use crate::toc::{AnchorStrategy, build_toc};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the build_toc tool; unset fields keep the context configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct BuildTocParams {
    /// Id of the container element to mount the TOC into
    #[serde(default)]
    pub container_id: Option<String>,

    /// Anchor strategy: "synthesize" or "parent_name"
    #[serde(default)]
    pub anchor_strategy: Option<AnchorStrategy>,

    /// Deepest heading level to include (1-6)
    #[serde(default)]
    pub max_level: Option<u8>,
}

/// Tool for building the table of contents
#[derive(Default)]
pub struct BuildTocTool;

impl Tool for BuildTocTool {
    type Params = BuildTocParams;

    fn name(&self) -> &str {
        "build_toc"
    }

    fn execute_typed(&self, params: BuildTocParams, context: &mut ToolContext) -> Result<ToolResult> {
        let mut config = context.config.clone();
        if let Some(container_id) = params.container_id {
            config.container_id = container_id;
        }
        if let Some(strategy) = params.anchor_strategy {
            config.anchor_strategy = strategy;
        }
        if let Some(level) = params.max_level {
            config.max_level = level;
        }

        let report = build_toc(context.document, &config)?;
        context.config = config;

        let data = serde_json::to_value(&report).map_err(|e| TocError::ToolExecutionFailed {
            tool: "build_toc".to_string(),
            reason: e.to_string(),
        })?;

        Ok(ToolResult::success_with(data))
    }
}
