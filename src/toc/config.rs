use crate::error::{Result, TocError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How each heading obtains the target its TOC link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum AnchorStrategy {
    /// Insert an anchor with a generated id directly before each heading
    #[default]
    Synthesize,
    /// Reuse the `name` attribute of the heading's parent element
    ParentName,
}

/// What to do with a heading that cannot nest under a preceding one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum NestingPolicy {
    /// Place the heading at the deepest level it can reach
    #[default]
    Promote,
    /// Leave the heading out of the table of contents
    Skip,
}

/// Configuration for building and driving a table of contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TocConfig {
    /// Id of the element the table of contents is mounted into
    pub container_id: String,

    /// Addressing strategy for heading targets
    pub anchor_strategy: AnchorStrategy,

    /// Prefix for synthesized anchor ids (`toc` gives `toc0`, `toc1`, ...)
    pub anchor_prefix: String,

    /// Deepest heading level collected (2 collects `h1` and `h2`)
    pub max_level: u8,

    /// Handling of orphaned or over-deep headings
    pub nesting: NestingPolicy,

    /// Class toggled on the expanded top-level entry
    pub expanded_class: String,

    /// Remove existing container children before building
    pub clear_container: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            container_id: "toc".to_string(),
            anchor_strategy: AnchorStrategy::Synthesize,
            anchor_prefix: "toc".to_string(),
            max_level: 2,
            nesting: NestingPolicy::Promote,
            expanded_class: "expanded".to_string(),
            clear_container: true,
        }
    }
}

impl TocConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file and validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TocError::InvalidConfig(format!("Failed to parse config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set container id
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    /// Builder method: set anchor strategy
    pub fn anchor_strategy(mut self, strategy: AnchorStrategy) -> Self {
        self.anchor_strategy = strategy;
        self
    }

    /// Builder method: set synthesized anchor prefix
    pub fn anchor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.anchor_prefix = prefix.into();
        self
    }

    /// Builder method: set deepest collected heading level
    pub fn max_level(mut self, level: u8) -> Self {
        self.max_level = level;
        self
    }

    /// Builder method: set nesting policy
    pub fn nesting(mut self, policy: NestingPolicy) -> Self {
        self.nesting = policy;
        self
    }

    /// Builder method: set expanded class name
    pub fn expanded_class(mut self, class: impl Into<String>) -> Self {
        self.expanded_class = class.into();
        self
    }

    /// Builder method: toggle clearing the container before building
    pub fn clear_container(mut self, clear: bool) -> Self {
        self.clear_container = clear;
        self
    }

    /// Check field ranges and non-empty names
    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.max_level) {
            return Err(TocError::InvalidConfig(format!(
                "max_level must be between 1 and 6, got {}",
                self.max_level
            )));
        }

        for (field, value) in [
            ("container_id", &self.container_id),
            ("anchor_prefix", &self.anchor_prefix),
            ("expanded_class", &self.expanded_class),
        ] {
            if value.trim().is_empty() {
                return Err(TocError::InvalidConfig(format!("{} must not be empty", field)));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(TocError::InvalidConfig(format!("{} must not contain whitespace", field)));
            }
        }

        Ok(())
    }

    /// JSON schema describing the configuration file
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(TocConfig)).unwrap_or_default()
    }
}
