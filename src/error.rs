use thiserror::Error;

/// Errors produced while building or interacting with a table of contents
#[derive(Debug, Error)]
pub enum TocError {
    /// The mount point for the table of contents does not exist in the document
    #[error("TOC container element with id '{0}' not found")]
    MissingContainer(String),

    /// A click targeted a link that is not part of the table of contents
    #[error("No TOC link targets '{0}'")]
    LinkNotFound(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A document could not be read from or written to JSON
    #[error("Failed to parse document: {0}")]
    DomParseFailed(String),

    /// A tool received arguments it cannot use
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A tool failed while running
    #[error("Tool '{tool}' failed: {reason}")]
    ToolExecutionFailed { tool: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TocError>;
