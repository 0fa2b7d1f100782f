//! # toc-builder
//!
//! Builds a nested, collapsible table of contents from the headings of a document tree.
//!
//! ## Features
//!
//! - **Heading hierarchy**: `h1`/`h2` (or deeper, up to `h6`) headings become nested ordered lists
//! - **Anchor strategies**: synthesize `toc0`, `toc1`, ... anchors before headings, or reuse the
//!   `name` attribute of each heading's parent element
//! - **Expand/collapse**: clicking a top-level link marks exactly one entry as expanded
//! - **Tool System**: the same operations addressable by name with JSON parameters
//!
//! ## Library Usage
//!
//! ### Building a TOC
//!
//! ```rust
//! use toc_builder::{DomTree, ElementNode, TocConfig, build_toc};
//!
//! # fn main() -> toc_builder::Result<()> {
//! let body = ElementNode::new("body")
//!     .with_child(ElementNode::new("ol").with_attribute("id", "toc"))
//!     .with_child(ElementNode::new("h1").with_text("Introduction"))
//!     .with_child(ElementNode::new("h2").with_text("Background"));
//! let mut document = DomTree::new(body);
//!
//! let report = build_toc(&mut document, &TocConfig::default())?;
//! assert_eq!(report.top_level, 1);
//! println!("{}", document.to_html());
//! # Ok(())
//! # }
//! ```
//!
//! ### Expanding an entry
//!
//! ```rust
//! use toc_builder::{ClickEvent, DomTree, ElementNode, TocConfig, TocHandler, build_toc};
//!
//! # fn main() -> toc_builder::Result<()> {
//! # let body = ElementNode::new("body")
//! #     .with_child(ElementNode::new("ol").with_attribute("id", "toc"))
//! #     .with_child(ElementNode::new("h1").with_text("One"))
//! #     .with_child(ElementNode::new("h1").with_text("Two"));
//! # let mut document = DomTree::new(body);
//! let config = TocConfig::default();
//! build_toc(&mut document, &config)?;
//!
//! let handler = TocHandler::from_config(&config);
//! handler.on_click(&mut document, &ClickEvent::new("toc0"))?;
//! handler.on_click(&mut document, &ClickEvent::new("toc1"))?;
//! assert_eq!(handler.expanded(&document)?, vec!["toc1"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Using the Tool System
//!
//! ```rust
//! use toc_builder::{DomTree, ElementNode, ToolContext, ToolRegistry};
//! use serde_json::json;
//!
//! # fn main() -> toc_builder::Result<()> {
//! # let mut document = DomTree::new(
//! #     ElementNode::new("body")
//! #         .with_child(ElementNode::new("div").with_attribute("id", "toc"))
//! #         .with_child(ElementNode::new("h1").with_text("One")),
//! # );
//! let registry = ToolRegistry::with_defaults();
//! let mut context = ToolContext::new(&mut document);
//!
//! registry.execute("build_toc", json!({}), &mut context)?;
//! registry.execute("toc_click", json!({"target": "toc0"}), &mut context)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: Document model and JSON loading
//! - [`toc`]: TOC construction, click handling and configuration
//! - [`tools`]: Named tools over the TOC operations
//! - [`error`]: Error types and result aliases

pub mod dom;
pub mod error;
pub mod toc;
pub mod tools;

pub use dom::{DomTree, ElementNode};
pub use error::{Result, TocError};
pub use toc::{
    AnchorStrategy, ClickEvent, NestingPolicy, TocConfig, TocEntry, TocHandler, TocReport, build_toc,
};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};
