//! Table of contents construction and interaction
//!
//! - [`build_toc`]: collect headings and mount a nested list into the container
//! - [`TocHandler`]: exclusive expand/collapse of top-level entries
//! - [`TocConfig`]: container, anchor strategy, depth and nesting policy

pub mod builder;
pub mod config;
pub mod handler;

pub use builder::{TOGGLE_ATTRIBUTE, TocEntry, TocReport, build_toc};
pub use config::{AnchorStrategy, NestingPolicy, TocConfig};
pub use handler::{ClickEvent, TocHandler};
