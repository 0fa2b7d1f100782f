//! Document model module
//!
//! This module provides the in-memory element tree the table of contents is
//! built from and written into. It includes:
//! - ElementNode: Representation of DOM elements
//! - DomTree: Complete document with body and id lookups

pub mod element;
pub mod tree;

pub use element::ElementNode;
pub use tree::DomTree;

use crate::error::Result;
use std::path::Path;

/// Load a document tree from a JSON file
pub fn load_dom(path: impl AsRef<Path>) -> Result<DomTree> {
    let json = std::fs::read_to_string(path.as_ref())?;
    DomTree::from_json(&json)
}
