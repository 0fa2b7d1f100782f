use crate::dom::{DomTree, ElementNode};
use crate::error::{Result, TocError};
use crate::toc::builder::TOGGLE_ATTRIBUTE;
use crate::toc::config::TocConfig;
use serde::{Deserialize, Serialize};

/// A click on a TOC link, identified by the fragment the link points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// Link target, with or without the leading `#`
    pub target: String,
}

impl ClickEvent {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }

    fn href(&self) -> String {
        format!("#{}", self.target.trim_start_matches('#'))
    }
}

/// Exclusive expand/collapse behaviour for the top-level TOC entries.
///
/// The handler carries the container it acts on, so several independent
/// tables of contents can live in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocHandler {
    container_id: String,
    expanded_class: String,
}

impl TocHandler {
    pub fn new(container_id: impl Into<String>, expanded_class: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            expanded_class: expanded_class.into(),
        }
    }

    pub fn from_config(config: &TocConfig) -> Self {
        Self::new(config.container_id.clone(), config.expanded_class.clone())
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Handle a click on a TOC link.
    ///
    /// For a wired (top-level) link every element in the container loses the
    /// expanded class and the list item owning the link gains it; returns
    /// `true`. Clicks on plain navigation links change nothing and return
    /// `false`.
    pub fn on_click(&self, document: &mut DomTree, event: &ClickEvent) -> Result<bool> {
        let href = event.href();
        let container = document
            .find_by_id_mut(&self.container_id)
            .ok_or_else(|| TocError::MissingContainer(self.container_id.clone()))?;

        let (path, wired) =
            find_link_item(container, &href).ok_or_else(|| TocError::LinkNotFound(event.target.clone()))?;

        if !wired {
            log::debug!("Click on {} is plain navigation", href);
            return Ok(false);
        }

        let cleared = clear_class(container, &self.expanded_class);

        let mut item = container;
        for index in path {
            item = &mut item.children[index];
        }
        item.add_class(&self.expanded_class);

        log::debug!("Expanded {} ({} entries collapsed)", href, cleared);
        Ok(true)
    }

    /// Remove the expanded class from every element in the container
    pub fn collapse_all(&self, document: &mut DomTree) -> Result<usize> {
        let container = document
            .find_by_id_mut(&self.container_id)
            .ok_or_else(|| TocError::MissingContainer(self.container_id.clone()))?;

        Ok(clear_class(container, &self.expanded_class))
    }

    /// Link targets of the list items currently carrying the expanded class
    pub fn expanded(&self, document: &DomTree) -> Result<Vec<String>> {
        let container = document
            .find_by_id(&self.container_id)
            .ok_or_else(|| TocError::MissingContainer(self.container_id.clone()))?;

        let mut targets = Vec::new();
        collect_expanded(container, &self.expanded_class, &mut targets);
        Ok(targets)
    }
}

/// Child-index path to the `li` whose link points at `href`, and whether that
/// link is wired as an expand toggle
fn find_link_item(node: &ElementNode, href: &str) -> Option<(Vec<usize>, bool)> {
    for (i, child) in node.children.iter().enumerate() {
        if child.is_tag("li") {
            let link = child
                .children
                .iter()
                .find(|c| c.is_tag("a") && c.get_attribute("href").is_some_and(|h| h == href));
            if let Some(link) = link {
                return Some((vec![i], link.get_attribute(TOGGLE_ATTRIBUTE).is_some()));
            }
        }

        if let Some((mut path, wired)) = find_link_item(child, href) {
            path.insert(0, i);
            return Some((path, wired));
        }
    }

    None
}

fn clear_class(node: &mut ElementNode, class: &str) -> usize {
    let mut cleared = usize::from(node.remove_class(class));
    for child in &mut node.children {
        cleared += clear_class(child, class);
    }
    cleared
}

fn collect_expanded(node: &ElementNode, class: &str, targets: &mut Vec<String>) {
    if node.has_class(class) {
        let href = node
            .children
            .iter()
            .find(|c| c.is_tag("a"))
            .and_then(|a| a.get_attribute("href"));
        if let Some(href) = href {
            targets.push(href.trim_start_matches('#').to_string());
        }
    }
    for child in &node.children {
        collect_expanded(child, class, targets);
    }
}
