use crate::dom::{DomTree, ElementNode};
use crate::error::{Result, TocError};
use crate::toc::config::{AnchorStrategy, NestingPolicy, TocConfig};
use serde::{Deserialize, Serialize};

/// Attribute marking a TOC link as an expand toggle for the click handler
pub const TOGGLE_ATTRIBUTE: &str = "data-toc-toggle";

/// One heading that received a TOC link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Position of the heading among all collected headings
    pub index: usize,

    /// Heading level (1 for `h1`)
    pub level: u8,

    /// Link label, taken from the heading text
    pub label: String,

    /// Fragment the link points at, without the leading `#`
    pub target: String,
}

/// Summary of a single [`build_toc`] run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocReport {
    /// Linked headings, in document order
    pub entries: Vec<TocEntry>,

    /// Number of entries placed at the top level of the TOC
    pub top_level: usize,

    /// Anchors inserted into the document during this run
    pub anchors_inserted: usize,

    /// Stale synthetic anchors removed from the document during this run
    pub anchors_removed: usize,

    /// Headings left out of the TOC
    pub skipped: usize,
}

/// Build a nested table of contents from the document headings and mount it
/// into the configured container.
///
/// Headings are collected from the document body in document order, down to
/// `config.max_level`. Each linked heading becomes an `li` (class = heading
/// tag) wrapping an `a href="#target"`; deeper headings nest in an `ol`
/// inside the item of the nearest shallower heading before them.
///
/// With [`AnchorStrategy::Synthesize`], only linked headings get an anchor.
/// Synthetic anchors left before headings by an earlier build are replaced
/// when their target no longer matches.
///
/// The container is checked before the document is touched, so a
/// [`TocError::MissingContainer`] leaves the document unchanged.
pub fn build_toc(document: &mut DomTree, config: &TocConfig) -> Result<TocReport> {
    config.validate()?;

    if document.find_by_id(&config.container_id).is_none() {
        return Err(TocError::MissingContainer(config.container_id.clone()));
    }

    let mut scan = HeadingScan::new(config);
    scan.visit(document.body());

    let mut lists = ListBuilder::new(config.nesting);
    for entry in &scan.entries {
        if !lists.push(entry) {
            log::warn!(
                "Skipping heading {} ('{}'): no enclosing heading to nest under",
                entry.index,
                entry.label
            );
        }
    }
    let placed = std::mem::take(&mut lists.placed);
    let nesting_skipped = scan.entries.len() - placed.len();
    let items = lists.finish();
    let top_level = items.len();

    let entries: Vec<TocEntry> = scan
        .entries
        .into_iter()
        .enumerate()
        .filter(|(i, _)| placed.contains(i))
        .map(|(_, entry)| entry)
        .collect();

    let mut anchors = AnchorPass::new(config, &entries);
    if config.anchor_strategy == AnchorStrategy::Synthesize {
        anchors.visit(document.body_mut());
    }

    let container = document
        .find_by_id_mut(&config.container_id)
        .ok_or_else(|| TocError::MissingContainer(config.container_id.clone()))?;
    if config.clear_container {
        container.children.clear();
    }
    if !items.is_empty() {
        if container.is_tag("ol") || container.is_tag("ul") {
            container.children.extend(items);
        } else {
            container.add_child(ElementNode::new("ol").with_children(items));
        }
    }

    let report = TocReport {
        top_level,
        anchors_inserted: anchors.inserted,
        anchors_removed: anchors.removed,
        skipped: scan.skipped + nesting_skipped,
        entries,
    };

    log::info!(
        "Built TOC in '{}': {} entries, {} top-level, {} anchors inserted, {} removed, {} skipped",
        config.container_id,
        report.entries.len(),
        report.top_level,
        report.anchors_inserted,
        report.anchors_removed,
        report.skipped
    );

    Ok(report)
}

/// Walks the body collecting headings and assigning link targets
struct HeadingScan<'a> {
    config: &'a TocConfig,
    entries: Vec<TocEntry>,
    next_index: usize,
    skipped: usize,
}

impl<'a> HeadingScan<'a> {
    fn new(config: &'a TocConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            next_index: 0,
            skipped: 0,
        }
    }

    fn visit(&mut self, parent: &ElementNode) {
        let parent_name = parent.get_attribute("name");

        for child in &parent.children {
            // Never index the TOC itself
            if child.id().is_some_and(|id| *id == self.config.container_id) {
                continue;
            }

            let Some(level) = child.heading_level().filter(|l| *l <= self.config.max_level) else {
                self.visit(child);
                continue;
            };

            let index = self.next_index;
            self.next_index += 1;
            let label = child.text();

            let target = match self.config.anchor_strategy {
                AnchorStrategy::Synthesize => Some(format!("{}{}", self.config.anchor_prefix, index)),
                AnchorStrategy::ParentName => parent_name.cloned(),
            };

            match target {
                Some(target) => {
                    log::debug!("Heading {} (h{}) '{}' -> #{}", index, level, label, target);
                    self.entries.push(TocEntry {
                        index,
                        level,
                        label,
                        target,
                    });
                }
                None => {
                    log::warn!(
                        "Skipping heading {} ('{}'): parent <{}> has no name attribute",
                        index,
                        label,
                        parent.tag_name
                    );
                    self.skipped += 1;
                }
            }
        }
    }
}

/// Second walk over the body, in the same order as [`HeadingScan`]: keeps one
/// anchor before each linked heading and drops stale synthetic anchors
struct AnchorPass<'a> {
    config: &'a TocConfig,
    linked: &'a [TocEntry],
    next_index: usize,
    inserted: usize,
    removed: usize,
}

impl<'a> AnchorPass<'a> {
    fn new(config: &'a TocConfig, linked: &'a [TocEntry]) -> Self {
        Self {
            config,
            linked,
            next_index: 0,
            inserted: 0,
            removed: 0,
        }
    }

    fn visit(&mut self, parent: &mut ElementNode) {
        let linked = self.linked;
        let mut i = 0;
        while i < parent.children.len() {
            let child = &parent.children[i];

            if child.id().is_some_and(|id| *id == self.config.container_id) {
                i += 1;
                continue;
            }

            let Some(level) = child.heading_level() else {
                self.visit(&mut parent.children[i]);
                i += 1;
                continue;
            };

            // Headings past max_level had no index and get no anchor
            let target = if level <= self.config.max_level {
                let index = self.next_index;
                self.next_index += 1;
                linked.iter().find(|e| e.index == index).map(|e| e.target.as_str())
            } else {
                None
            };

            let mut start = i;
            while start > 0 && is_synthetic_anchor(&parent.children[start - 1], &self.config.anchor_prefix) {
                start -= 1;
            }

            let mut kept = false;
            let mut j = start;
            while j < i {
                let keep = !kept && target.is_some_and(|t| is_anchor_for(&parent.children[j], t));
                if keep {
                    kept = true;
                    j += 1;
                } else {
                    log::debug!("Removing stale anchor {:?}", parent.children[j].id());
                    parent.children.remove(j);
                    self.removed += 1;
                    i -= 1;
                }
            }

            if let Some(target) = target.filter(|_| !kept) {
                parent.children.insert(i, anchor(target));
                self.inserted += 1;
                i += 1;
            }
            i += 1;
        }
    }
}

fn anchor(target: &str) -> ElementNode {
    ElementNode::new("a").with_attribute("id", target).with_attribute("name", target)
}

fn is_anchor_for(node: &ElementNode, target: &str) -> bool {
    node.is_tag("a") && node.id().is_some_and(|id| id == target)
}

/// An empty `a` whose id is the anchor prefix followed by digits
fn is_synthetic_anchor(node: &ElementNode, prefix: &str) -> bool {
    if !node.is_tag("a") || !node.children.is_empty() || node.text_content.is_some() {
        return false;
    }
    node.id()
        .and_then(|id| id.strip_prefix(prefix))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// A list still accepting items, and the heading level its items sit at
struct OpenList {
    level: u8,
    items: Vec<ElementNode>,
}

/// Stack of open lists; the bottom entry is the top level of the TOC
struct ListBuilder {
    stack: Vec<OpenList>,
    policy: NestingPolicy,
    /// Indices (into the entry sequence) of entries that were placed
    placed: Vec<usize>,
    seen: usize,
}

impl ListBuilder {
    fn new(policy: NestingPolicy) -> Self {
        Self {
            stack: vec![OpenList {
                level: 1,
                items: Vec::new(),
            }],
            policy,
            placed: Vec::new(),
            seen: 0,
        }
    }

    /// Place an entry, returning false when the nesting policy drops it
    fn push(&mut self, entry: &TocEntry) -> bool {
        let position = self.seen;
        self.seen += 1;

        while self.stack.len() > 1 && entry.level < self.top().level {
            // Still deeper than the enclosing list: keep the open list and re-level it
            let enclosing = self.stack[self.stack.len() - 2].level;
            if entry.level > enclosing {
                self.top_mut().level = entry.level;
                break;
            }
            self.close_top();
        }

        let at_root = self.stack.len() == 1;
        let top = self.top();
        let (top_level, top_empty) = (top.level, top.items.is_empty());

        if entry.level < top_level {
            // Only reachable at the root: it now sits at the shallower level
            self.top_mut().level = entry.level;
        } else if entry.level > top_level {
            if top_empty {
                if self.policy == NestingPolicy::Skip {
                    return false;
                }
                self.top_mut().level = entry.level;
            } else {
                if entry.level - top_level > 1 && self.policy == NestingPolicy::Skip {
                    return false;
                }
                self.stack.push(OpenList {
                    level: entry.level,
                    items: Vec::new(),
                });
            }
        }

        let wired = at_root && self.stack.len() == 1 && entry.level == 1;
        self.top_mut().items.push(list_item(entry, wired));
        self.placed.push(position);
        true
    }

    fn top(&self) -> &OpenList {
        &self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut OpenList {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Pop the innermost list and attach it to the last item of its parent
    fn close_top(&mut self) {
        let Some(closed) = self.stack.pop() else {
            return;
        };
        let parent = self.top_mut();
        match parent.items.last_mut() {
            Some(owner) => owner.add_child(ElementNode::new("ol").with_children(closed.items)),
            None => parent.items.extend(closed.items),
        }
    }

    fn finish(mut self) -> Vec<ElementNode> {
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack.pop().map(|root| root.items).unwrap_or_default()
    }
}

fn list_item(entry: &TocEntry, wired: bool) -> ElementNode {
    let mut link = ElementNode::new("a")
        .with_attribute("href", format!("#{}", entry.target))
        .with_text(entry.label.clone());
    if wired {
        link.add_attribute(TOGGLE_ATTRIBUTE, "expand");
    }

    ElementNode::new("li")
        .with_attribute("class", format!("h{}", entry.level))
        .with_child(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(headings: &[(&str, &str)]) -> DomTree {
        let mut body = ElementNode::new("body");
        body.add_child(ElementNode::new("div").with_attribute("id", "toc"));
        for (tag, text) in headings {
            body.add_child(ElementNode::new(*tag).with_text(*text));
        }
        DomTree::new(body)
    }

    fn toc_list(tree: &DomTree) -> &ElementNode {
        &tree.find_by_id("toc").unwrap().children[0]
    }

    fn link(item: &ElementNode) -> &ElementNode {
        &item.children[0]
    }

    #[test]
    fn test_flat_h1_only() {
        let mut tree = document(&[("h1", "One"), ("h1", "Two"), ("h1", "Three")]);
        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();

        let list = toc_list(&tree);
        assert!(list.is_tag("ol"));
        assert_eq!(list.children.len(), 3);
        assert!(list.children.iter().all(|li| li.children.len() == 1));
        assert_eq!(report.top_level, 3);
        assert_eq!(report.entries.len(), 3);
    }

    #[test]
    fn test_alternating_levels() {
        let mut tree = document(&[("h1", "A"), ("h2", "a"), ("h1", "B"), ("h2", "b")]);
        build_toc(&mut tree, &TocConfig::default()).unwrap();

        let list = toc_list(&tree);
        assert_eq!(list.children.len(), 2);
        for li in &list.children {
            assert_eq!(li.get_attribute("class"), Some(&"h1".to_string()));
            assert_eq!(li.children.len(), 2);
            let sublist = &li.children[1];
            assert!(sublist.is_tag("ol"));
            assert_eq!(sublist.children.len(), 1);
            assert_eq!(sublist.children[0].get_attribute("class"), Some(&"h2".to_string()));
        }
    }

    #[test]
    fn test_consecutive_h2_are_siblings() {
        let mut tree = document(&[("h1", "A"), ("h2", "x"), ("h2", "y"), ("h2", "z")]);
        build_toc(&mut tree, &TocConfig::default()).unwrap();

        let list = toc_list(&tree);
        assert_eq!(list.children.len(), 1);
        let sublist = &list.children[0].children[1];
        assert_eq!(sublist.children.len(), 3);
        assert!(sublist.children.iter().all(|li| li.children.len() == 1));
    }

    #[test]
    fn test_synthesized_anchors_precede_headings() {
        let mut tree = document(&[("h1", "A"), ("h2", "a")]);
        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();

        assert_eq!(report.anchors_inserted, 2);
        let body = &tree.root;
        // div#toc, a#toc0, h1, a#toc1, h2
        assert_eq!(body.children.len(), 5);
        assert_eq!(body.children[1].id(), Some(&"toc0".to_string()));
        assert!(body.children[2].is_tag("h1"));
        assert_eq!(body.children[3].get_attribute("name"), Some(&"toc1".to_string()));
        assert!(body.children[4].is_tag("h2"));

        let first = link(&toc_list(&tree).children[0]);
        assert_eq!(first.get_attribute("href"), Some(&"#toc0".to_string()));
        assert_eq!(first.text_content.as_deref(), Some("A"));
    }

    #[test]
    fn test_only_top_level_links_are_wired() {
        let mut tree = document(&[("h1", "A"), ("h2", "a")]);
        build_toc(&mut tree, &TocConfig::default()).unwrap();

        let top = &toc_list(&tree).children[0];
        assert!(link(top).get_attribute(TOGGLE_ATTRIBUTE).is_some());
        let nested = &top.children[1].children[0];
        assert!(link(nested).get_attribute(TOGGLE_ATTRIBUTE).is_none());
    }

    #[test]
    fn test_missing_container() {
        let mut tree = DomTree::new(ElementNode::new("body").with_child(ElementNode::new("h1").with_text("A")));
        let before = tree.clone();

        let err = build_toc(&mut tree, &TocConfig::default()).unwrap_err();
        assert!(matches!(err, TocError::MissingContainer(ref id) if id == "toc"));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_empty_heading_set() {
        let mut tree = document(&[]);
        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();

        assert!(report.entries.is_empty());
        assert!(tree.find_by_id("toc").unwrap().children.is_empty());
    }

    #[test]
    fn test_rebuild_does_not_duplicate() {
        let mut tree = document(&[("h1", "A"), ("h2", "a")]);
        build_toc(&mut tree, &TocConfig::default()).unwrap();
        let first = tree.clone();

        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();
        assert_eq!(report.anchors_inserted, 0);
        assert_eq!(tree, first);
    }

    #[test]
    fn test_rebuild_without_clearing_duplicates() {
        let mut tree = document(&[("h1", "A")]);
        let config = TocConfig::default().clear_container(false);
        build_toc(&mut tree, &config).unwrap();
        build_toc(&mut tree, &config).unwrap();

        assert_eq!(tree.find_by_id("toc").unwrap().children.len(), 2);
    }

    #[test]
    fn test_container_list_receives_items_directly() {
        let mut body = ElementNode::new("body");
        body.add_child(ElementNode::new("ol").with_attribute("id", "toc"));
        body.add_child(ElementNode::new("h1").with_text("A"));
        body.add_child(ElementNode::new("h1").with_text("B"));
        let mut tree = DomTree::new(body);

        build_toc(&mut tree, &TocConfig::default()).unwrap();

        let container = tree.find_by_id("toc").unwrap();
        assert_eq!(container.children.len(), 2);
        assert!(container.children.iter().all(|c| c.is_tag("li")));
    }

    #[test]
    fn test_parent_name_strategy() {
        let mut body = ElementNode::new("body");
        body.add_child(ElementNode::new("div").with_attribute("id", "toc"));
        body.add_child(
            ElementNode::new("div")
                .with_attribute("name", "intro")
                .with_child(ElementNode::new("h1").with_text("Intro")),
        );
        body.add_child(
            ElementNode::new("div")
                .with_attribute("name", "usage")
                .with_child(ElementNode::new("h2").with_text("Usage")),
        );
        let mut tree = DomTree::new(body);
        let config = TocConfig::default().anchor_strategy(AnchorStrategy::ParentName);

        let report = build_toc(&mut tree, &config).unwrap();

        assert_eq!(report.anchors_inserted, 0);
        let targets: Vec<_> = report.entries.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["intro", "usage"]);
        let top = &toc_list(&tree).children[0];
        assert_eq!(link(top).get_attribute("href"), Some(&"#intro".to_string()));
        // body, toc div, two lists, two items with links, two named divs with headings
        assert_eq!(tree.count_elements(), 12);
    }

    #[test]
    fn test_parent_name_missing_is_skipped() {
        let mut tree = document(&[("h1", "Unnamed")]);
        let config = TocConfig::default().anchor_strategy(AnchorStrategy::ParentName);

        let report = build_toc(&mut tree, &config).unwrap();

        assert_eq!(report.skipped, 1);
        assert!(report.entries.is_empty());
    }

    #[test]
    fn test_orphan_h2_is_promoted() {
        let mut tree = document(&[("h2", "x"), ("h2", "y"), ("h1", "A"), ("h2", "z")]);
        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();

        let list = toc_list(&tree);
        assert_eq!(report.top_level, 3);
        assert_eq!(list.children.len(), 3);
        assert_eq!(list.children[0].children.len(), 1);
        assert_eq!(list.children[2].children[1].children.len(), 1);

        // Promoted h2 entries stay plain navigation links
        assert!(link(&list.children[0]).get_attribute(TOGGLE_ATTRIBUTE).is_none());
        assert!(link(&list.children[1]).get_attribute(TOGGLE_ATTRIBUTE).is_none());
        assert!(link(&list.children[2]).get_attribute(TOGGLE_ATTRIBUTE).is_some());
    }

    #[test]
    fn test_orphan_h2_is_skipped() {
        let mut tree = document(&[("h2", "x"), ("h1", "A"), ("h2", "y")]);
        let config = TocConfig::default().nesting(NestingPolicy::Skip);

        let report = build_toc(&mut tree, &config).unwrap();

        assert_eq!(report.skipped, 1);
        let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "y"]);
        assert_eq!(toc_list(&tree).children.len(), 1);

        // The dropped heading gets no anchor
        assert_eq!(report.anchors_inserted, 2);
        assert!(tree.find_by_id("toc0").is_none());
        assert!(tree.root.children[1].is_tag("h2"));
    }

    #[test]
    fn test_deeper_levels_use_stack() {
        let mut tree = document(&[
            ("h1", "A"),
            ("h2", "B"),
            ("h3", "C"),
            ("h3", "D"),
            ("h2", "E"),
            ("h1", "F"),
        ]);
        let config = TocConfig::default().max_level(3);
        build_toc(&mut tree, &config).unwrap();

        let list = toc_list(&tree);
        assert_eq!(list.children.len(), 2);
        let level2 = &list.children[0].children[1];
        assert_eq!(level2.children.len(), 2);
        let level3 = &level2.children[0].children[1];
        assert_eq!(level3.children.len(), 2);
        assert_eq!(link(&level3.children[1]).text_content.as_deref(), Some("D"));
    }

    #[test]
    fn test_headings_beyond_max_level_ignored() {
        let mut tree = document(&[("h1", "A"), ("h3", "deep"), ("h2", "B")]);
        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[1].target, "toc1");
    }

    #[test]
    fn test_level_jump_nests_once() {
        let mut tree = document(&[("h1", "A"), ("h3", "C"), ("h2", "B")]);
        build_toc(&mut tree, &TocConfig::default().max_level(3)).unwrap();

        let sublists: Vec<_> = toc_list(&tree).children[0]
            .children
            .iter()
            .filter(|c| c.is_tag("ol"))
            .collect();
        // h2 joins the list the h3 opened
        assert_eq!(sublists.len(), 1);
        let labels: Vec<_> = sublists[0].children.iter().map(|li| link(li).text()).collect();
        assert_eq!(labels, vec!["C", "B"]);
    }

    #[test]
    fn test_rebuild_after_heading_inserted() {
        let mut tree = document(&[("h1", "A")]);
        build_toc(&mut tree, &TocConfig::default()).unwrap();

        tree.root.children.insert(1, ElementNode::new("h1").with_text("New"));
        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();

        let ids: Vec<_> = tree.root.children.iter().map(|c| c.id().cloned()).collect();
        assert_eq!(
            ids,
            vec![
                Some("toc".to_string()),
                Some("toc0".to_string()),
                None,
                Some("toc1".to_string()),
                None,
            ]
        );
        assert_eq!(report.anchors_inserted, 2);
        assert_eq!(report.anchors_removed, 1);
        assert_eq!(tree.find_all(|n| n.id().is_some_and(|id| id == "toc0")).len(), 1);
    }

    #[test]
    fn test_rebuild_with_lower_max_level_drops_anchors() {
        let mut tree = document(&[("h1", "A"), ("h3", "deep"), ("h2", "B")]);
        build_toc(&mut tree, &TocConfig::default().max_level(3)).unwrap();
        assert!(tree.find_by_id("toc2").is_some());

        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();

        assert_eq!(report.anchors_removed, 2);
        assert!(tree.find_by_id("toc2").is_none());
        let deep = tree.root.children.iter().position(|c| c.is_tag("h3")).unwrap();
        assert!(tree.root.children[deep - 1].is_tag("h1"));
        let b = tree.root.children.iter().position(|c| c.is_tag("h2")).unwrap();
        assert_eq!(tree.root.children[b - 1].id(), Some(&"toc1".to_string()));
    }

    #[test]
    fn test_level_jump_skipped() {
        let mut tree = document(&[("h1", "A"), ("h3", "C")]);
        let config = TocConfig::default().max_level(3).nesting(NestingPolicy::Skip);

        let report = build_toc(&mut tree, &config).unwrap();
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_nested_headings_found_in_document_order() {
        let mut body = ElementNode::new("body");
        body.add_child(ElementNode::new("nav").with_child(ElementNode::new("div").with_attribute("id", "toc")));
        body.add_child(
            ElementNode::new("article")
                .with_child(ElementNode::new("h1").with_text("First"))
                .with_child(ElementNode::new("section").with_child(ElementNode::new("h2").with_text("Second"))),
        );
        body.add_child(ElementNode::new("h1").with_text("Third"));
        let mut tree = DomTree::new(body);

        let report = build_toc(&mut tree, &TocConfig::default()).unwrap();

        let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second", "Third"]);
        let section = &tree.root.children[1].children[2];
        assert_eq!(section.children[0].id(), Some(&"toc1".to_string()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut tree = document(&[("h1", "A")]);
        let err = build_toc(&mut tree, &TocConfig::default().max_level(0)).unwrap_err();
        assert!(matches!(err, TocError::InvalidConfig(_)));
    }
}
