use crate::dom::element::ElementNode;
use crate::error::{Result, TocError};

/// Represents the DOM tree of a document
#[derive(Debug, Clone, PartialEq)]
pub struct DomTree {
    /// Root element of the DOM tree
    pub root: ElementNode,
}

impl DomTree {
    /// Create a new DomTree
    pub fn new(root: ElementNode) -> Self {
        Self { root }
    }

    /// Build a DOM tree from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let root: ElementNode = serde_json::from_str(json)
            .map_err(|e| TocError::DomParseFailed(format!("Failed to parse DOM JSON: {}", e)))?;

        Ok(Self::new(root))
    }

    /// Convert the DOM tree to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|e| TocError::DomParseFailed(format!("Failed to serialize DOM to JSON: {}", e)))
    }

    /// Render the whole tree as HTML
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// The document body: the root itself when it is `body`, else the first
    /// `body` descendant, else the root
    pub fn body(&self) -> &ElementNode {
        if self.root.is_tag("body") {
            return &self.root;
        }
        Self::find_recursive(&self.root, &|n| n.is_tag("body")).unwrap_or(&self.root)
    }

    /// Mutable access to the document body, resolved like [`DomTree::body`]
    pub fn body_mut(&mut self) -> &mut ElementNode {
        let path = Self::path_to(&self.root, &|n| n.is_tag("body")).unwrap_or_default();

        let mut node = &mut self.root;
        for index in path {
            node = &mut node.children[index];
        }
        node
    }

    /// Child indices leading from `node` to the first element matching the predicate
    fn path_to(node: &ElementNode, predicate: &dyn Fn(&ElementNode) -> bool) -> Option<Vec<usize>> {
        if predicate(node) {
            return Some(Vec::new());
        }

        for (i, child) in node.children.iter().enumerate() {
            if let Some(mut path) = Self::path_to(child, predicate) {
                path.insert(0, i);
                return Some(path);
            }
        }

        None
    }

    /// Find the first element carrying the given id
    pub fn find_by_id(&self, id: &str) -> Option<&ElementNode> {
        Self::find_recursive(&self.root, &|n| n.id().is_some_and(|v| v == id))
    }

    /// Find the first element carrying the given id, mutably
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut ElementNode> {
        Self::find_recursive_mut(&mut self.root, &|n| n.id().is_some_and(|v| v == id))
    }

    /// Collect every element matching the predicate, in document order
    pub fn find_all<F>(&self, predicate: F) -> Vec<&ElementNode>
    where
        F: Fn(&ElementNode) -> bool,
    {
        let mut found = Vec::new();
        Self::collect_recursive(&self.root, &predicate, &mut found);
        found
    }

    /// Count total elements in the tree
    pub fn count_elements(&self) -> usize {
        Self::count_elements_recursive(&self.root)
    }

    fn count_elements_recursive(node: &ElementNode) -> usize {
        1 + node.children.iter().map(Self::count_elements_recursive).sum::<usize>()
    }

    fn find_recursive<'a>(node: &'a ElementNode, predicate: &dyn Fn(&ElementNode) -> bool) -> Option<&'a ElementNode> {
        if predicate(node) {
            return Some(node);
        }

        for child in &node.children {
            if let Some(found) = Self::find_recursive(child, predicate) {
                return Some(found);
            }
        }

        None
    }

    fn find_recursive_mut<'a>(
        node: &'a mut ElementNode,
        predicate: &dyn Fn(&ElementNode) -> bool,
    ) -> Option<&'a mut ElementNode> {
        if predicate(node) {
            return Some(node);
        }

        for child in &mut node.children {
            if let Some(found) = Self::find_recursive_mut(child, predicate) {
                return Some(found);
            }
        }

        None
    }

    fn collect_recursive<'a>(
        node: &'a ElementNode,
        predicate: &dyn Fn(&ElementNode) -> bool,
        found: &mut Vec<&'a ElementNode>,
    ) {
        if predicate(node) {
            found.push(node);
        }
        for child in &node.children {
            Self::collect_recursive(child, predicate, found);
        }
    }
}
