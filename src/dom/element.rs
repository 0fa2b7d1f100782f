use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tags rendered without a closing tag
const VOID_TAGS: [&str; 8] = ["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// Represents a DOM element node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ElementNode {
    /// HTML tag name (e.g., "div", "h1", "a")
    pub tag_name: String,

    /// Element attributes in insertion order (e.g., id, class, href, etc.)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    /// Text content of the element, rendered before its children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create a new ElementNode
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            text_content: None,
            children: Vec::new(),
        }
    }

    /// Builder method: set a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Builder method: set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<ElementNode>) -> Self {
        self.children = children;
        self
    }

    /// Builder method: append one child
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add a single attribute, replacing any previous value
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Check if element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        if let Some(classes) = self.attributes.get("class") {
            classes.split_whitespace().any(|c| c == class_name)
        } else {
            false
        }
    }

    /// Add a class unless it is already present
    pub fn add_class(&mut self, class_name: &str) {
        if self.has_class(class_name) {
            return;
        }
        match self.attributes.get_mut("class") {
            Some(classes) if !classes.trim().is_empty() => {
                classes.push(' ');
                classes.push_str(class_name);
            }
            _ => {
                self.attributes.insert("class".to_string(), class_name.to_string());
            }
        }
    }

    /// Remove a class, returning whether it was present.
    /// The `class` attribute is dropped once it becomes empty.
    pub fn remove_class(&mut self, class_name: &str) -> bool {
        let Some(classes) = self.attributes.get("class") else {
            return false;
        };

        if !classes.split_whitespace().any(|c| c == class_name) {
            return false;
        }

        let remaining = classes
            .split_whitespace()
            .filter(|c| *c != class_name)
            .collect::<Vec<_>>()
            .join(" ");
        if remaining.is_empty() {
            self.attributes.shift_remove("class");
        } else {
            self.attributes.insert("class".to_string(), remaining);
        }
        true
    }

    /// Get element ID
    pub fn id(&self) -> Option<&String> {
        self.attributes.get("id")
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Heading level (1 for `h1` through 6 for `h6`), or None for other tags
    pub fn heading_level(&self) -> Option<u8> {
        let tag = self.tag_name.as_bytes();
        match tag {
            [h, digit] if h.eq_ignore_ascii_case(&b'h') && (b'1'..=b'6').contains(digit) => Some(digit - b'0'),
            _ => None,
        }
    }

    /// Text of this element and all of its descendants, whitespace collapsed
    pub fn text(&self) -> String {
        let mut raw = String::new();
        self.collect_text(&mut raw);
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text_content {
            out.push_str(text);
            out.push(' ');
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Render this element and its subtree as HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value, true));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.iter().any(|t| self.is_tag(t)) {
            return;
        }

        if let Some(text) = &self.text_content {
            out.push_str(&escape(text, false));
        }
        for child in &self.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(&self.tag_name);
        out.push('>');
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
