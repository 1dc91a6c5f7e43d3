//! Structured content model: mirror elements and documents.
//!
//! The widget never works with serialized markup internally. Marked elements
//! are imported from the live DOM into this mirror model, snapshots are
//! captured as trees of [`Node`]s, and serialization back to HTML happens
//! only at the write-back boundary in [`crate::host`]. Keeping the model
//! structured avoids re-parsing and escaping hazards when a note is restored
//! from its snapshot.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A single node in the mirror tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// An element with tag, attributes, classes, and children.
    Element(Element),
    /// A text node holding unescaped character data.
    Text(String),
}

/// A mirror of a DOM element.
///
/// Classes are kept separate from the attribute map because the widget
/// toggles presentation classes individually; they are merged back into a
/// single `class` attribute on serialization. Attributes are ordered
/// (`BTreeMap`) so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes other than `class`.
    pub attrs: BTreeMap<String, String>,
    /// Class list, in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: add a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder: append a child node.
    #[must_use]
    pub fn with_child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Builder: append a text child.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_owned()));
        self
    }

    /// Whether the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class; adding an existing class is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class; removing an absent class is a no-op.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute, overwriting any previous value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_owned(), value.to_owned());
    }

    /// The class list joined into a single `class` attribute value.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Find the first element (self or descendant, document order) whose
    /// attribute `name` equals `value`.
    #[must_use]
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        if self.attr(name) == Some(value) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(el) => el.find_by_attr(name, value),
            Node::Text(_) => None,
        })
    }

    /// Mutable variant of [`Element::find_by_attr`].
    pub fn find_by_attr_mut(&mut self, name: &str, value: &str) -> Option<&mut Element> {
        if self.attr(name) == Some(value) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(el) => el.find_by_attr_mut(name, value),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text content of self and all descendants.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Serialize the element, including its own tag, to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize only the children to HTML. This is what the host layer
    /// writes into the live element via `innerHTML`.
    #[must_use]
    pub fn children_html(&self) -> String {
        let mut out = String::new();
        write_children(&self.children, &mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_attr(&self.class_attr()));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        write_children(&self.children, out);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// The mirror document managed by the controller.
///
/// The root is a synthetic container; the marked subtrees imported from the
/// live page sit underneath it. Only marked elements ever get written back,
/// so the synthetic root never leaks into the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Synthetic root element holding the managed subtrees.
    pub root: Element,
}

impl Document {
    /// An empty mirror document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Element::new("body"),
        }
    }

    /// Build a document around an existing root element.
    #[must_use]
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    /// Serialize the document's content (children of the synthetic root).
    #[must_use]
    pub fn to_html(&self) -> String {
        self.root.children_html()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Element(el) => collect_text(&el.children, out),
            Node::Text(text) => out.push_str(text),
        }
    }
}

fn write_children(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }
}

/// Escape character data for a text position.
#[must_use]
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape character data for a double-quoted attribute position.
#[must_use]
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
