// File: src/dom.rs
// Purpose: In-memory document tree the validator binds to and mutates

use std::collections::HashMap;

use serde::Serialize;

/// Index of a node in its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A selected file on a file input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
}

impl FileRef {
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }
}

/// One element in the tree. Form-control state (`value`, `checked`, `files`)
/// lives directly on the element.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    /// Visible text content (used by message slots).
    pub text: String,
    pub value: String,
    pub checked: bool,
    pub files: Vec<FileRef>,
    /// Set when a form element performs its native submission.
    pub native_submitted: bool,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_files(mut self, files: Vec<FileRef>) -> Self {
        self.files = files;
        self
    }

    /// Control kind of an `input` element; empty for other tags.
    pub fn input_type(&self) -> &str {
        if self.tag == "input" {
            self.attributes
                .get("type")
                .map(String::as_str)
                .unwrap_or("text")
        } else {
            ""
        }
    }
}

struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

/// Arena-backed document tree with the selector and mutation surface the
/// validator needs. Selectors are deliberately minimal: `#id`, `.class`, or
/// a bare tag name.
#[derive(Default)]
pub struct Document {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parentless element (e.g. `body`).
    pub fn create_root(&mut self, element: Element) -> NodeId {
        let id = self.push(None, element);
        self.roots.push(id);
        id
    }

    /// Add an element as the last child of `parent`.
    pub fn create_element(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.push(Some(parent), element);
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            element,
        });
        id
    }

    /// Detach a node (and with it its subtree) from the tree.
    pub fn remove(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent {
            self.nodes[parent.0].children.retain(|&child| child != id);
        }
        self.nodes[id.0].parent = None;
        self.roots.retain(|&root| root != id);
    }

    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0].element
    }

    pub fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0].element
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Whether a node matches a simple selector (`#id`, `.class`, tag).
    pub fn matches(&self, id: NodeId, selector: &str) -> bool {
        let element = self.element(id);
        if let Some(class) = selector.strip_prefix('.') {
            element.classes.iter().any(|c| c == class)
        } else if let Some(wanted) = selector.strip_prefix('#') {
            element.id.as_deref() == Some(wanted)
        } else {
            element.tag == selector
        }
    }

    /// First matching node in document order.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.walk().into_iter().find(|&id| self.matches(id, selector))
    }

    /// First matching descendant of `root` in document order.
    pub fn query_selector_in(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        self.walk_from(root)
            .into_iter()
            .find(|&id| self.matches(id, selector))
    }

    /// Descendants of `root` (document order) carrying every listed attribute.
    pub fn query_by_attributes(&self, root: NodeId, attrs: &[&str]) -> Vec<NodeId> {
        self.walk_from(root)
            .into_iter()
            .filter(|&id| {
                let element = self.element(id);
                attrs.iter().all(|attr| element.attributes.contains_key(*attr))
            })
            .collect()
    }

    /// Nearest ancestor matching `selector`, walking up until a match or the
    /// root is reached. The node itself is not considered.
    pub fn closest(&self, id: NodeId, selector: &str) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.matches(ancestor, selector) {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            self.element_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.element_mut(id).classes.retain(|c| c != class);
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.element(id).text
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.element_mut(id).text = text.to_string();
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).attributes.get(name).map(String::as_str)
    }

    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        for &root in &self.roots {
            self.collect_subtree(root, &mut order);
        }
        order
    }

    /// Pre-order traversal of the subtree below `root` (exclusive).
    fn walk_from(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        for &child in self.children(root) {
            self.collect_subtree(child, &mut order);
        }
        order
    }

    fn collect_subtree(&self, id: NodeId, order: &mut Vec<NodeId>) {
        order.push(id);
        for &child in self.children(id) {
            self.collect_subtree(child, order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.create_root(Element::new("body"));
        let group = doc.create_element(body, Element::new("div").with_class("form-group"));
        let input = doc.create_element(
            group,
            Element::new("input").with_attr("name", "email").with_attr("rules", "email"),
        );
        (doc, body, group, input)
    }

    #[test]
    fn test_selector_matching() {
        let (doc, body, group, input) = sample();
        assert!(doc.matches(body, "body"));
        assert!(doc.matches(group, ".form-group"));
        assert!(!doc.matches(input, ".form-group"));
        assert_eq!(doc.query_selector(".form-group"), Some(group));
        assert_eq!(doc.query_selector("#missing"), None);
    }

    #[test]
    fn test_closest_walks_ancestors_only() {
        let (doc, _, group, input) = sample();
        assert_eq!(doc.closest(input, ".form-group"), Some(group));
        // A group does not match itself.
        assert_eq!(doc.closest(group, ".form-group"), None);
    }

    #[test]
    fn test_query_by_attributes() {
        let (mut doc, body, _, input) = sample();
        let bare = doc.create_element(body, Element::new("input").with_attr("name", "plain"));

        assert_eq!(doc.query_by_attributes(body, &["name"]), vec![input, bare]);
        assert_eq!(doc.query_by_attributes(body, &["name", "rules"]), vec![input]);
    }

    #[test]
    fn test_attribute_lookup() {
        let (doc, _, group, input) = sample();
        assert_eq!(doc.attribute(input, "name"), Some("email"));
        assert_eq!(doc.attribute(input, "rules"), Some("email"));
        assert_eq!(doc.attribute(input, "placeholder"), None);
        assert_eq!(doc.attribute(group, "name"), None);
    }

    #[test]
    fn test_document_order_is_preorder() {
        let (mut doc, body, group, input) = sample();
        let message = doc.create_element(group, Element::new("span").with_class("form-message"));
        let sibling = doc.create_element(body, Element::new("div"));

        assert_eq!(doc.walk_from(body), vec![group, input, message, sibling]);
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let (mut doc, body, group, _) = sample();
        doc.remove(group);
        assert!(doc.query_by_attributes(body, &["name"]).is_empty());
        assert_eq!(doc.query_selector(".form-group"), None);
    }

    #[test]
    fn test_class_mutation() {
        let (mut doc, _, group, _) = sample();
        doc.add_class(group, "invalid");
        doc.add_class(group, "invalid");
        assert!(doc.has_class(group, "invalid"));
        assert_eq!(
            doc.element(group).classes.iter().filter(|c| *c == "invalid").count(),
            1
        );
        doc.remove_class(group, "invalid");
        assert!(!doc.has_class(group, "invalid"));
    }
}
