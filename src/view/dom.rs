use super::import::*;
use crate::util::string::escape_html;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &'static [&'static str] = &["input"];

/// A node in the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }
    /// Return the concatenated text of this node and its descendants
    pub fn text(&self) -> String {
        match self {
            Node::Element(e) => e.text(),
            Node::Text(t) => t.clone(),
        }
    }
    fn write_html(&self, buffer: &mut String) {
        match self {
            Node::Element(e) => e.write_html(buffer),
            Node::Text(t) => buffer.push_str(&escape_html(t)),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self { Node::Element(e) }
}

impl From<&str> for Node {
    fn from(t: &str) -> Self { Node::Text(t.into()) }
}

impl From<String> for Node {
    fn from(t: String) -> Self { Node::Text(t) }
}

/// A bare-bones element: a tag name, at most one class,
/// some attributes, inline style and children.
/// Attributes and style properties are kept sorted so
/// the generated markup is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: &'static str,
    class: Option<&'static str>,
    attrs: BTreeMap<&'static str, String>,
    style: BTreeMap<&'static str, String>,
    children: Vec<Node>,
}

impl Element {

    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            class: None,
            attrs: BTreeMap::new(),
            style: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class); self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text); self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class == Some(class)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(|v| v.as_str())
    }

    pub fn set_attr(&mut self, key: &'static str, value: String) {
        self.attrs.insert(key, value);
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        self.style.get(key).map(|v| v.as_str())
    }

    pub fn set_style(&mut self, key: &'static str, value: String) {
        self.style.insert(key, value);
    }

    pub fn remove_style(&mut self, key: &str) {
        self.style.remove(key);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Return the child at index if it is an element
    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index).and_then(|n| n.as_element())
    }

    /// Drop all children
    pub fn empty(&mut self) {
        self.children.clear();
    }

    pub fn append<N: Into<Node>>(&mut self, node: N) {
        self.children.push(node.into());
    }

    /// Insert a child, indices past the end append
    pub fn insert<N: Into<Node>>(&mut self, index: usize, node: N) {
        let index = index.min(self.children.len());
        self.children.insert(index, node.into());
    }

    /// Replace a child, returns false if there is no such child
    pub fn replace<N: Into<Node>>(&mut self, index: usize, node: N) -> bool {
        match self.children.get_mut(index) {
            Some(slot) => { *slot = node.into(); true },
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Replace all children with a single text node
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        self.children.push(Node::Text(text.into()));
    }

    /// Return the concatenated text of all descendants
    pub fn text(&self) -> String {
        self.children.iter().fold(String::new(), |mut acc, n| {
            acc.push_str(&n.text());
            acc
        })
    }

    /// Depth-first search for an element with the given class,
    /// this element included
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self)
        }
        self.children.iter()
            .filter_map(|n| n.as_element())
            .find_map(|e| e.find_class(class))
    }

    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self)
        }
        self.children.iter_mut()
            .filter_map(|n| n.as_element_mut())
            .find_map(|e| e.find_class_mut(class))
    }

    /// Count the elements with the given class, this element included
    pub fn count_class(&self, class: &str) -> usize {
        let own = if self.has_class(class) { 1 } else { 0 };
        own + self.children.iter()
            .filter_map(|n| n.as_element())
            .map(|e| e.count_class(class))
            .sum::<usize>()
    }

    fn write_html(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(self.name);
        if let Some(class) = self.class {
            buffer.push_str(&format!(" class=\"{}\"", class));
        }
        for (k, v) in &self.attrs {
            buffer.push_str(&format!(" {}=\"{}\"", k, escape_html(v)));
        }
        if !self.style.is_empty() {
            let style = self.style.iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            buffer.push_str(&format!(" style=\"{}\"", escape_html(&style)));
        }
        buffer.push('>');
        if VOID_ELEMENTS.contains(&self.name) {
            return
        }
        for child in &self.children {
            child.write_html(buffer);
        }
        buffer.push_str(&format!("</{}>", self.name));
    }

    /// Serialize this element and its descendants
    pub fn to_html(&self) -> String {
        let mut buffer = String::new();
        self.write_html(&mut buffer);
        buffer
    }
}

use core::fmt::{Display, Formatter, Error as FmtError};
impl Display for Element {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "{}", self.to_html())
    }
}
