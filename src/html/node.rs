//! Node types: NodeId, NodeData, Element.

use slotmap::new_key_type;

use super::attrs::AttrMap;

new_key_type! {
    /// Unique identifier for a markup node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// An element node: tag name plus ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name (e.g. "button", "div").
    pub tag: String,
    /// Ordered element attributes.
    pub attrs: AttrMap,
}

impl Element {
    /// Create a new element with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: AttrMap::new(),
        }
    }

    /// Set a single attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Replace the attribute map (builder).
    ///
    /// Used by components after merging attribute sources into a final map.
    pub fn with_attrs(mut self, attrs: AttrMap) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Data associated with a single markup node: an element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Element(Element),
    Text(String),
}

impl NodeData {
    /// Create an element node with no attributes.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(Element::new(tag))
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The tag name, if this node is an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element(el) => Some(&el.tag),
            Self::Text(_) => None,
        }
    }

    /// The attribute map, if this node is an element.
    pub fn attrs(&self) -> Option<&AttrMap> {
        match self {
            Self::Element(el) => Some(&el.attrs),
            Self::Text(_) => None,
        }
    }

    /// Look up an attribute value on an element node.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs().and_then(|attrs| attrs.get(name))
    }

    /// The `id` attribute, if present.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The text content, if this node is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Whether this node is an element.
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Whether an element node's `class` attribute contains the given class.
    ///
    /// Classes are matched on whitespace-separated words, so `"a b"` has the
    /// classes `"a"` and `"b"` but not `"a b"`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|value| value.split_whitespace().any(|part| part == class))
    }
}

impl From<Element> for NodeData {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}
