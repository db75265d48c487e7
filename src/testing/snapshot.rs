//! HTML writers.
//!
//! Functions for converting rendered markup trees into HTML strings, in a
//! compact form for `contains`-style assertions and a pretty-printed form
//! for snapshot testing.

use crate::component::error::ConstructionError;
use crate::component::traits::Component;
use crate::html::{NodeData, NodeId, Tree};
use crate::render::pipeline;

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Render a component and serialize the result as compact HTML.
///
/// # Examples
///
/// ```ignore
/// use lattice_ui::components::Button;
/// use lattice_ui::testing::render_to_html;
///
/// let html = render_to_html(&Button::new("OK")).unwrap();
/// assert!(html.contains(">OK</button>"));
/// ```
pub fn render_to_html(component: &dyn Component) -> Result<String, ConstructionError> {
    Ok(tree_to_html(&pipeline::render(component)?))
}

/// Render a component and serialize the result as indented HTML.
///
/// Same as [`render_to_html`] but one node per line, nested nodes indented
/// by two spaces. Suitable for snapshot assertions.
pub fn render_to_pretty_html(component: &dyn Component) -> Result<String, ConstructionError> {
    Ok(tree_to_pretty_html(&pipeline::render(component)?))
}

/// Serialize a tree as compact HTML with no added whitespace.
///
/// Text is escaped for element content, attribute values for double-quoted
/// attributes. An attribute with an empty value serializes as a bare name
/// (`required`, not `required=""`). Returns an empty string for a tree with
/// no root.
pub fn tree_to_html(tree: &Tree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        write_compact(tree, root, &mut out);
    }
    out
}

/// Serialize a tree as indented HTML, one node per line.
///
/// The output has no trailing newline.
pub fn tree_to_pretty_html(tree: &Tree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        write_pretty(tree, root, 0, &mut out);
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn write_compact(tree: &Tree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else { return };
    match node {
        NodeData::Text(text) => out.push_str(&escape_text(text)),
        NodeData::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in el.attrs.iter() {
                push_attr(out, name, value);
            }
            out.push('>');
            if is_void(&el.tag) {
                return;
            }
            for &child in tree.children(id) {
                write_compact(tree, child, out);
            }
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}

fn write_pretty(tree: &Tree, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else { return };
    let indent = "  ".repeat(depth);
    match node {
        NodeData::Text(text) => {
            out.push_str(&indent);
            out.push_str(&escape_text(text));
            out.push('\n');
        }
        NodeData::Element(el) => {
            out.push_str(&indent);
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in el.attrs.iter() {
                push_attr(out, name, value);
            }
            out.push('>');
            if is_void(&el.tag) {
                out.push('\n');
                return;
            }
            let children = tree.children(id);
            if children.is_empty() {
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
                out.push('\n');
                return;
            }
            out.push('\n');
            for &child in children {
                write_pretty(tree, child, depth + 1, out);
            }
            out.push_str(&indent);
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
            out.push('\n');
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
}

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
