//! Accordion component: collapsible panels with paired header/body linkage.
//!
//! Each item renders as a heading holding the toggle button and a hidden
//! body. The two halves reference each other through the item id
//! (`<id>-heading`, `<id>-body`), so ids must be unique within one
//! accordion. Every panel starts collapsed; expanding is the client-side
//! collapse plugin's job, driven by the `data-accordion-target` attribute.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::component::error::ConstructionError;
use crate::component::traits::Component;
use crate::html::{Element, NodeData, NodeId, Tree};
use crate::style::merge::CLASS_ATTR;

/// Prefix for auto-generated item ids; the suffix is the 1-based item
/// position, so repeated renders of the same descriptor reproduce the same
/// ids.
const AUTO_ID_PREFIX: &str = "accordion-item-";

const ROOT_ID: &str = "accordion-collapse";
const HEADER_BUTTON_CLASS: &str = "flex items-center justify-between w-full p-5 font-medium rtl:text-right text-gray-500 border border-b-0 border-gray-200 rounded-t-xl focus:ring-4 focus:ring-gray-200 dark:focus:ring-gray-800 dark:border-gray-700 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 gap-3";
const ICON_CLASS: &str = "w-3 h-3 rotate-180 shrink-0";
const BODY_INNER_CLASS: &str = "p-5 border border-b-0 border-gray-200 dark:border-gray-700 dark:bg-gray-900";
const PARAGRAPH_CLASS: &str = "mb-2 text-gray-500 dark:text-gray-400";

// ---------------------------------------------------------------------------
// AccordionItem
// ---------------------------------------------------------------------------

/// A single accordion panel: a title and its body paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionItem {
    title: String,
    #[serde(default)]
    paragraphs: Vec<String>,
    #[serde(default)]
    id: Option<String>,
}

impl AccordionItem {
    /// Create an item with the given title and no paragraphs.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
            id: None,
        }
    }

    /// Append a body paragraph (builder).
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Set an explicit id (builder). Without one, the id derives from the
    /// item's position in the owning accordion.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The id this item renders with at position `index` (0-based).
    pub fn effective_id(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{AUTO_ID_PREFIX}{}", index + 1),
        }
    }
}

// ---------------------------------------------------------------------------
// Accordion
// ---------------------------------------------------------------------------

/// An ordered collection of collapsible panels.
///
/// # Examples
///
/// ```ignore
/// let accordion = Accordion::new()
///     .item(AccordionItem::new("What is lattice-ui?")
///         .paragraph("A declarative HTML component library."))
///     .item(AccordionItem::new("Is it htmx-aware?")
///         .paragraph("Behavior attributes are rewritten to hx-* keys."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accordion {
    #[serde(default)]
    items: Vec<AccordionItem>,
}

impl Accordion {
    /// Create an empty accordion.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item (builder).
    pub fn item(mut self, item: AccordionItem) -> Self {
        self.items.push(item);
        self
    }

    /// Render one item's heading + body pair under `parent`.
    fn render_item(item: &AccordionItem, id: &str, tree: &mut Tree, parent: NodeId) {
        let heading = tree.insert_child(
            parent,
            Element::new("h2").with_attr("id", format!("{id}-heading")),
        );
        let toggle = tree.insert_child(
            heading,
            Element::new("button")
                .with_attr("type", "button")
                .with_attr(CLASS_ATTR, HEADER_BUTTON_CLASS)
                .with_attr("data-accordion-target", format!("#{id}-body"))
                .with_attr("aria-expanded", "false")
                .with_attr("aria-controls", format!("{id}-body")),
        );
        let title = tree.insert_child(toggle, NodeData::element("span"));
        tree.insert_child(title, NodeData::text(&item.title));
        let icon = tree.insert_child(
            toggle,
            Element::new("svg")
                .with_attr("data-accordion-icon", "")
                .with_attr(CLASS_ATTR, ICON_CLASS)
                .with_attr("aria-hidden", "true")
                .with_attr("xmlns", "http://www.w3.org/2000/svg")
                .with_attr("fill", "none")
                .with_attr("viewBox", "0 0 10 6"),
        );
        tree.insert_child(
            icon,
            Element::new("path")
                .with_attr("stroke", "currentColor")
                .with_attr("stroke-linecap", "round")
                .with_attr("stroke-linejoin", "round")
                .with_attr("stroke-width", "2")
                .with_attr("d", "M9 5 5 1 1 5"),
        );

        let body = tree.insert_child(
            parent,
            Element::new("div")
                .with_attr("id", format!("{id}-body"))
                .with_attr(CLASS_ATTR, "hidden")
                .with_attr("aria-labelledby", format!("{id}-heading")),
        );
        let inner = tree.insert_child(
            body,
            Element::new("div").with_attr(CLASS_ATTR, BODY_INNER_CLASS),
        );
        for text in &item.paragraphs {
            let paragraph =
                tree.insert_child(inner, Element::new("p").with_attr(CLASS_ATTR, PARAGRAPH_CLASS));
            tree.insert_child(paragraph, NodeData::text(text));
        }
    }
}

impl Component for Accordion {
    fn component_type(&self) -> &str {
        "Accordion"
    }

    fn validate(&self) -> Result<(), ConstructionError> {
        let mut seen = HashSet::new();
        for (index, item) in self.items.iter().enumerate() {
            let id = item.effective_id(index);
            if !seen.insert(id.clone()) {
                return Err(ConstructionError::DuplicateItemId { id });
            }
        }
        Ok(())
    }

    fn render(&self, tree: &mut Tree) -> Result<NodeId, ConstructionError> {
        self.validate()?;

        let root = tree.insert(
            Element::new("div")
                .with_attr("id", ROOT_ID)
                .with_attr("data-accordion", "collapse"),
        );
        for (index, item) in self.items.iter().enumerate() {
            let id = item.effective_id(index);
            Self::render_item(item, &id, tree, root);
        }
        Ok(root)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Accordion {
        Accordion::new()
            .item(
                AccordionItem::new("What is Flowbite?")
                    .paragraph("An open-source library of interactive components.")
                    .paragraph("Built on top of Tailwind CSS."),
            )
            .item(AccordionItem::new("Is there a Figma file available?")
                .paragraph("Yes."))
    }

    fn render(accordion: &Accordion) -> Tree {
        let mut tree = Tree::new();
        accordion.render(&mut tree).unwrap();
        tree
    }

    #[test]
    fn component_type_is_accordion() {
        assert_eq!(Accordion::new().component_type(), "Accordion");
    }

    #[test]
    fn root_element_carries_collapse_marker() {
        let tree = render(&sample());
        let node = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.id(), Some("accordion-collapse"));
        assert_eq!(node.attr("data-accordion"), Some("collapse"));
    }

    #[test]
    fn items_render_heading_body_pairs_in_order() {
        let tree = render(&sample());
        let root = tree.root().unwrap();
        let children = tree.children(root);
        assert_eq!(children.len(), 4);
        assert_eq!(tree.get(children[0]).unwrap().tag(), Some("h2"));
        assert_eq!(tree.get(children[1]).unwrap().tag(), Some("div"));
        assert_eq!(tree.get(children[2]).unwrap().tag(), Some("h2"));
        assert_eq!(tree.get(children[3]).unwrap().tag(), Some("div"));
    }

    #[test]
    fn auto_ids_derive_from_position() {
        let tree = render(&sample());
        assert!(tree.query_by_id("accordion-item-1-heading").is_some());
        assert!(tree.query_by_id("accordion-item-1-body").is_some());
        assert!(tree.query_by_id("accordion-item-2-heading").is_some());
        assert!(tree.query_by_id("accordion-item-2-body").is_some());
    }

    #[test]
    fn explicit_id_is_used_verbatim() {
        let accordion = Accordion::new().item(AccordionItem::new("FAQ").id("faq"));
        let tree = render(&accordion);
        assert!(tree.query_by_id("faq-heading").is_some());
        assert!(tree.query_by_id("faq-body").is_some());
    }

    #[test]
    fn toggle_references_its_own_body() {
        let tree = render(&sample());
        let heading = tree.query_by_id("accordion-item-1-heading").unwrap();
        let toggle = tree.get(tree.children(heading)[0]).unwrap();
        assert_eq!(toggle.tag(), Some("button"));
        assert_eq!(
            toggle.attr("data-accordion-target"),
            Some("#accordion-item-1-body")
        );
        assert_eq!(toggle.attr("aria-controls"), Some("accordion-item-1-body"));
        assert_eq!(toggle.attr("aria-expanded"), Some("false"));
    }

    #[test]
    fn body_is_hidden_and_labelled_by_heading() {
        let tree = render(&sample());
        let body = tree.query_by_id("accordion-item-2-body").unwrap();
        let node = tree.get(body).unwrap();
        assert!(node.has_class("hidden"));
        assert_eq!(node.attr("aria-labelledby"), Some("accordion-item-2-heading"));
    }

    #[test]
    fn paragraphs_render_in_order() {
        let tree = render(&sample());
        let body = tree.query_by_id("accordion-item-1-body").unwrap();
        let inner = tree.children(body)[0];
        let paragraphs = tree.children(inner);
        assert_eq!(paragraphs.len(), 2);
        let first_text = tree.children(paragraphs[0])[0];
        assert_eq!(
            tree.get(first_text).unwrap().as_text(),
            Some("An open-source library of interactive components.")
        );
    }

    #[test]
    fn duplicate_explicit_ids_are_a_construction_error() {
        let accordion = Accordion::new()
            .item(AccordionItem::new("A").id("faq"))
            .item(AccordionItem::new("B").id("faq"));
        assert_eq!(
            accordion.validate(),
            Err(ConstructionError::DuplicateItemId {
                id: "faq".to_owned()
            })
        );
        let mut tree = Tree::new();
        assert!(accordion.render(&mut tree).is_err());
        assert!(tree.is_empty());
    }

    #[test]
    fn explicit_id_colliding_with_generated_id_is_caught() {
        let accordion = Accordion::new()
            .item(AccordionItem::new("A"))
            .item(AccordionItem::new("B").id("accordion-item-1"));
        assert_eq!(
            accordion.validate(),
            Err(ConstructionError::DuplicateItemId {
                id: "accordion-item-1".to_owned()
            })
        );
    }

    #[test]
    fn repeated_renders_reproduce_ids() {
        let accordion = sample();
        let first = render(&accordion);
        let second = render(&accordion);
        for id in ["accordion-item-1-heading", "accordion-item-2-body"] {
            assert!(first.query_by_id(id).is_some());
            assert!(second.query_by_id(id).is_some());
        }
    }

    #[test]
    fn serde_accordion_descriptor() {
        let json = r#"{
            "items": [
                {"title": "One", "paragraphs": ["First body."]},
                {"title": "Two", "paragraphs": [], "id": "custom"}
            ]
        }"#;
        let accordion: Accordion = serde_json::from_str(json).unwrap();
        let tree = render(&accordion);
        assert!(tree.query_by_id("accordion-item-1-body").is_some());
        assert!(tree.query_by_id("custom-body").is_some());
    }
}
