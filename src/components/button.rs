//! Button component: a styled, htmx-aware button.
//!
//! Renders a single `<button>` element whose class string is assembled from
//! the style registry (variant + size), a shape class (pill or rounded
//! rectangle), and fixed structural classes. Behavior and override
//! attributes are merged per the rules in [`crate::style::merge`].

use serde::{Deserialize, Serialize};

use crate::component::error::ConstructionError;
use crate::component::traits::Component;
use crate::html::{AttrMap, Element, NodeData, NodeId, Tree};
use crate::style::behavior::Behavior;
use crate::style::merge::{merge, CLASS_ATTR};
use crate::style::registry::{Size, Variant};

/// Shape class for pill buttons.
const PILL_CLASS: &str = "rounded-full";
/// Shape class for rounded-rectangle buttons.
const ROUNDED_CLASS: &str = "rounded-lg";
/// Fixed structural classes appended after style and shape.
const WEIGHT_CLASS: &str = "font-medium";
const ALIGN_CLASS: &str = "text-center";
const SPACING_CLASS: &str = "me-2 mb-2";

// ---------------------------------------------------------------------------
// ButtonKind
// ---------------------------------------------------------------------------

/// The element role of a button: the value of its `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonKind {
    /// The `type` attribute value for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A styled button descriptor.
///
/// Stateless: construct, render once or many times, every render produces
/// the same leaf node.
///
/// # Examples
///
/// ```ignore
/// let load_more = Button::new("Load More")
///     .variant(Variant::Green)
///     .behavior(Behavior::new().get("/load-more").target("#content"));
/// let pill = Button::new("Alternative").variant(Variant::Alternative).pill(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    label: String,
    #[serde(default)]
    variant: Variant,
    #[serde(default)]
    size: Size,
    #[serde(default)]
    kind: ButtonKind,
    #[serde(default)]
    pill: bool,
    #[serde(default)]
    behavior: Behavior,
    #[serde(default)]
    overrides: AttrMap,
}

impl Button {
    /// Create a new button with the given label and default styling.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            size: Size::default(),
            kind: ButtonKind::default(),
            pill: false,
            behavior: Behavior::new(),
            overrides: AttrMap::new(),
        }
    }

    /// Set the style variant (builder).
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size (builder).
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the element role (builder).
    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set pill shape instead of rounded rectangle (builder).
    pub fn pill(mut self, pill: bool) -> Self {
        self.pill = pill;
        self
    }

    /// Set the behavior attributes (builder).
    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Set an override attribute (builder).
    ///
    /// Overrides win over generated attributes, except `class`, which is
    /// concatenated onto the generated class string.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.set(name, value);
        self
    }

    /// Layer additional behavior over the button's own; `other` wins per
    /// verb. Used by forms to push form-level attributes onto a custom
    /// submit button.
    pub fn extend_behavior(mut self, other: &Behavior) -> Self {
        self.behavior.extend(other);
        self
    }

    /// The button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button renders with the pill shape.
    pub fn is_pill(&self) -> bool {
        self.pill
    }

    /// Assemble the generated class string: variant, size, weight, shape,
    /// alignment, spacing — space-joined in that order.
    fn class_string(&self) -> String {
        [
            self.variant.class(),
            self.size.class(),
            WEIGHT_CLASS,
            if self.pill { PILL_CLASS } else { ROUNDED_CLASS },
            ALIGN_CLASS,
            SPACING_CLASS,
        ]
        .join(" ")
    }
}

impl Component for Button {
    fn component_type(&self) -> &str {
        "Button"
    }

    fn render(&self, tree: &mut Tree) -> Result<NodeId, ConstructionError> {
        let base = AttrMap::new()
            .with("type", self.kind.as_str())
            .with(CLASS_ATTR, self.class_string());
        let attrs = merge(&base, &self.behavior, &self.overrides);

        let node = tree.insert(Element::new("button").with_attrs(attrs));
        tree.insert_child(node, NodeData::text(&self.label));
        Ok(node)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
