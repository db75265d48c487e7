//! Form component: floating-label fields with htmx-powered validation hooks.
//!
//! A form is an ordered list of sections, each holding one or two fields in
//! a `single` (stacked) or `double` (two-column) layout, followed by a
//! submit control. Every field renders as a floating-label group: the input,
//! its label, and an empty `validation-message` container that a server-side
//! handler can populate out-of-band by element id.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::component::error::ConstructionError;
use crate::component::traits::Component;
use crate::components::button::{Button, ButtonKind};
use crate::html::{AttrMap, Element, NodeData, NodeId, Tree};
use crate::style::behavior::Behavior;
use crate::style::merge::{merge, CLASS_ATTR};

/// Prefix for field element ids: field `name` becomes id `floating_<name>`.
pub const FIELD_ID_PREFIX: &str = "floating_";

/// Class of the empty container reserved for validation messages.
pub const VALIDATION_MESSAGE_CLASS: &str = "validation-message";

const FORM_CLASS: &str = "max-w-md mx-auto";
const GROUP_CLASS: &str = "relative z-0 w-full mb-5 group";
const TWO_COLUMN_CLASS: &str = "grid md:grid-cols-2 md:gap-6";
const INPUT_CLASS: &str = "block py-2.5 px-0 w-full text-sm text-gray-900 bg-transparent border-0 border-b-2 border-gray-300 appearance-none dark:text-white dark:border-gray-600 dark:focus:border-blue-500 focus:outline-none focus:ring-0 focus:border-blue-600 peer";
const LABEL_CLASS: &str = "peer-focus:font-medium absolute text-sm text-gray-500 dark:text-gray-400 duration-300 transform -translate-y-6 scale-75 top-3 -z-10 origin-[0] peer-focus:start-0 rtl:peer-focus:translate-x-1/4 rtl:peer-focus:left-auto peer-focus:text-blue-600 peer-focus:dark:text-blue-500 peer-placeholder-shown:scale-100 peer-placeholder-shown:translate-y-0 peer-focus:scale-75 peer-focus:-translate-y-6";
const DEFAULT_SUBMIT_CLASS: &str = "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800";

fn default_required() -> bool {
    true
}

fn default_placeholder() -> String {
    " ".to_owned()
}

fn default_submit_label() -> String {
    "Submit".to_owned()
}

fn default_form_class() -> String {
    FORM_CLASS.to_owned()
}

// ---------------------------------------------------------------------------
// InputKind
// ---------------------------------------------------------------------------

/// The input type of a form field: the value of its `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Tel,
    Number,
    Url,
    Search,
    Date,
    Textarea,
}

impl InputKind {
    /// The `type` attribute value for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::Textarea => "textarea",
        }
    }
}

// ---------------------------------------------------------------------------
// FormField
// ---------------------------------------------------------------------------

/// A single form field descriptor.
///
/// The field `name` doubles as the uniqueness key within the owning form and
/// derives the element id (`floating_<name>`), which the label's `for`
/// attribute and out-of-band validation updates both rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    name: String,
    label: String,
    #[serde(default)]
    kind: InputKind,
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default = "default_required")]
    required: bool,
    #[serde(default = "default_placeholder")]
    placeholder: String,
    #[serde(default)]
    behavior: Behavior,
    #[serde(default)]
    overrides: AttrMap,
}

impl FormField {
    /// Create a text field with the given name and label.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: InputKind::default(),
            pattern: None,
            required: true,
            placeholder: " ".to_owned(),
            behavior: Behavior::new(),
            overrides: AttrMap::new(),
        }
    }

    /// Set the input kind (builder).
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set a validation regex pattern (builder).
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set whether the field is required (builder). Defaults to `true`.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the placeholder text (builder). Defaults to a single space, which
    /// keeps the floating label animation working.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the behavior attributes (builder).
    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Set an override attribute (builder). An override `class` is spliced
    /// onto the generated input class rather than replacing it.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.set(name, value);
        self
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The derived element id: `floating_<name>`.
    pub fn element_id(&self) -> String {
        format!("{FIELD_ID_PREFIX}{}", self.name)
    }
}

// ---------------------------------------------------------------------------
// FormSection
// ---------------------------------------------------------------------------

/// Layout of a form section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLayout {
    /// Fields stack vertically.
    #[default]
    Single,
    /// Exactly two fields side by side in a two-column grid.
    Double,
}

/// A section of a form: one or two fields plus a layout mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSection {
    fields: Vec<FormField>,
    #[serde(default)]
    layout: SectionLayout,
}

impl FormSection {
    /// Create a stacked section from the given fields.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            layout: SectionLayout::Single,
        }
    }

    /// Create a two-column section. The field count is validated when the
    /// owning form is rendered: `double` requires exactly two fields.
    pub fn double(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            layout: SectionLayout::Double,
        }
    }

    /// Set the layout mode (builder).
    pub fn layout(mut self, layout: SectionLayout) -> Self {
        self.layout = layout;
        self
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// A floating-label form descriptor.
///
/// # Examples
///
/// ```ignore
/// let form = Form::new()
///     .section(FormSection::new(vec![
///         FormField::new("email", "Email address").kind(InputKind::Email),
///     ]))
///     .section(FormSection::double(vec![
///         FormField::new("first_name", "First name"),
///         FormField::new("last_name", "Last name"),
///     ]))
///     .behavior(Behavior::new().post("/submit-form").swap("outerHTML"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    sections: Vec<FormSection>,
    #[serde(default = "default_submit_label")]
    submit_label: String,
    #[serde(default = "default_form_class")]
    class: String,
    #[serde(default)]
    behavior: Behavior,
    #[serde(default)]
    custom_submit: Option<Button>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Create an empty form with the default class and submit label.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            submit_label: default_submit_label(),
            class: FORM_CLASS.to_owned(),
            behavior: Behavior::new(),
            custom_submit: None,
        }
    }

    /// Append a section (builder).
    pub fn section(mut self, section: FormSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Set the default submit button's label (builder).
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Set the form element's class string (builder).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set the form-level behavior attributes (builder). These are rewritten
    /// onto the `<form>` element and layered over a custom submit button's
    /// own behavior.
    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Use a custom button as the submit control (builder). Its kind is
    /// forced to `submit` at render time.
    pub fn custom_submit(mut self, button: Button) -> Self {
        self.custom_submit = Some(button);
        self
    }

    /// Render one field as a floating-label group under `parent`.
    fn render_field(field: &FormField, tree: &mut Tree, parent: NodeId) {
        let mut base = AttrMap::new()
            .with("type", field.kind.as_str())
            .with("name", &field.name)
            .with("id", field.element_id())
            .with("placeholder", &field.placeholder);
        if field.required {
            base.set("required", "");
        }
        if let Some(pattern) = &field.pattern {
            base.set("pattern", pattern);
        }
        base.set(CLASS_ATTR, INPUT_CLASS);
        let attrs = merge(&base, &field.behavior, &field.overrides);

        let group = tree.insert_child(parent, Element::new("div").with_attr(CLASS_ATTR, GROUP_CLASS));
        tree.insert_child(group, Element::new("input").with_attrs(attrs));
        let label = tree.insert_child(
            group,
            Element::new("label")
                .with_attr("for", field.element_id())
                .with_attr(CLASS_ATTR, LABEL_CLASS),
        );
        tree.insert_child(label, NodeData::text(&field.label));
        // Reserved for out-of-band validation updates; stays empty here.
        tree.insert_child(
            group,
            Element::new("div").with_attr(CLASS_ATTR, VALIDATION_MESSAGE_CLASS),
        );
    }

    /// Render one section under the form element.
    fn render_section(
        section: &FormSection,
        tree: &mut Tree,
        form: NodeId,
    ) -> Result<(), ConstructionError> {
        match section.layout {
            SectionLayout::Single => {
                let wrapper = tree.insert_child(form, NodeData::element("div"));
                for field in &section.fields {
                    Self::render_field(field, tree, wrapper);
                }
            }
            SectionLayout::Double => {
                let [first, second] = section.fields.as_slice() else {
                    return Err(ConstructionError::DoubleLayoutFieldCount {
                        found: section.fields.len(),
                    });
                };
                let wrapper = tree.insert_child(
                    form,
                    Element::new("div").with_attr(CLASS_ATTR, TWO_COLUMN_CLASS),
                );
                Self::render_field(first, tree, wrapper);
                Self::render_field(second, tree, wrapper);
            }
        }
        Ok(())
    }

    /// Render the submit control under the form element.
    fn render_submit(&self, tree: &mut Tree, form: NodeId) -> Result<(), ConstructionError> {
        match &self.custom_submit {
            Some(button) => {
                let submit = button
                    .clone()
                    .kind(ButtonKind::Submit)
                    .extend_behavior(&self.behavior);
                let id = submit.render(tree)?;
                tree.reparent(id, form);
            }
            None => {
                let button = tree.insert_child(
                    form,
                    Element::new("button")
                        .with_attr("type", "submit")
                        .with_attr(CLASS_ATTR, DEFAULT_SUBMIT_CLASS),
                );
                tree.insert_child(button, NodeData::text(&self.submit_label));
            }
        }
        Ok(())
    }
}

impl Component for Form {
    fn component_type(&self) -> &str {
        "Form"
    }

    fn validate(&self) -> Result<(), ConstructionError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.layout == SectionLayout::Double && section.fields.len() != 2 {
                return Err(ConstructionError::DoubleLayoutFieldCount {
                    found: section.fields.len(),
                });
            }
            for field in &section.fields {
                if field.name.is_empty() {
                    return Err(ConstructionError::EmptyFieldName);
                }
                if !seen.insert(field.name.as_str()) {
                    return Err(ConstructionError::DuplicateFieldName {
                        name: field.name.clone(),
                    });
                }
            }
        }
        if let Some(button) = &self.custom_submit {
            button.validate()?;
        }
        Ok(())
    }

    fn render(&self, tree: &mut Tree) -> Result<NodeId, ConstructionError> {
        self.validate()?;

        let base = AttrMap::new().with(CLASS_ATTR, &self.class);
        let attrs = merge(&base, &self.behavior, &AttrMap::new());
        let form = tree.insert(Element::new("form").with_attrs(attrs));

        for section in &self.sections {
            Self::render_section(section, tree, form)?;
        }
        self.render_submit(tree, form)?;
        Ok(form)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::registry::Variant;

    fn render(form: &Form) -> Tree {
        let mut tree = Tree::new();
        form.render(&mut tree).unwrap();
        tree
    }

    #[test]
    fn component_type_is_form() {
        assert_eq!(Form::new().component_type(), "Form");
    }

    #[test]
    fn empty_form_renders_form_element_with_default_class() {
        let tree = render(&Form::new());
        let root = tree.root().unwrap();
        let node = tree.get(root).unwrap();
        assert_eq!(node.tag(), Some("form"));
        assert_eq!(node.attr("class"), Some(FORM_CLASS));
    }

    #[test]
    fn form_behavior_is_rewritten_onto_form_element() {
        let form = Form::new().behavior(Behavior::new().post("/submit-form").swap("outerHTML"));
        let tree = render(&form);
        let node = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(node.attr("hx-post"), Some("/submit-form"));
        assert_eq!(node.attr("hx-swap"), Some("outerHTML"));
    }

    #[test]
    fn field_renders_floating_group() {
        let form = Form::new().section(FormSection::new(vec![FormField::new(
            "email",
            "Email address",
        )
        .kind(InputKind::Email)]));
        let tree = render(&form);

        let input = tree.query_by_id("floating_email").expect("input id");
        let node = tree.get(input).unwrap();
        assert_eq!(node.tag(), Some("input"));
        assert_eq!(node.attr("type"), Some("email"));
        assert_eq!(node.attr("name"), Some("email"));
        assert_eq!(node.attr("placeholder"), Some(" "));
        assert_eq!(node.attr("required"), Some(""));
        assert_eq!(node.attr("class"), Some(INPUT_CLASS));

        // Label points at the input by id.
        let labels = tree.query_by_tag("label");
        assert_eq!(labels.len(), 1);
        assert_eq!(tree.get(labels[0]).unwrap().attr("for"), Some("floating_email"));

        // Empty validation container is reserved next to the input.
        let containers = tree.query_by_class(VALIDATION_MESSAGE_CLASS);
        assert_eq!(containers.len(), 1);
        assert!(tree.children(containers[0]).is_empty());
    }

    #[test]
    fn optional_field_omits_required() {
        let form = Form::new().section(FormSection::new(vec![
            FormField::new("company", "Company (Ex. Google)").required(false),
        ]));
        let tree = render(&form);
        let input = tree.query_by_id("floating_company").unwrap();
        assert_eq!(tree.get(input).unwrap().attr("required"), None);
    }

    #[test]
    fn pattern_is_emitted_when_set() {
        let form = Form::new().section(FormSection::new(vec![FormField::new(
            "phone",
            "Phone number (123-456-7890)",
        )
        .kind(InputKind::Tel)
        .pattern("[0-9]{3}-[0-9]{3}-[0-9]{4}")]));
        let tree = render(&form);
        let input = tree.query_by_id("floating_phone").unwrap();
        assert_eq!(
            tree.get(input).unwrap().attr("pattern"),
            Some("[0-9]{3}-[0-9]{3}-[0-9]{4}")
        );
    }

    #[test]
    fn field_override_class_is_spliced_not_replaced() {
        let form = Form::new().section(FormSection::new(vec![
            FormField::new("bio", "Biography").with_attr("class", "uppercase"),
        ]));
        let tree = render(&form);
        let input = tree.query_by_id("floating_bio").unwrap();
        let class = tree.get(input).unwrap().attr("class").unwrap();
        assert_eq!(class, format!("{INPUT_CLASS} uppercase"));
    }

    #[test]
    fn field_behavior_is_prefixed() {
        let form = Form::new().section(FormSection::new(vec![FormField::new(
            "username",
            "Username",
        )
        .behavior(
            Behavior::new()
                .post("/check-username")
                .trigger("change")
                .target("next .validation-message"),
        )]));
        let tree = render(&form);
        let input = tree.query_by_id("floating_username").unwrap();
        let node = tree.get(input).unwrap();
        assert_eq!(node.attr("hx-post"), Some("/check-username"));
        assert_eq!(node.attr("hx-trigger"), Some("change"));
        assert_eq!(node.attr("hx-target"), Some("next .validation-message"));
    }

    #[test]
    fn single_section_stacks_fields_in_plain_div() {
        let form = Form::new().section(FormSection::new(vec![
            FormField::new("a", "A"),
            FormField::new("b", "B"),
        ]));
        let tree = render(&form);
        let root = tree.root().unwrap();
        let wrapper = tree.children(root)[0];
        let node = tree.get(wrapper).unwrap();
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.attr("class"), None);
        assert_eq!(tree.children(wrapper).len(), 2);
    }

    #[test]
    fn double_section_renders_two_column_grid() {
        let form = Form::new().section(FormSection::double(vec![
            FormField::new("first_name", "First name"),
            FormField::new("last_name", "Last name"),
        ]));
        let tree = render(&form);
        let root = tree.root().unwrap();
        let wrapper = tree.children(root)[0];
        let node = tree.get(wrapper).unwrap();
        assert_eq!(node.attr("class"), Some(TWO_COLUMN_CLASS));
        assert_eq!(tree.children(wrapper).len(), 2);
    }

    #[test]
    fn double_section_with_one_field_is_a_construction_error() {
        let form = Form::new().section(FormSection::double(vec![FormField::new("a", "A")]));
        assert_eq!(
            form.validate(),
            Err(ConstructionError::DoubleLayoutFieldCount { found: 1 })
        );
        let mut tree = Tree::new();
        assert!(form.render(&mut tree).is_err());
        assert!(tree.is_empty());
    }

    #[test]
    fn double_section_with_three_fields_is_a_construction_error() {
        let form = Form::new().section(FormSection::double(vec![
            FormField::new("a", "A"),
            FormField::new("b", "B"),
            FormField::new("c", "C"),
        ]));
        assert_eq!(
            form.validate(),
            Err(ConstructionError::DoubleLayoutFieldCount { found: 3 })
        );
    }

    #[test]
    fn duplicate_field_names_are_a_construction_error() {
        let form = Form::new()
            .section(FormSection::new(vec![FormField::new("email", "Email")]))
            .section(FormSection::new(vec![FormField::new("email", "Email again")]));
        assert_eq!(
            form.validate(),
            Err(ConstructionError::DuplicateFieldName {
                name: "email".to_owned()
            })
        );
    }

    #[test]
    fn empty_field_name_is_a_construction_error() {
        let form = Form::new().section(FormSection::new(vec![FormField::new("", "Blank")]));
        assert_eq!(form.validate(), Err(ConstructionError::EmptyFieldName));
    }

    #[test]
    fn default_submit_button() {
        let form = Form::new().submit_label("Register");
        let tree = render(&form);
        let buttons = tree.query_by_tag("button");
        assert_eq!(buttons.len(), 1);
        let node = tree.get(buttons[0]).unwrap();
        assert_eq!(node.attr("type"), Some("submit"));
        assert_eq!(node.attr("class"), Some(DEFAULT_SUBMIT_CLASS));
        let text = tree.children(buttons[0])[0];
        assert_eq!(tree.get(text).unwrap().as_text(), Some("Register"));
    }

    #[test]
    fn custom_submit_is_forced_to_submit_kind() {
        let form = Form::new()
            .custom_submit(Button::new("Register").variant(Variant::Green))
            .behavior(Behavior::new().post("/submit-form"));
        let tree = render(&form);
        let buttons = tree.query_by_tag("button");
        assert_eq!(buttons.len(), 1);
        let node = tree.get(buttons[0]).unwrap();
        assert_eq!(node.attr("type"), Some("submit"));
        // Attached under the form element, after the sections.
        assert_eq!(tree.parent(buttons[0]), tree.root());
    }

    #[test]
    fn form_behavior_wins_on_custom_submit_collision() {
        let form = Form::new()
            .custom_submit(
                Button::new("Go").behavior(Behavior::new().post("/button").trigger("click")),
            )
            .behavior(Behavior::new().post("/form"));
        let tree = render(&form);
        let button = tree.query_by_tag("button")[0];
        let node = tree.get(button).unwrap();
        assert_eq!(node.attr("hx-post"), Some("/form"));
        assert_eq!(node.attr("hx-trigger"), Some("click"));
    }

    #[test]
    fn sections_precede_submit_control() {
        let form = Form::new()
            .section(FormSection::new(vec![FormField::new("a", "A")]))
            .section(FormSection::new(vec![FormField::new("b", "B")]));
        let tree = render(&form);
        let root = tree.root().unwrap();
        let children = tree.children(root);
        assert_eq!(children.len(), 3);
        assert_eq!(tree.get(children[0]).unwrap().tag(), Some("div"));
        assert_eq!(tree.get(children[1]).unwrap().tag(), Some("div"));
        assert_eq!(tree.get(children[2]).unwrap().tag(), Some("button"));
    }

    #[test]
    fn serde_form_descriptor() {
        let json = r#"{
            "sections": [
                {"fields": [{"name": "email", "label": "Email", "kind": "email"}]},
                {
                    "fields": [
                        {"name": "first_name", "label": "First name"},
                        {"name": "last_name", "label": "Last name"}
                    ],
                    "layout": "double"
                }
            ],
            "behavior": {"post": "/submit-form"}
        }"#;
        let form: Form = serde_json::from_str(json).unwrap();
        assert_eq!(form.validate(), Ok(()));
        let tree = render(&form);
        assert!(tree.query_by_id("floating_email").is_some());
        assert!(tree.query_by_id("floating_last_name").is_some());
        assert_eq!(
            tree.get(tree.root().unwrap()).unwrap().attr("hx-post"),
            Some("/submit-form")
        );
    }
}
