//! NavBar component: responsive navigation with brand, buttons, and menu.
//!
//! Renders, in fixed order: the brand link (logo + name), a button cluster
//! (call-to-action, auxiliary buttons, mobile menu toggle), and the menu
//! list. The mobile toggle and the menu wrapper are linked through the
//! `navbar-cta` id, which the client-side collapse plugin reads.

use serde::{Deserialize, Serialize};

use crate::component::error::ConstructionError;
use crate::component::traits::Component;
use crate::components::button::Button;
use crate::html::{AttrMap, Element, NodeData, NodeId, Tree};
use crate::style::behavior::Behavior;
use crate::style::merge::{join_classes, merge, CLASS_ATTR};

/// Shared id linking the mobile toggle to the collapsible menu wrapper.
const MENU_ID: &str = "navbar-cta";

const NAV_CLASS: &str = "bg-white border-gray-200 dark:bg-gray-900";
const CONTAINER_CLASS: &str = "max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4";
const BRAND_CLASS: &str = "flex items-center space-x-3 rtl:space-x-reverse";
const BRAND_TEXT_CLASS: &str = "self-center text-2xl font-semibold whitespace-nowrap dark:text-white";
const CLUSTER_CLASS: &str = "flex md:order-2 space-x-3 md:space-x-0 rtl:space-x-reverse";
const CTA_CLASS: &str = "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800";
const TOGGLE_CLASS: &str = "inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600";
const MENU_WRAPPER_CLASS: &str = "items-center justify-between hidden w-full md:flex md:w-auto md:order-1";
const MENU_LIST_CLASS: &str = "flex flex-col font-medium p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:space-x-8 rtl:space-x-reverse md:flex-row md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700";

const ENTRY_BASE_CLASS: &str = "block py-2 px-3 md:p-0 rounded hover:bg-gray-100 md:hover:bg-transparent md:hover:text-blue-700 md:dark:hover:text-blue-500 dark:text-white dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent dark:border-gray-700";
const ENTRY_ACTIVE_CLASS: &str = "text-white bg-blue-700 md:bg-transparent md:text-blue-700 md:dark:text-blue-500";
const ENTRY_INACTIVE_CLASS: &str = "text-gray-900";

fn default_brand_href() -> String {
    "#".to_owned()
}

fn default_cta_label() -> String {
    "Get started".to_owned()
}

fn default_nav_class() -> String {
    NAV_CLASS.to_owned()
}

// ---------------------------------------------------------------------------
// NavMenuItem
// ---------------------------------------------------------------------------

/// A single entry in the navigation menu.
///
/// More than one entry may be marked active at once; the library renders
/// whatever the descriptor says and leaves exclusivity to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenuItem {
    text: String,
    href: String,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    class: String,
}

impl NavMenuItem {
    /// Create a menu entry with the given text and link target.
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            active: false,
            class: String::new(),
        }
    }

    /// Mark the entry as the current page (builder).
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set extra classes appended after the base and state classes (builder).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Whether the entry is marked active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The entry's full class string: base, then the state class selected by
    /// the active flag (never both), then the extra class.
    fn class_string(&self) -> String {
        let state = if self.active {
            ENTRY_ACTIVE_CLASS
        } else {
            ENTRY_INACTIVE_CLASS
        };
        join_classes(&join_classes(ENTRY_BASE_CLASS, state), &self.class)
    }
}

// ---------------------------------------------------------------------------
// NavBar
// ---------------------------------------------------------------------------

/// A responsive navigation bar descriptor.
///
/// # Examples
///
/// ```ignore
/// let navbar = NavBar::new("/static/logo.svg", "TechCorp")
///     .brand_href("/")
///     .menu_item(NavMenuItem::new("Home", "/").active(true))
///     .menu_item(NavMenuItem::new("About", "/about"))
///     .cta_label("Login")
///     .behavior(Behavior::new().boost(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBar {
    logo_src: String,
    brand_name: String,
    #[serde(default = "default_brand_href")]
    brand_href: String,
    #[serde(default)]
    menu_items: Vec<NavMenuItem>,
    #[serde(default = "default_cta_label")]
    cta_label: String,
    #[serde(default)]
    extra_buttons: Vec<Button>,
    #[serde(default = "default_nav_class")]
    class: String,
    #[serde(default)]
    behavior: Behavior,
}

impl NavBar {
    /// Create a navigation bar with the given logo source and brand name.
    pub fn new(logo_src: impl Into<String>, brand_name: impl Into<String>) -> Self {
        Self {
            logo_src: logo_src.into(),
            brand_name: brand_name.into(),
            brand_href: default_brand_href(),
            menu_items: Vec::new(),
            cta_label: default_cta_label(),
            extra_buttons: Vec::new(),
            class: NAV_CLASS.to_owned(),
            behavior: Behavior::new(),
        }
    }

    /// Set the brand link target (builder).
    pub fn brand_href(mut self, href: impl Into<String>) -> Self {
        self.brand_href = href.into();
        self
    }

    /// Append a menu entry (builder).
    pub fn menu_item(mut self, item: NavMenuItem) -> Self {
        self.menu_items.push(item);
        self
    }

    /// Set the call-to-action label (builder).
    pub fn cta_label(mut self, label: impl Into<String>) -> Self {
        self.cta_label = label.into();
        self
    }

    /// Append an auxiliary button after the call-to-action (builder).
    pub fn extra_button(mut self, button: Button) -> Self {
        self.extra_buttons.push(button);
        self
    }

    /// Set the `<nav>` element's class string (builder).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set the behavior attributes for the `<nav>` element (builder).
    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    fn render_brand(&self, tree: &mut Tree, container: NodeId) {
        let brand = tree.insert_child(
            container,
            Element::new("a")
                .with_attr("href", &self.brand_href)
                .with_attr(CLASS_ATTR, BRAND_CLASS),
        );
        tree.insert_child(
            brand,
            Element::new("img")
                .with_attr("src", &self.logo_src)
                .with_attr(CLASS_ATTR, "h-8")
                .with_attr("alt", format!("{} Logo", self.brand_name)),
        );
        let name = tree.insert_child(
            brand,
            Element::new("span").with_attr(CLASS_ATTR, BRAND_TEXT_CLASS),
        );
        tree.insert_child(name, NodeData::text(&self.brand_name));
    }

    fn render_buttons(
        &self,
        tree: &mut Tree,
        container: NodeId,
    ) -> Result<(), ConstructionError> {
        let cluster = tree.insert_child(
            container,
            Element::new("div").with_attr(CLASS_ATTR, CLUSTER_CLASS),
        );
        let cta = tree.insert_child(
            cluster,
            Element::new("button")
                .with_attr("type", "button")
                .with_attr(CLASS_ATTR, CTA_CLASS),
        );
        tree.insert_child(cta, NodeData::text(&self.cta_label));
        for button in &self.extra_buttons {
            let id = button.render(tree)?;
            tree.reparent(id, cluster);
        }
        self.render_mobile_toggle(tree, cluster);
        Ok(())
    }

    fn render_mobile_toggle(&self, tree: &mut Tree, cluster: NodeId) {
        let toggle = tree.insert_child(
            cluster,
            Element::new("button")
                .with_attr("data-collapse-toggle", MENU_ID)
                .with_attr("type", "button")
                .with_attr(CLASS_ATTR, TOGGLE_CLASS)
                .with_attr("aria-controls", MENU_ID)
                .with_attr("aria-expanded", "false"),
        );
        let label = tree.insert_child(toggle, Element::new("span").with_attr(CLASS_ATTR, "sr-only"));
        tree.insert_child(label, NodeData::text("Open main menu"));
        let icon = tree.insert_child(
            toggle,
            Element::new("svg")
                .with_attr(CLASS_ATTR, "w-5 h-5")
                .with_attr("aria-hidden", "true")
                .with_attr("xmlns", "http://www.w3.org/2000/svg")
                .with_attr("fill", "none")
                .with_attr("viewBox", "0 0 17 14"),
        );
        tree.insert_child(
            icon,
            Element::new("path")
                .with_attr("stroke", "currentColor")
                .with_attr("stroke-linecap", "round")
                .with_attr("stroke-linejoin", "round")
                .with_attr("stroke-width", "2")
                .with_attr("d", "M1 1h15M1 7h15M1 13h15"),
        );
    }

    fn render_menu(&self, tree: &mut Tree, container: NodeId) {
        let wrapper = tree.insert_child(
            container,
            Element::new("div")
                .with_attr(CLASS_ATTR, MENU_WRAPPER_CLASS)
                .with_attr("id", MENU_ID),
        );
        let list = tree.insert_child(
            wrapper,
            Element::new("ul").with_attr(CLASS_ATTR, MENU_LIST_CLASS),
        );
        for item in &self.menu_items {
            let entry = tree.insert_child(list, NodeData::element("li"));
            let mut link = Element::new("a")
                .with_attr("href", &item.href)
                .with_attr(CLASS_ATTR, item.class_string());
            if item.active {
                link = link.with_attr("aria-current", "page");
            }
            let link = tree.insert_child(entry, link);
            tree.insert_child(link, NodeData::text(&item.text));
        }
    }
}

impl Component for NavBar {
    fn component_type(&self) -> &str {
        "NavBar"
    }

    fn validate(&self) -> Result<(), ConstructionError> {
        for button in &self.extra_buttons {
            button.validate()?;
        }
        Ok(())
    }

    fn render(&self, tree: &mut Tree) -> Result<NodeId, ConstructionError> {
        self.validate()?;

        let base = AttrMap::new().with(CLASS_ATTR, &self.class);
        let attrs = merge(&base, &self.behavior, &AttrMap::new());
        let nav = tree.insert(Element::new("nav").with_attrs(attrs));
        let container = tree.insert_child(
            nav,
            Element::new("div").with_attr(CLASS_ATTR, CONTAINER_CLASS),
        );
        self.render_brand(tree, container);
        self.render_buttons(tree, container)?;
        self.render_menu(tree, container);
        Ok(nav)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NavBar {
        NavBar::new("/static/logo.svg", "TechCorp")
            .brand_href("/")
            .menu_item(NavMenuItem::new("Home", "/").active(true))
            .menu_item(NavMenuItem::new("About", "/about"))
            .cta_label("Login")
    }

    fn render(navbar: &NavBar) -> Tree {
        let mut tree = Tree::new();
        navbar.render(&mut tree).unwrap();
        tree
    }

    #[test]
    fn component_type_is_navbar() {
        assert_eq!(sample().component_type(), "NavBar");
    }

    #[test]
    fn nav_element_with_default_class() {
        let tree = render(&sample());
        let node = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(node.tag(), Some("nav"));
        assert_eq!(node.attr("class"), Some(NAV_CLASS));
    }

    #[test]
    fn behavior_lands_on_nav_element() {
        let tree = render(&sample().behavior(Behavior::new().boost(true)));
        let node = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(node.attr("hx-boost"), Some("true"));
    }

    #[test]
    fn brand_link_holds_logo_and_name() {
        let tree = render(&sample());
        let container = tree.children(tree.root().unwrap())[0];
        let brand = tree.children(container)[0];
        let node = tree.get(brand).unwrap();
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.attr("href"), Some("/"));

        let children = tree.children(brand);
        let logo = tree.get(children[0]).unwrap();
        assert_eq!(logo.tag(), Some("img"));
        assert_eq!(logo.attr("src"), Some("/static/logo.svg"));
        assert_eq!(logo.attr("alt"), Some("TechCorp Logo"));

        let name = tree.get(children[1]).unwrap();
        assert_eq!(name.tag(), Some("span"));
        let text = tree.children(children[1])[0];
        assert_eq!(tree.get(text).unwrap().as_text(), Some("TechCorp"));
    }

    #[test]
    fn cluster_order_is_cta_extras_toggle() {
        let navbar = sample().extra_button(Button::new("Log In"));
        let tree = render(&navbar);
        let container = tree.children(tree.root().unwrap())[0];
        let cluster = tree.children(container)[1];
        let children = tree.children(cluster);
        assert_eq!(children.len(), 3);

        let cta_text = tree.children(children[0])[0];
        assert_eq!(tree.get(cta_text).unwrap().as_text(), Some("Login"));

        let extra_text = tree.children(children[1])[0];
        assert_eq!(tree.get(extra_text).unwrap().as_text(), Some("Log In"));

        let toggle = tree.get(children[2]).unwrap();
        assert_eq!(toggle.attr("data-collapse-toggle"), Some("navbar-cta"));
    }

    #[test]
    fn mobile_toggle_linkage() {
        let tree = render(&sample());
        let toggles = tree.query_all(|node| node.attr("data-collapse-toggle").is_some());
        assert_eq!(toggles.len(), 1);
        let toggle = tree.get(toggles[0]).unwrap();
        assert_eq!(toggle.attr("aria-controls"), Some("navbar-cta"));
        assert_eq!(toggle.attr("aria-expanded"), Some("false"));
        // The wrapper it controls exists.
        assert!(tree.query_by_id("navbar-cta").is_some());
    }

    #[test]
    fn menu_entries_in_order() {
        let tree = render(&sample());
        let entries = tree.query_by_tag("li");
        assert_eq!(entries.len(), 2);
        let first_link = tree.children(entries[0])[0];
        let text = tree.children(first_link)[0];
        assert_eq!(tree.get(text).unwrap().as_text(), Some("Home"));
    }

    #[test]
    fn active_entry_gets_active_class_and_marker() {
        let tree = render(&sample());
        let entries = tree.query_by_tag("li");
        let home = tree.get(tree.children(entries[0])[0]).unwrap();
        assert!(home.has_class("bg-blue-700"));
        assert!(!home.has_class("text-gray-900"));
        assert_eq!(home.attr("aria-current"), Some("page"));
    }

    #[test]
    fn inactive_entry_gets_inactive_class_and_no_marker() {
        let tree = render(&sample());
        let entries = tree.query_by_tag("li");
        let about = tree.get(tree.children(entries[1])[0]).unwrap();
        assert!(about.has_class("text-gray-900"));
        assert!(!about.has_class("bg-blue-700"));
        assert_eq!(about.attr("aria-current"), None);
    }

    #[test]
    fn extra_entry_class_is_appended() {
        let navbar = NavBar::new("logo.svg", "X")
            .menu_item(NavMenuItem::new("Docs", "/docs").class("underline"));
        let tree = render(&navbar);
        let entries = tree.query_by_tag("li");
        let link = tree.get(tree.children(entries[0])[0]).unwrap();
        let class = link.attr("class").unwrap();
        assert!(class.ends_with("text-gray-900 underline"), "got: {class}");
    }

    #[test]
    fn multiple_active_entries_are_allowed() {
        let navbar = NavBar::new("logo.svg", "X")
            .menu_item(NavMenuItem::new("A", "/a").active(true))
            .menu_item(NavMenuItem::new("B", "/b").active(true));
        let tree = render(&navbar);
        let marked = tree.query_all(|node| node.attr("aria-current") == Some("page"));
        assert_eq!(marked.len(), 2);
    }

    #[test]
    fn fixed_section_order() {
        let tree = render(&sample());
        let container = tree.children(tree.root().unwrap())[0];
        let children = tree.children(container);
        assert_eq!(children.len(), 3);
        assert_eq!(tree.get(children[0]).unwrap().tag(), Some("a"));
        assert_eq!(tree.get(children[1]).unwrap().tag(), Some("div"));
        assert_eq!(tree.get(children[2]).unwrap().id(), Some("navbar-cta"));
    }

    #[test]
    fn serde_navbar_descriptor() {
        let json = r#"{
            "logo_src": "/static/logo.svg",
            "brand_name": "TechCorp",
            "menu_items": [
                {"text": "Home", "href": "/", "active": true},
                {"text": "Contact", "href": "/contact"}
            ],
            "behavior": {"boost": "true"}
        }"#;
        let navbar: NavBar = serde_json::from_str(json).unwrap();
        let tree = render(&navbar);
        assert_eq!(tree.query_by_tag("li").len(), 2);
        assert_eq!(
            tree.get(tree.root().unwrap()).unwrap().attr("hx-boost"),
            Some("true")
        );
    }
}
