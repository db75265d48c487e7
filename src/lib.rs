//! # lattice-ui
//!
//! A declarative, htmx-ready HTML component library.
//!
//! Components are described as plain typed data ("descriptors") and rendered
//! into an immutable markup tree. Every element's attributes are the
//! deterministic merge of three sources: static visual-style tables,
//! behavioral htmx attributes (rewritten with the `hx-` prefix), and caller
//! overrides. The tree is handed to an external serializer; this crate never
//! speaks HTTP and never runs client-side behavior.
//!
//! ## Core Systems
//!
//! - **[`html`]** — Slotmap-backed markup tree: nodes, ordered attributes, queries
//! - **[`style`]** — Variant/size registry, htmx behavior map, attribute merging
//! - **[`component`]** — The `Component` trait and construction errors
//! - **[`components`]** — Built-in components: Button, Form, NavBar, Accordion
//! - **[`render`]** — The render pipeline: descriptor in, finished tree out
//! - **[`testing`]** — HTML writers for test assertions and snapshots
//!
//! ## Example
//!
//! ```
//! use lattice_ui::components::Button;
//! use lattice_ui::render::pipeline;
//! use lattice_ui::style::{Behavior, Variant};
//!
//! let button = Button::new("Load More")
//!     .variant(Variant::Green)
//!     .behavior(Behavior::new().get("/load-more").target("#content"));
//! let tree = pipeline::render(&button).unwrap();
//!
//! let root = tree.root().unwrap();
//! assert_eq!(tree.get(root).unwrap().attr("hx-get"), Some("/load-more"));
//! ```

// Foundation
pub mod html;

// Styling and merging
pub mod style;

// Component system
pub mod component;
pub mod components;

// Rendering
pub mod render;

// Test support
pub mod testing;
