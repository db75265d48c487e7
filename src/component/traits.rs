//! Component trait: validate and render.
//!
//! The `Component` trait is the uniform render hook every leaf and composite
//! component implements. A component is a plain data descriptor; rendering
//! is a pure function from the descriptor to a subtree of markup nodes.

use crate::component::error::ConstructionError;
use crate::html::{NodeId, Tree};

/// Core trait implemented by all components.
///
/// Object-safe: components render through `&dyn Component` in the pipeline,
/// and composites hold owned child descriptors rather than trait objects.
pub trait Component {
    /// The component's type name (e.g. "Button", "Form"). Used in
    /// diagnostics.
    fn component_type(&self) -> &str;

    /// Check structural invariants without rendering.
    ///
    /// Defaults to `Ok(())` for components with no invariants.
    fn validate(&self) -> Result<(), ConstructionError> {
        Ok(())
    }

    /// Render into `tree`, returning the id of the subtree's root node.
    ///
    /// The subtree is created parentless; composites attach it with
    /// [`Tree::reparent`]. Implementations validate before creating any
    /// node, so an invalid descriptor returns the error with no nodes of
    /// its own added to the tree.
    fn render(&self, tree: &mut Tree) -> Result<NodeId, ConstructionError>;
}
