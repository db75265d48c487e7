//! Render pipeline: descriptor in, finished tree out.
//!
//! The pipeline is the library's entry point. It validates a component,
//! renders it into a fresh [`Tree`], sets the root, and hands the tree back
//! for the caller (typically an HTTP layer) to serialize. Rendering is a
//! pure function of the descriptor, so concurrent calls need no
//! coordination.

use crate::component::error::ConstructionError;
use crate::component::traits::Component;
use crate::html::Tree;

/// Validate `component` and render it into a fresh tree.
///
/// On success the returned tree's root is the component's root element. On
/// error no tree is returned at all — a failed validation never produces
/// partial markup.
pub fn render(component: &dyn Component) -> Result<Tree, ConstructionError> {
    if let Err(error) = component.validate() {
        tracing::warn!(
            component = component.component_type(),
            %error,
            "descriptor failed validation"
        );
        return Err(error);
    }

    let mut tree = Tree::new();
    let root = component.render(&mut tree)?;
    tree.set_root(root);
    tracing::debug!(
        component = component.component_type(),
        nodes = tree.len(),
        "rendered component"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::accordion::{Accordion, AccordionItem};
    use crate::components::button::Button;
    use crate::components::form::{Form, FormField, FormSection};

    #[test]
    fn renders_valid_component_with_root_set() {
        let tree = render(&Button::new("OK")).unwrap();
        let root = tree.root().expect("root is set");
        assert_eq!(tree.get(root).unwrap().tag(), Some("button"));
    }

    #[test]
    fn invalid_descriptor_yields_no_tree() {
        let form = Form::new().section(FormSection::double(vec![FormField::new("a", "A")]));
        let result = render(&form);
        assert_eq!(
            result.unwrap_err(),
            ConstructionError::DoubleLayoutFieldCount { found: 1 }
        );
    }

    #[test]
    fn rendering_twice_is_reproducible() {
        let accordion = Accordion::new()
            .item(AccordionItem::new("A").paragraph("a"))
            .item(AccordionItem::new("B").paragraph("b"));
        let first = render(&accordion).unwrap();
        let second = render(&accordion).unwrap();
        assert_eq!(first.len(), second.len());
    }
}
