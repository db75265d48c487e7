//! Construction errors raised by descriptor validation.

/// A descriptor violated a structural invariant.
///
/// Raised at validation time, before any node is created: a descriptor that
/// fails validation never produces a tree, partial or otherwise. Unknown
/// style keys are deliberately *not* errors — they fall back to the default
/// variant or size (see [`crate::style::registry`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// A `double` layout section must contain exactly two fields.
    #[error("double layout section requires exactly two fields, found {found}")]
    DoubleLayoutFieldCount { found: usize },
    /// Form field names must be non-empty.
    #[error("form field has an empty name")]
    EmptyFieldName,
    /// Form field names must be unique within one form.
    #[error("duplicate field name in form: {name}")]
    DuplicateFieldName { name: String },
    /// Accordion item ids must be unique within one accordion.
    #[error("duplicate accordion item id: {id}")]
    DuplicateItemId { id: String },
}
