//! Styling: variant/size registry, behavior attributes, attribute merging.

pub mod behavior;
pub mod merge;
pub mod registry;

pub use behavior::Behavior;
pub use merge::{join_classes, merge};
pub use registry::{Size, Variant};
