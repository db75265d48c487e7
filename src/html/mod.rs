//! Markup tree: arena-backed nodes with ordered attributes.

pub mod attrs;
pub mod node;
pub mod query;
pub mod tree;

pub use attrs::AttrMap;
pub use node::{Element, NodeData, NodeId};
pub use tree::Tree;
