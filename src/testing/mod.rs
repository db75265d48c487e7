//! Test support: HTML writers for snapshot and string assertions.
//!
//! Serialization for transport is the HTTP layer's job, not this crate's.
//! These helpers exist so tests (this crate's and downstream ones) can
//! assert on rendered trees as text.

pub mod snapshot;

pub use snapshot::{render_to_html, render_to_pretty_html, tree_to_html, tree_to_pretty_html};
