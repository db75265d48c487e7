//! Tree queries: by id, tag, class; generic predicate matching.

use super::node::{NodeData, NodeId};
use super::tree::Tree;

impl Tree {
    /// Find the first node whose `id` attribute matches the given string.
    ///
    /// Iterates all nodes in the arena (not just the subtree under `root`).
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.id() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Find all element nodes with the given tag name.
    pub fn query_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| data.tag() == Some(tag))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all nodes whose `class` attribute contains the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| data.has_class(class))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all nodes matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Iterate over all `(NodeId, &NodeData)` pairs in the arena.
    ///
    /// This is a helper used by the query methods. It iterates in slotmap
    /// insertion order, which for an append-only render tree matches the
    /// order nodes were created.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}
