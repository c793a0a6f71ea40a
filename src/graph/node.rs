// src/graph/node.rs
//! Node identity: labels and the dense indices the matrices are keyed by.

use crate::error::{Result, RouteError};
use std::collections::HashMap;
use std::fmt;

/// Row/column index of a node in every matrix derived from one graph.
///
/// Using a newtype keeps node indices from mixing with weights or counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered, unique node labels with O(1) lookup in both directions.
///
/// Insertion order is the matrix ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
}

impl NodeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, registering it if unseen.
    pub fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len());
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        id
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Looks up `label`.
    ///
    /// # Errors
    /// Returns `UnknownNode` if the label was never registered.
    pub fn resolve(&self, label: &str) -> Result<NodeId> {
        self.get(label)
            .ok_or_else(|| RouteError::UnknownNode(label.to_string()))
    }

    /// Label of `id`. Ids always come from this set, so the index is in range.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.0]
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len()).map(NodeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_preserves_first_seen_order() {
        let mut nodes = NodeSet::new();
        let b = nodes.intern("B");
        let a = nodes.intern("A");
        assert_eq!(nodes.intern("B"), b);
        assert_eq!(b.index(), 0);
        assert_eq!(a.index(), 1);
        assert_eq!(nodes.labels(), &["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_resolve_unknown() {
        let nodes = NodeSet::new();
        let err = nodes.resolve("Z").unwrap_err();
        assert!(matches!(err, RouteError::UnknownNode(ref l) if l == "Z"));
    }

    #[test]
    fn test_node_id_conversions() {
        let id: NodeId = 7usize.into();
        let back: usize = id.into();
        assert_eq!(back, 7);
        assert_eq!(id.to_string(), "#7");
    }
}
