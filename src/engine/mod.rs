// src/engine/mod.rs
//! All-pairs shortest paths over a graph with an optional blocked-edge overlay.
//!
//! [`compute`] never mutates the [`Graph`]: it copies the adjacency matrix,
//! masks the blocked cells to infinity and relaxes the copy. One graph can
//! therefore serve any number of runs with different [`BlockSet`]s.

pub mod floyd;

use crate::error::Result;
use crate::graph::{BlockSet, Graph, NodeId, NodeSet, SquareMatrix};
use std::sync::Arc;

/// Distance and predecessor matrices from one engine run.
///
/// Tied to the node set of the graph it was computed from; recompute after
/// the graph or the block set changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult {
    nodes: Arc<NodeSet>,
    distances: SquareMatrix<f64>,
    predecessors: SquareMatrix<Option<NodeId>>,
}

impl ShortestPathResult {
    #[cfg(test)]
    pub(crate) fn from_parts(
        nodes: Arc<NodeSet>,
        distances: SquareMatrix<f64>,
        predecessors: SquareMatrix<Option<NodeId>>,
    ) -> Self {
        Self {
            nodes,
            distances,
            predecessors,
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// `f64::INFINITY` when `target` is unreachable from `source`.
    #[must_use]
    pub fn distance_between(&self, source: NodeId, target: NodeId) -> f64 {
        self.distances.get(source, target)
    }

    /// Last node before `target` on the best path from `source`.
    #[must_use]
    pub fn predecessor(&self, source: NodeId, target: NodeId) -> Option<NodeId> {
        self.predecessors.get(source, target)
    }

    #[must_use]
    pub fn distances(&self) -> &SquareMatrix<f64> {
        &self.distances
    }

    #[must_use]
    pub fn predecessors(&self) -> &SquareMatrix<Option<NodeId>> {
        &self.predecessors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Runs Floyd-Warshall over `graph` with `blocked` edges removed.
///
/// # Errors
/// Returns `UnknownNode` if a blocked pair names a node outside the graph.
pub fn compute(graph: &Graph, blocked: &BlockSet) -> Result<ShortestPathResult> {
    let mut distances = effective_matrix(graph, blocked)?;
    let mut predecessors = floyd::initial_predecessors(&distances);
    floyd::relax(&mut distances, &mut predecessors);

    tracing::debug!(
        nodes = graph.len(),
        blocked = blocked.len(),
        "computed all-pairs shortest paths"
    );

    Ok(ShortestPathResult {
        nodes: Arc::clone(graph.node_set()),
        distances,
        predecessors,
    })
}

/// Copy of the adjacency matrix with every blocked direct edge set to infinity.
///
/// # Errors
/// Returns `UnknownNode` if a blocked pair names a node outside the graph.
pub fn effective_matrix(graph: &Graph, blocked: &BlockSet) -> Result<SquareMatrix<f64>> {
    let mut effective = graph.adjacency().clone();
    for (source, target) in blocked.iter() {
        let s = graph.node_index(source)?;
        let t = graph.node_index(target)?;
        if s == t {
            continue;
        }
        if effective.get(s, t).is_infinite() {
            tracing::warn!(source, target, "blocked edge does not exist in the graph");
            continue;
        }
        effective.set(s, t, f64::INFINITY);
    }
    Ok(effective)
}
