// src/graph/model.rs
//! Adjacency-matrix graph built once from an edge list.

use super::matrix::SquareMatrix;
use super::node::{NodeId, NodeSet};
use crate::error::{Result, RouteError};
use std::collections::HashSet;
use std::sync::Arc;

/// One input edge, as handed over by the ingestion layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl EdgeSpec {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Rejects negative and non-finite weights.
    ///
    /// # Errors
    /// Returns `Validation` describing the offending edge.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.weight.is_nan() {
            "weight is not a number"
        } else if self.weight.is_infinite() {
            "weight is not finite"
        } else if self.weight < 0.0 {
            "weight is negative"
        } else {
            return Ok(());
        };
        Err(RouteError::Validation {
            source_node: self.source.clone(),
            target: self.target.clone(),
            weight: self.weight,
            reason,
        })
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T, f64)> for EdgeSpec {
    fn from((source, target, weight): (S, T, f64)) -> Self {
        Self::new(source, target, weight)
    }
}

/// A stored edge, addressed by node ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// Weighted graph over a dense `n x n` adjacency matrix.
///
/// Absent edges are `f64::INFINITY` and the diagonal is always `0.0`.
/// The node set sits behind an `Arc` so results computed from this graph can
/// resolve labels without borrowing it.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Arc<NodeSet>,
    adjacency: SquareMatrix<f64>,
    directed: bool,
}

impl Graph {
    /// Builds a graph from `edges`, registering nodes in order of first appearance.
    ///
    /// When `directed` is false every edge is mirrored, except where the
    /// reverse direction was supplied explicitly.
    ///
    /// # Errors
    /// Returns `Validation` if any weight is negative or non-finite.
    pub fn build<I, E>(edges: I, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeSpec>,
    {
        Self::with_nodes(std::iter::empty::<&str>(), edges, directed)
    }

    /// Like [`Graph::build`], but registers `nodes` first. Use this for
    /// isolated nodes or to pin the matrix ordering.
    ///
    /// # Errors
    /// Returns `Validation` if any weight is negative or non-finite.
    pub fn with_nodes<N, I, E>(nodes: N, edges: I, directed: bool) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        I: IntoIterator<Item = E>,
        E: Into<EdgeSpec>,
    {
        let mut node_set = NodeSet::new();
        for label in nodes {
            node_set.intern(label.as_ref());
        }

        let mut resolved = Vec::new();
        for edge in edges {
            let edge: EdgeSpec = edge.into();
            edge.validate()?;
            let source = node_set.intern(&edge.source);
            let target = node_set.intern(&edge.target);
            resolved.push(Edge {
                source,
                target,
                weight: edge.weight,
            });
        }

        let adjacency = fill_adjacency(node_set.len(), &resolved, directed);
        tracing::debug!(
            nodes = node_set.len(),
            edges = resolved.len(),
            directed,
            "built graph"
        );

        Ok(Self {
            nodes: Arc::new(node_set),
            adjacency,
            directed,
        })
    }

    /// # Errors
    /// Returns `UnknownNode` if `label` is not part of this graph.
    pub fn node_index(&self, label: &str) -> Result<NodeId> {
        self.nodes.resolve(label)
    }

    #[must_use]
    pub fn label(&self, id: NodeId) -> &str {
        self.nodes.label(id)
    }

    /// Node labels in matrix order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        self.nodes.labels()
    }

    #[must_use]
    pub fn node_set(&self) -> &Arc<NodeSet> {
        &self.nodes
    }

    /// Direct edges (finite off-diagonal cells) in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .filter(|(s, t, w)| s != t && w.is_finite())
            .map(|(source, target, &weight)| Edge {
                source,
                target,
                weight,
            })
    }

    /// Direct edge weight, `None` when there is no edge.
    ///
    /// # Errors
    /// Returns `UnknownNode` if either label is absent.
    pub fn weight(&self, source: &str, target: &str) -> Result<Option<f64>> {
        let s = self.node_index(source)?;
        let t = self.node_index(target)?;
        if s == t {
            return Ok(None);
        }
        let w = self.adjacency.get(s, t);
        Ok(w.is_finite().then_some(w))
    }

    #[must_use]
    pub fn adjacency(&self) -> &SquareMatrix<f64> {
        &self.adjacency
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

fn fill_adjacency(n: usize, edges: &[Edge], directed: bool) -> SquareMatrix<f64> {
    let mut adjacency = SquareMatrix::filled(n, f64::INFINITY);
    let mut explicit = HashSet::new();

    for edge in edges.iter().filter(|e| e.source != e.target) {
        adjacency.set(edge.source, edge.target, edge.weight);
        explicit.insert((edge.source, edge.target));
    }

    if !directed {
        for edge in edges.iter().filter(|e| e.source != e.target) {
            if !explicit.contains(&(edge.target, edge.source)) {
                adjacency.set(edge.target, edge.source, edge.weight);
            }
        }
    }

    for id in 0..n {
        adjacency.set(NodeId(id), NodeId(id), 0.0);
    }
    adjacency
}
