// src/query.rs
//! Read-only path queries over a [`ShortestPathResult`].
//!
//! Unreachable pairs are ordinary answers here: `distance` yields infinity and
//! `reconstruct_path` yields `None`. Only unknown labels are errors.

use crate::engine::ShortestPathResult;
use crate::error::{Result, RouteError};
use serde::Serialize;

/// A concrete shortest path and its total cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    pub cost: f64,
}

impl Route {
    /// Number of edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes
            .windows(2)
            .filter_map(|w| match w {
                [a, b] => Some((a.as_str(), b.as_str())),
                _ => None,
            })
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }
}

/// Shortest distance from `source` to `target`.
///
/// # Errors
/// Returns `UnknownNode` if either label is absent from the graph.
pub fn distance(result: &ShortestPathResult, source: &str, target: &str) -> Result<f64> {
    let s = result.nodes().resolve(source)?;
    let t = result.nodes().resolve(target)?;
    Ok(result.distance_between(s, t))
}

/// Walks the predecessor chain from `target` back to `source`.
///
/// Returns `Ok(None)` when no path exists.
///
/// # Errors
/// Returns `UnknownNode` if either label is absent, or
/// `InconsistentPredecessors` if the chain does not reach `source` within
/// `n` steps.
pub fn reconstruct_path(
    result: &ShortestPathResult,
    source: &str,
    target: &str,
) -> Result<Option<Route>> {
    let nodes = result.nodes();
    let s = nodes.resolve(source)?;
    let t = nodes.resolve(target)?;

    if s == t {
        return Ok(Some(Route {
            nodes: vec![source.to_string()],
            cost: 0.0,
        }));
    }
    if result.predecessor(s, t).is_none() {
        return Ok(None);
    }

    let mut reversed = vec![t];
    let mut current = t;
    while current != s {
        if reversed.len() > nodes.len() {
            tracing::error!(source, target, "predecessor chain does not terminate");
            return Err(RouteError::InconsistentPredecessors {
                source_node: source.to_string(),
                target: target.to_string(),
                steps: reversed.len(),
            });
        }
        let Some(prev) = result.predecessor(s, current) else {
            tracing::error!(source, target, "predecessor chain is broken");
            return Err(RouteError::InconsistentPredecessors {
                source_node: source.to_string(),
                target: target.to_string(),
                steps: reversed.len(),
            });
        };
        reversed.push(prev);
        current = prev;
    }

    Ok(Some(Route {
        nodes: reversed
            .iter()
            .rev()
            .map(|&id| nodes.label(id).to_string())
            .collect(),
        cost: result.distance_between(s, t),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use crate::graph::{BlockSet, Graph};

    fn result() -> ShortestPathResult {
        let g = Graph::build(
            vec![("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)],
            true,
        )
        .unwrap();
        compute(&g, &BlockSet::new()).unwrap()
    }

    #[test]
    fn test_route_helpers() {
        let route = reconstruct_path(&result(), "A", "C").unwrap().unwrap();
        assert_eq!(route.nodes, vec!["A", "B", "C"]);
        assert_eq!(route.cost, 3.0);
        assert_eq!(route.hops(), 2);
        assert_eq!(route.edges().collect::<Vec<_>>(), vec![("A", "B"), ("B", "C")]);
        assert_eq!(route.source(), Some("A"));
        assert_eq!(route.target(), Some("C"));
    }

    #[test]
    fn test_self_route() {
        let route = reconstruct_path(&result(), "B", "B").unwrap().unwrap();
        assert_eq!(route.nodes, vec!["B"]);
        assert_eq!(route.cost, 0.0);
        assert_eq!(route.hops(), 0);
    }

    #[test]
    fn test_unreachable_is_not_an_error() {
        let r = result();
        assert_eq!(distance(&r, "C", "A").unwrap(), f64::INFINITY);
        assert!(reconstruct_path(&r, "C", "A").unwrap().is_none());
    }

    #[test]
    fn test_cyclic_predecessors_fail_loudly() {
        use crate::graph::{NodeId, NodeSet, SquareMatrix};
        use std::sync::Arc;

        let mut nodes = NodeSet::new();
        for label in ["S", "X", "Y"] {
            nodes.intern(label);
        }
        let (s, x, y) = (NodeId(0), NodeId(1), NodeId(2));
        let mut pred = SquareMatrix::filled(3, None);
        pred.set(s, x, Some(y));
        pred.set(s, y, Some(x));
        let corrupt =
            ShortestPathResult::from_parts(Arc::new(nodes), SquareMatrix::filled(3, 1.0), pred);

        assert!(matches!(
            reconstruct_path(&corrupt, "S", "X"),
            Err(RouteError::InconsistentPredecessors { .. })
        ));
    }

    #[test]
    fn test_unknown_target() {
        let r = result();
        assert!(matches!(
            reconstruct_path(&r, "A", "Q"),
            Err(RouteError::UnknownNode(ref l)) if l == "Q"
        ));
        assert!(distance(&r, "Q", "A").is_err());
    }
}
