//! All-pairs shortest paths over weighted edge lists.
//!
//! A [`Graph`] is built once from `(source, target, weight)` edges and stored
//! as a dense adjacency matrix. [`engine::compute`] runs Floyd-Warshall over
//! it, optionally with a [`BlockSet`] of directed edges masked out, and the
//! [`query`] functions answer distance and path questions from the result.
//!
//! # Example
//!
//! ```rust
//! use routegraph_core::{engine, query, BlockSet, Graph};
//!
//! let graph = Graph::build(
//!     vec![("A", "B", 1.0), ("A", "C", 4.0), ("B", "C", 2.0), ("B", "D", 5.0), ("C", "D", 1.0)],
//!     true,
//! )?;
//!
//! let result = engine::compute(&graph, &BlockSet::new())?;
//! let route = query::reconstruct_path(&result, "A", "D")?.expect("A reaches D");
//! assert_eq!(route.nodes, ["A", "B", "C", "D"]);
//! assert_eq!(route.cost, 4.0);
//!
//! // Same graph, with B -> C taken out of service.
//! let blocked: BlockSet = vec![("B", "C")].into_iter().collect();
//! let detour = engine::compute(&graph, &blocked)?;
//! assert_eq!(query::distance(&detour, "A", "D")?, 5.0);
//! # Ok::<(), routegraph_core::RouteError>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit;
pub mod graph;
pub mod ingest;
pub mod query;
pub mod reporting;

pub use engine::{compute, ShortestPathResult};
pub use error::{Result, RouteError};
pub use graph::{BlockSet, EdgeSpec, Graph, NodeId};
pub use query::{distance, reconstruct_path, Route};
