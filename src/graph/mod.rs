// src/graph/mod.rs
//! Graph model: node identity, dense adjacency storage and blocked-edge overlays.

pub mod blocked;
pub mod matrix;
pub mod model;
pub mod node;

pub use blocked::{BlockSet, BlockedPair};
pub use matrix::SquareMatrix;
pub use model::{Edge, EdgeSpec, Graph};
pub use node::{NodeId, NodeSet};
