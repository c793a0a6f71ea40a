// src/graph/matrix.rs
//! Dense square matrix over one contiguous buffer.
//!
//! Cell `(i, j)` lives at `i * n + j`, so a row is a contiguous slice and the
//! relaxation loop walks memory with unit stride.

use super::node::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Creates an `n x n` matrix with every cell set to `fill`.
    #[must_use]
    pub fn filled(n: usize, fill: T) -> Self {
        Self {
            n,
            cells: vec![fill; n * n],
        }
    }
}

impl<T: Copy> SquareMatrix<T> {
    #[must_use]
    #[allow(clippy::indexing_slicing)] // ids come from the graph that sized this matrix
    pub fn get(&self, row: NodeId, col: NodeId) -> T {
        self.cells[row.0 * self.n + col.0]
    }
}

impl<T> SquareMatrix<T> {
    #[allow(clippy::indexing_slicing)]
    pub fn set(&mut self, row: NodeId, col: NodeId, value: T) {
        self.cells[row.0 * self.n + col.0] = value;
    }

    /// Side length.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.n
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn row(&self, row: NodeId) -> &[T] {
        let start = row.0 * self.n;
        &self.cells[start..start + self.n]
    }

    /// Raw row-major cells.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterates `(row, col, &value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, &T)> {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, v)| (NodeId(idx / n), NodeId(idx % n), v))
    }
}
