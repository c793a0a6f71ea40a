// src/engine/floyd.rs
//! Floyd-Warshall relaxation with predecessor tracking.

use crate::graph::{NodeId, SquareMatrix};

/// Seeds the predecessor matrix: `i` for every finite off-diagonal cell.
#[must_use]
pub fn initial_predecessors(dist: &SquareMatrix<f64>) -> SquareMatrix<Option<NodeId>> {
    let n = dist.dim();
    let mut pred = SquareMatrix::filled(n, None);
    for (i, j, w) in dist.iter() {
        if i != j && w.is_finite() {
            pred.set(i, j, Some(i));
        }
    }
    pred
}

/// Runs the k/i/j relaxation in place.
///
/// A cell is only replaced on a strictly shorter candidate, so among
/// equal-cost paths the first one found is kept. The predecessor of `(i, j)`
/// is inherited from the `k -> j` sub-path.
///
/// Row `k` and column `k` do not change while `k` is the intermediate: the
/// diagonal is zero and weights are non-negative.
#[allow(clippy::indexing_slicing)] // all indices are < n and the buffers are n * n
pub fn relax(dist: &mut SquareMatrix<f64>, pred: &mut SquareMatrix<Option<NodeId>>) {
    let n = dist.dim();
    let d = dist.as_mut_slice();
    let p = pred.as_mut_slice();

    for k in 0..n {
        let k_row = k * n;
        for i in 0..n {
            let i_row = i * n;
            let via_k = d[i_row + k];
            if via_k.is_infinite() {
                continue;
            }
            for j in 0..n {
                let candidate = via_k + d[k_row + j];
                if candidate < d[i_row + j] {
                    d[i_row + j] = candidate;
                    p[i_row + j] = p[k_row + j];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> SquareMatrix<f64> {
        let mut m = SquareMatrix::filled(rows.len(), f64::INFINITY);
        for (i, row) in rows.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                m.set(NodeId(i), NodeId(j), w);
            }
        }
        m
    }

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_initial_predecessors() {
        let d = matrix(&[&[0.0, 2.0], &[INF, 0.0]]);
        let p = initial_predecessors(&d);
        assert_eq!(p.get(NodeId(0), NodeId(1)), Some(NodeId(0)));
        assert_eq!(p.get(NodeId(1), NodeId(0)), None);
        assert_eq!(p.get(NodeId(0), NodeId(0)), None);
    }

    #[test]
    fn test_predecessor_inherited_through_chain() {
        // 0 -> 1 -> 2 -> 3, each weight 1, plus a long direct 0 -> 3.
        let mut d = matrix(&[
            &[0.0, 1.0, INF, 10.0],
            &[INF, 0.0, 1.0, INF],
            &[INF, INF, 0.0, 1.0],
            &[INF, INF, INF, 0.0],
        ]);
        let mut p = initial_predecessors(&d);
        relax(&mut d, &mut p);

        assert_eq!(d.get(NodeId(0), NodeId(3)), 3.0);
        // Last hop into 3 comes from 2, not from the first intermediate.
        assert_eq!(p.get(NodeId(0), NodeId(3)), Some(NodeId(2)));
        assert_eq!(p.get(NodeId(0), NodeId(2)), Some(NodeId(1)));
    }

    #[test]
    fn test_equal_cost_keeps_first() {
        // 0 -> 3 directly costs 2; 0 -> 1 -> 3 also costs 2.
        let mut d = matrix(&[
            &[0.0, 1.0, INF, 2.0],
            &[INF, 0.0, INF, 1.0],
            &[INF, INF, 0.0, INF],
            &[INF, INF, INF, 0.0],
        ]);
        let mut p = initial_predecessors(&d);
        relax(&mut d, &mut p);
        assert_eq!(p.get(NodeId(0), NodeId(3)), Some(NodeId(0)));
    }
}
