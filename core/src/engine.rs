//! The worklist-driven path-consistency propagator.
//!
//! Tightens matrix entries until a fixed point (consistent) or an empty
//! relation set is produced (inconsistent). See the crate's top-level docs
//! for the corrected form of the classical algorithm this implements: the
//! subset test that decides whether to re-enqueue an edge compares the
//! candidate against the entry actually being tightened, not against some
//! other cell.

use crate::matrix::ConstraintMatrix;
use std::collections::VecDeque;

/// Runs path consistency to a fixed point, starting from `seeds` — the
/// edges whose relation set changed since the last propagation.
///
/// Returns `true` if the matrix reached a fixed point with no empty entry,
/// `false` the moment an empty entry is produced (the matrix is left
/// partially tightened in that case, per the crate's error-handling
/// contract: it must not be trusted further until the network is repaired).
pub(crate) fn propagate(matrix: &mut ConstraintMatrix, seeds: &[(usize, usize)]) -> bool {
    let n = matrix.len();
    if n == 0 {
        return true;
    }

    let mut on_queue = vec![false; n * n];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    for &(i, j) in seeds {
        enqueue(&mut queue, &mut on_queue, n, i, j);
    }

    while let Some((i, j)) = queue.pop_front() {
        on_queue[i * n + j] = false;
        for k in 0..n {
            if !tighten(matrix, &mut queue, &mut on_queue, n, k, i, j) {
                return false;
            }
            if !tighten(matrix, &mut queue, &mut on_queue, n, i, j, k) {
                return false;
            }
        }
    }
    true
}

/// Tightens `M[a][c]` using the transitivity through `b`: `M[a][c] := M[a][c]
/// ∩ (M[a][b] ⊗ M[b][c])`. Returns `false` and leaves the sticky-inconsistent
/// condition for the caller to latch if the result is empty.
fn tighten(
    matrix: &mut ConstraintMatrix,
    queue: &mut VecDeque<(usize, usize)>,
    on_queue: &mut [bool],
    n: usize,
    a: usize,
    b: usize,
    c: usize,
) -> bool {
    let candidate = matrix.get(a, b).compose(matrix.get(b, c));
    let current = matrix.get(a, c);
    let tightened = current.intersection(candidate);
    if tightened.is_empty() {
        tracing::debug!(a, b, c, "path consistency produced an empty relation set");
        return false;
    }
    if tightened != current {
        tracing::trace!(a, c, ?tightened, "tightened edge");
        matrix.set(a, c, tightened);
        matrix.set(c, a, tightened.inverse());
        enqueue(queue, on_queue, n, a, c);
        enqueue(queue, on_queue, n, c, a);
    }
    true
}

fn enqueue(
    queue: &mut VecDeque<(usize, usize)>,
    on_queue: &mut [bool],
    n: usize,
    i: usize,
    j: usize,
) {
    let idx = i * n + j;
    if !on_queue[idx] {
        on_queue[idx] = true;
        queue.push_back((i, j));
    }
}
