//! A dense square matrix of [`RelSet`]s indexed by internal node indices.

use crate::relset::RelSet;

/// The constraint matrix `M`: a flat, row-major array of [`RelSet`]s sized to
/// a physical capacity grown by doubling, independent of the logical node
/// count. Most [`ConstraintMatrix::push_node`] calls are O(n) — filling in
/// one new row and column — rather than O(n²); only the amortised doubling
/// step costs O(capacity²).
///
/// Invariants maintained by every method: `M[i][i] = {equals}`, and
/// `M[j][i] = inverse(M[i][j])` for all registered `i, j`.
#[derive(Clone, Debug)]
pub struct ConstraintMatrix {
    n: usize,
    cap: usize,
    cells: Vec<RelSet>,
}

impl ConstraintMatrix {
    pub(crate) fn new() -> Self {
        Self {
            n: 0,
            cap: 0,
            cells: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut m = Self::new();
        if cap > 0 {
            m.reserve(cap);
        }
        m
    }

    /// The number of registered nodes, i.e. the matrix's logical side length.
    pub fn len(&self) -> usize {
        self.n
    }

    /// `true` if no nodes are registered.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n && j < self.n);
        i * self.cap + j
    }

    /// Reads the relation set admissible from node `i` to node `j`.
    pub fn get(&self, i: usize, j: usize) -> RelSet {
        self.cells[self.index(i, j)]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, v: RelSet) {
        let idx = self.index(i, j);
        self.cells[idx] = v;
    }

    fn reserve(&mut self, new_cap: usize) {
        if new_cap <= self.cap {
            return;
        }
        let mut new_cells = vec![RelSet::ALL; new_cap * new_cap];
        for i in 0..self.n {
            for j in 0..self.n {
                new_cells[i * new_cap + j] = self.cells[i * self.cap + j];
            }
        }
        self.cells = new_cells;
        self.cap = new_cap;
    }

    /// Grows the matrix from `n`×`n` to `(n+1)`×`(n+1)`. New off-diagonal
    /// entries are [`RelSet::ALL`]; the new diagonal entry is `{equals}`.
    pub(crate) fn push_node(&mut self) {
        if self.n + 1 > self.cap {
            let new_cap = if self.cap == 0 { 4 } else { self.cap * 2 };
            self.reserve(new_cap);
        }
        let k = self.n;
        for i in 0..k {
            self.set(i, k, RelSet::ALL);
            self.set(k, i, RelSet::ALL);
        }
        self.n += 1;
        self.set(k, k, RelSet::singleton(crate::relation::Relation::Equals));
    }

    /// Resets every off-diagonal entry to [`RelSet::ALL`] and every diagonal
    /// entry to `{equals}`, discarding all tightening. Used to rebuild the
    /// matrix from scratch after a constraint removal.
    pub(crate) fn reset(&mut self) {
        for i in 0..self.n {
            for j in 0..self.n {
                let v = if i == j {
                    RelSet::singleton(crate::relation::Relation::Equals)
                } else {
                    RelSet::ALL
                };
                self.set(i, j, v);
            }
        }
    }
}
