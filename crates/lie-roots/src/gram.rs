//! The Gram matrix of the bilinear form on the simple-root basis.
//!
//! Entry `(i, j)` is the scalar product of simple roots α_i and α_j:
//! the diagonal carries squared root lengths, the off-diagonal pattern
//! encodes the Dynkin diagram of the family. Every builder in
//! [`crate::generator`] produces a symmetric matrix.
//!
//! # Example
//!
//! ```
//! use lie_roots::{RootSystem, Series};
//!
//! let g2 = RootSystem::new(Series::G, 2).unwrap();
//! let gram = g2.gram_matrix();
//! assert_eq!(gram.get(0, 0), 2);
//! assert_eq!(gram.get(1, 1), 6);
//! assert_eq!(gram.get(0, 1), -3);
//! assert!(gram.is_symmetric());
//! ```

use core::fmt;

use crate::weight::Weight;

/// A rank × rank integer matrix of pairwise simple-root scalar products.
///
/// Immutable after construction; row-major flat storage.
#[derive(Clone, PartialEq, Eq)]
pub struct GramMatrix {
    rank: usize,
    entries: Vec<i64>,
}

impl GramMatrix {
    /// Builds a matrix from a row-level closure, `entry(i, j)` giving the
    /// value at row `i`, column `j`.
    pub(crate) fn from_fn(rank: usize, entry: impl Fn(usize, usize) -> i64) -> Self {
        let mut entries = Vec::with_capacity(rank * rank);
        for i in 0..rank {
            for j in 0..rank {
                entries.push(entry(i, j));
            }
        }
        Self { rank, entries }
    }

    /// Builds a matrix from explicit rows. Used by the fixed F_4 and G_2
    /// tables.
    ///
    /// # Panics
    ///
    /// Panics if any row length differs from the row count.
    pub(crate) fn from_rows(rows: &[&[i64]]) -> Self {
        let rank = rows.len();
        let mut entries = Vec::with_capacity(rank * rank);
        for row in rows {
            assert_eq!(row.len(), rank, "Gram matrix rows must be square");
            entries.extend_from_slice(row);
        }
        Self { rank, entries }
    }

    /// Overwrites a single entry. Builders use this to adjust the
    /// tridiagonal base pattern for short or long simple roots.
    pub(crate) fn set(&mut self, i: usize, j: usize, value: i64) {
        self.entries[i * self.rank + j] = value;
    }

    /// The matrix dimension (rank of the root system).
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        assert!(i < self.rank && j < self.rank, "Gram index out of range");
        self.entries[i * self.rank + j]
    }

    /// Row `i` as a slice.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[i64] {
        &self.entries[i * self.rank..(i + 1) * self.rank]
    }

    /// True iff `G[i][j] == G[j][i]` for all entries.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.rank {
            for j in i + 1..self.rank {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// The matrix–vector product `G·v` as a weight.
    ///
    /// Each output coefficient pairs a row of `G` with `v` positionally;
    /// a shorter `v` truncates the pairing, matching weight arithmetic.
    #[must_use]
    pub fn apply(&self, v: &Weight) -> Weight {
        (0..self.rank)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v.iter())
                    .map(|(&g, x)| g * x)
                    .sum()
            })
            .collect()
    }
}

impl fmt::Debug for GramMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GramMatrix(rank={})", self.rank)?;
        for i in 0..self.rank {
            writeln!(f, "  {:?}", self.row(i))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_layout() {
        let m = GramMatrix::from_fn(3, |i, j| (i * 10 + j) as i64);
        assert_eq!(m.rank(), 3);
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.get(1, 2), 12);
        assert_eq!(m.get(2, 1), 21);
        assert_eq!(m.row(1), &[10, 11, 12]);
    }

    #[test]
    fn test_from_rows_and_symmetry() {
        let m = GramMatrix::from_rows(&[&[2, -3], &[-3, 6]]);
        assert!(m.is_symmetric());

        let skew = GramMatrix::from_rows(&[&[0, 1], &[-1, 0]]);
        assert!(!skew.is_symmetric());
    }

    #[test]
    fn test_set() {
        let mut m = GramMatrix::from_fn(2, |i, j| if i == j { 2 } else { 0 });
        m.set(1, 1, 4);
        assert_eq!(m.get(1, 1), 4);
        assert_eq!(m.get(0, 0), 2);
    }

    #[test]
    fn test_apply_identity() {
        let id = GramMatrix::from_fn(3, |i, j| i64::from(i == j));
        let v = Weight::from([5, -2, 7]);
        assert_eq!(id.apply(&v), v);
    }

    #[test]
    fn test_apply_matches_manual_product() {
        let m = GramMatrix::from_rows(&[&[2, -1], &[-1, 2]]);
        let v = Weight::from([1, 1]);
        assert_eq!(m.apply(&v), Weight::from([1, 1]));
        assert_eq!(m.apply(&Weight::from([1, 0])), Weight::from([2, -1]));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        let m = GramMatrix::from_fn(2, |_, _| 0);
        let _ = m.get(2, 0);
    }
}
