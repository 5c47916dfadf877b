//! E_6, E_7, E_8: positive roots and Gram matrix.
//!
//! The positive roots are produced from an auxiliary combinatorial
//! encoding, the x-tuples, and mapped into simple-root coordinates:
//!
//! - the A_{rank−1} subsystem contributes one x-tuple per position pair
//!   `i ≤ j`: a −1 at index i, a +1 at index j + 1, zeros elsewhere;
//! - the remaining orbits are every distinct permutation of `1³ 0^(r−3)`,
//!   `1⁶ 0^(r−6)`, and for rank 8 additionally `2 1⁷`.
//!
//! The transform sets `d = Σx / 3` (every generated tuple sums to a
//! multiple of 3), builds `[d, d − x₀, 2d − x₀ − x₁]` followed by the
//! suffix sums `Σx[k..]` for k ≥ 3, then swaps the first two entries.
//!
//! The Dynkin diagram of the E family is a path with a branch node:
//! index 1 is the branch root, excluded from the tridiagonal band and
//! attached at index 3, while indices 0 and 2 couple directly.

use crate::combinat::{distinct_permutations, index_multipairs};
use crate::error::Error;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

pub(crate) fn positive_roots(rank: usize) -> Result<Vec<Weight>, Error> {
    check_rank(rank)?;

    let mut tuples: Vec<Vec<i64>> = Vec::new();

    // A_{rank-1} subsystem: -1 at i, +1 at j + 1.
    for (i, j) in index_multipairs(rank - 1) {
        let mut x = vec![0i64; rank];
        x[i] = -1;
        x[j + 1] += 1;
        tuples.push(x);
    }

    // Orbit representatives outside the A subsystem, expanded into every
    // distinct permutation.
    let mut representatives = vec![pattern(&[(1, 3)], rank), pattern(&[(1, 6)], rank)];
    if rank == 8 {
        representatives.push(pattern(&[(2, 1), (1, 7)], rank));
    }
    for rep in &representatives {
        tuples.extend(distinct_permutations(rep));
    }

    Ok(tuples.iter().map(|x| transform(x, rank)).collect())
}

pub(crate) fn gram_matrix(rank: usize) -> Result<GramMatrix, Error> {
    check_rank(rank)?;
    let mut gram = GramMatrix::from_fn(rank, |i, j| {
        if i == j {
            2
        } else if i != 1 && j != 1 && i.abs_diff(j) == 1 {
            -1
        } else {
            0
        }
    });
    // Branch node: 0–2 close the gap the band leaves around index 1,
    // and 1 attaches at index 3.
    gram.set(0, 2, -1);
    gram.set(2, 0, -1);
    gram.set(1, 3, -1);
    gram.set(3, 1, -1);
    Ok(gram)
}

/// Maps an x-tuple to simple-root coordinates.
fn transform(x: &[i64], rank: usize) -> Weight {
    let d = x.iter().sum::<i64>() / 3;
    let mut m = Vec::with_capacity(rank);
    m.push(d);
    m.push(d - x[0]);
    m.push(2 * d - x[0] - x[1]);
    for k in 3..rank {
        m.push(x[k..].iter().sum());
    }
    m.swap(0, 1);
    Weight::new(m)
}

/// A pattern of `(value, count)` runs padded with zeros to `rank`.
fn pattern(head: &[(i64, usize)], rank: usize) -> Vec<i64> {
    let mut x = Vec::with_capacity(rank);
    for &(value, count) in head {
        x.extend(std::iter::repeat(value).take(count));
    }
    x.resize(rank, 0);
    x
}

fn check_rank(rank: usize) -> Result<(), Error> {
    if matches!(rank, 6 | 7 | 8) {
        Ok(())
    } else {
        Err(Error::UnsupportedRank {
            series: Series::E,
            rank,
        })
    }
}
