//! C_n: positive roots and Gram matrix.
//!
//! C_n contains every A_n interval root plus the roots
//! `0^i 1^(j−i) 2^(rank−1−j) 1` over cut points `i ≤ j < rank − 1`:
//! a run of 2s capped by a trailing 1, the long roots of the symplectic
//! family. Together that is n² positive roots. The last simple root is
//! long, so the final diagonal entry is 4 and the last off-diagonal
//! pair is −2.

use crate::combinat::{index_multipairs, index_pairs};
use crate::error::Error;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

use super::{runs, tridiagonal};

pub(crate) fn positive_roots(rank: usize) -> Result<Vec<Weight>, Error> {
    check_rank(rank)?;
    let intervals = index_pairs(rank + 1).map(|(i, j)| runs(&[(0, i), (1, j - i), (0, rank - j)]));
    let capped = index_multipairs(rank - 1)
        .map(|(i, j)| runs(&[(0, i), (1, j - i), (2, rank - 1 - j), (1, 1)]));
    Ok(intervals.chain(capped).collect())
}

pub(crate) fn gram_matrix(rank: usize) -> Result<GramMatrix, Error> {
    check_rank(rank)?;
    let mut gram = tridiagonal(rank);
    // Long final simple root: squared length 4, coupling −2 to its
    // neighbor.
    gram.set(rank - 1, rank - 1, 4);
    gram.set(rank - 1, rank - 2, -2);
    gram.set(rank - 2, rank - 1, -2);
    Ok(gram)
}

fn check_rank(rank: usize) -> Result<(), Error> {
    if rank >= 2 {
        Ok(())
    } else {
        Err(Error::UnsupportedRank {
            series: Series::C,
            rank,
        })
    }
}
