//! B_n: positive roots and Gram matrix.
//!
//! B_n contains every A_n interval root plus the long roots that end in
//! a run of 2s: `0^i 1^(j−i) 2^(rank−j)` over cut points `i < j < rank`.
//! Together that is n² positive roots. The last simple root is short,
//! so the tridiagonal Gram pattern gets a 1 in its final diagonal entry.

use crate::combinat::index_pairs;
use crate::error::Error;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

use super::{runs, tridiagonal};

pub(crate) fn positive_roots(rank: usize) -> Result<Vec<Weight>, Error> {
    check_rank(rank)?;
    let intervals = index_pairs(rank + 1).map(|(i, j)| runs(&[(0, i), (1, j - i), (0, rank - j)]));
    let doubled = index_pairs(rank).map(|(i, j)| runs(&[(0, i), (1, j - i), (2, rank - j)]));
    Ok(intervals.chain(doubled).collect())
}

pub(crate) fn gram_matrix(rank: usize) -> Result<GramMatrix, Error> {
    check_rank(rank)?;
    let mut gram = tridiagonal(rank);
    // Short final simple root: squared length 1 instead of 2.
    gram.set(rank - 1, rank - 1, 1);
    Ok(gram)
}

fn check_rank(rank: usize) -> Result<(), Error> {
    if rank >= 2 {
        Ok(())
    } else {
        Err(Error::UnsupportedRank {
            series: Series::B,
            rank,
        })
    }
}
