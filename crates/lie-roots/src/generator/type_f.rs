//! F_4: positive roots and Gram matrix.
//!
//! Rank is fixed at 4 and the system is small enough that both artifacts
//! are literal tables: the 24 positive roots as coefficient quadruples
//! and the 4 × 4 Gram matrix for two long and two short simple roots.

use crate::error::Error;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

/// The 24 positive roots of F_4, ordered by height.
const POSITIVE_ROOTS: [[i64; 4]; 24] = [
    [1, 0, 0, 0],
    [0, 1, 0, 0],
    [0, 0, 1, 0],
    [0, 0, 0, 1],
    [1, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 1, 1],
    [1, 1, 1, 0],
    [0, 1, 2, 0],
    [0, 1, 1, 1],
    [1, 1, 2, 0],
    [1, 1, 1, 1],
    [0, 1, 2, 1],
    [1, 2, 2, 0],
    [1, 1, 2, 1],
    [0, 1, 2, 2],
    [1, 2, 2, 1],
    [1, 1, 2, 2],
    [1, 2, 3, 1],
    [1, 2, 2, 2],
    [1, 2, 3, 2],
    [1, 2, 4, 2],
    [1, 3, 4, 2],
    [2, 3, 4, 2],
];

pub(crate) fn positive_roots(rank: usize) -> Result<Vec<Weight>, Error> {
    check_rank(rank)?;
    Ok(POSITIVE_ROOTS.iter().map(|&r| Weight::from(r)).collect())
}

pub(crate) fn gram_matrix(rank: usize) -> Result<GramMatrix, Error> {
    check_rank(rank)?;
    Ok(GramMatrix::from_rows(&[
        &[4, -2, 0, 0],
        &[-2, 4, -2, 0],
        &[0, -2, 2, -1],
        &[0, 0, -1, 2],
    ]))
}

fn check_rank(rank: usize) -> Result<(), Error> {
    if rank == 4 {
        Ok(())
    } else {
        Err(Error::UnsupportedRank {
            series: Series::F,
            rank,
        })
    }
}
