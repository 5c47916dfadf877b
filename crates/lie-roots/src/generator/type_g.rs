//! G_2: positive roots and Gram matrix.
//!
//! The smallest exceptional family, rank fixed at 2. Six positive roots
//! and a 2 × 2 Gram matrix, both literal.

use crate::error::Error;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

/// The 6 positive roots of G_2, ordered by height.
const POSITIVE_ROOTS: [[i64; 2]; 6] = [[1, 0], [0, 1], [1, 1], [2, 1], [3, 1], [3, 2]];

pub(crate) fn positive_roots(rank: usize) -> Result<Vec<Weight>, Error> {
    check_rank(rank)?;
    Ok(POSITIVE_ROOTS.iter().map(|&r| Weight::from(r)).collect())
}

pub(crate) fn gram_matrix(rank: usize) -> Result<GramMatrix, Error> {
    check_rank(rank)?;
    Ok(GramMatrix::from_rows(&[&[2, -3], &[-3, 6]]))
}

fn check_rank(rank: usize) -> Result<(), Error> {
    if rank == 2 {
        Ok(())
    } else {
        Err(Error::UnsupportedRank {
            series: Series::G,
            rank,
        })
    }
}
