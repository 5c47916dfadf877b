//! A_n: positive roots and Gram matrix.
//!
//! Every positive root of A_n is an interval α_i + α_{i+1} + … + α_{j−1},
//! i.e. a contiguous run of 1s. One root per pair of cut points in
//! `0..=rank`, for n(n+1)/2 in total. All simple roots share one length,
//! so the Gram matrix is the plain tridiagonal pattern.

use crate::combinat::index_pairs;
use crate::error::Error;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

use super::{runs, tridiagonal};

/// Interval roots `0^i 1^(j−i) 0^(rank−j)` over cut points `i < j ≤ rank`.
pub(crate) fn positive_roots(rank: usize) -> Result<Vec<Weight>, Error> {
    check_rank(rank)?;
    Ok(index_pairs(rank + 1)
        .map(|(i, j)| runs(&[(0, i), (1, j - i), (0, rank - j)]))
        .collect())
}

/// 2 on the diagonal, −1 between neighbors.
pub(crate) fn gram_matrix(rank: usize) -> Result<GramMatrix, Error> {
    check_rank(rank)?;
    Ok(tridiagonal(rank))
}

fn check_rank(rank: usize) -> Result<(), Error> {
    if rank >= 1 {
        Ok(())
    } else {
        Err(Error::UnsupportedRank {
            series: Series::A,
            rank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_a1_is_a_single_root() {
        let roots = positive_roots(1).unwrap();
        assert_eq!(roots, vec![Weight::from([1])]);
    }

    #[test]
    fn test_a3_roots() {
        let roots: HashSet<Weight> = positive_roots(3).unwrap().into_iter().collect();
        let expected: HashSet<Weight> = [
            vec![1, 0, 0],
            vec![0, 1, 0],
            vec![0, 0, 1],
            vec![1, 1, 0],
            vec![0, 1, 1],
            vec![1, 1, 1],
        ]
        .into_iter()
        .map(Weight::new)
        .collect();
        assert_eq!(roots, expected);
    }

    #[test]
    fn test_counts() {
        for rank in 1..10 {
            assert_eq!(positive_roots(rank).unwrap().len(), rank * (rank + 1) / 2);
        }
    }

    #[test]
    fn test_highest_root_is_all_ones() {
        let roots = positive_roots(5).unwrap();
        let highest = roots.iter().max_by_key(|r| r.height()).unwrap();
        assert_eq!(*highest, Weight::from([1, 1, 1, 1, 1]));
    }

    #[test]
    fn test_gram() {
        let m = gram_matrix(3).unwrap();
        assert_eq!(m.row(0), &[2, -1, 0]);
        assert_eq!(m.row(1), &[-1, 2, -1]);
        assert_eq!(m.row(2), &[0, -1, 2]);
    }

    #[test]
    fn test_rank_zero_rejected() {
        assert!(positive_roots(0).is_err());
        assert!(gram_matrix(0).is_err());
    }
}
