//! D_n: positive roots and Gram matrix.
//!
//! Three families of positive roots, n² − n in total:
//!
//! - interval roots confined to the first rank − 1 coordinates,
//! - a forked family `0^(i−1) 1^(rank−i−1) 0 1` pairing a run of 1s with
//!   the last simple root across the fork,
//! - roots `0^i 1^(j−i) 2^(rank−j−2) 1 1` running through both fork tips.
//!
//! The Dynkin diagram forks at node rank − 2, so the tridiagonal band
//! stops before the last index and node rank − 1 couples to node
//! rank − 3 instead.

use crate::combinat::index_pairs;
use crate::error::Error;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

use super::runs;

pub(crate) fn positive_roots(rank: usize) -> Result<Vec<Weight>, Error> {
    check_rank(rank)?;
    let intervals = index_pairs(rank).map(|(i, j)| runs(&[(0, i), (1, j - i), (0, rank - j)]));
    let forked = (1..rank).map(|i| runs(&[(0, i - 1), (1, rank - i - 1), (0, 1), (1, 1)]));
    let through = index_pairs(rank - 1)
        .map(|(i, j)| runs(&[(0, i), (1, j - i), (2, rank - j - 2), (1, 1), (1, 1)]));
    Ok(intervals.chain(forked).chain(through).collect())
}

pub(crate) fn gram_matrix(rank: usize) -> Result<GramMatrix, Error> {
    check_rank(rank)?;
    let mut gram = GramMatrix::from_fn(rank, |i, j| {
        if i == j {
            2
        } else if i < rank - 1 && j < rank - 1 && i.abs_diff(j) == 1 {
            -1
        } else {
            0
        }
    });
    // Fork coupling: the last simple root attaches at node rank − 3.
    gram.set(rank - 1, rank - 3, -1);
    gram.set(rank - 3, rank - 1, -1);
    Ok(gram)
}

fn check_rank(rank: usize) -> Result<(), Error> {
    if rank >= 4 {
        Ok(())
    } else {
        Err(Error::UnsupportedRank {
            series: Series::D,
            rank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_counts() {
        for rank in 4..9 {
            let roots: HashSet<Weight> = positive_roots(rank).unwrap().into_iter().collect();
            assert_eq!(roots.len(), rank * rank - rank);
        }
    }

    #[test]
    fn test_d4_contains_all_simple_roots() {
        let roots: HashSet<Weight> = positive_roots(4).unwrap().into_iter().collect();
        for k in 0..4 {
            assert!(roots.contains(&Weight::basis(k, 4)), "missing e_{k}");
        }
    }

    #[test]
    fn test_d4_highest_root() {
        let roots = positive_roots(4).unwrap();
        let highest = roots.iter().max_by_key(|r| r.height()).unwrap();
        assert_eq!(*highest, Weight::from([1, 2, 1, 1]));
        assert_eq!(highest.height(), 5);
    }

    #[test]
    fn test_highest_root_height() {
        for rank in 4..8 {
            let roots = positive_roots(rank).unwrap();
            let highest = roots.iter().max_by_key(|r| r.height()).unwrap();
            assert_eq!(highest.height(), 2 * rank as i64 - 3);
        }
    }

    #[test]
    fn test_gram_fork() {
        let m = gram_matrix(5).unwrap();
        assert!(m.is_symmetric());
        assert_eq!(m.get(3, 4), 0); // band stops before the fork tip
        assert_eq!(m.get(2, 4), -1); // fork coupling
        assert_eq!(m.get(2, 3), -1);
        assert_eq!(m.row(0), &[2, -1, 0, 0, 0]);
    }

    #[test]
    fn test_low_ranks_rejected() {
        for rank in 0..4 {
            assert!(positive_roots(rank).is_err());
            assert!(gram_matrix(rank).is_err());
        }
    }
}
