//! The root-system engine: eager construction, immutable queries.
//!
//! A [`RootSystem`] is built once from a (series, rank) pair. All four
//! derived artifacts — the positive-root set, the Gram matrix, the
//! highest root, and the zero weight — are computed at construction,
//! so the instance is fully immutable afterward and every query is a
//! plain read. Construction fails with a configuration error on an
//! unsupported rank and leaves nothing behind.
//!
//! # Example
//!
//! ```
//! use lie_roots::{RootSystem, Series, Weight};
//!
//! let g2 = RootSystem::new(Series::G, 2).unwrap();
//! assert_eq!(g2.positive_root_count(), 6);
//! assert_eq!(*g2.highest_root(), Weight::from([3, 2]));
//! assert!(g2.contains(&Weight::from([-3, -1])));
//!
//! let alpha = Weight::from([1, 0]);
//! let beta = Weight::from([0, 1]);
//! assert_eq!(g2.scalar_product(&alpha, &beta), -3);
//! ```

use std::collections::HashSet;

use crate::error::Error;
use crate::generator;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

/// The root system of a simple Lie algebra, identified by series letter
/// and rank.
///
/// Owns the deduplicated set of positive roots and the Gram matrix of
/// the bilinear form on the simple-root basis. The positive roots are a
/// strict half-space choice: a weight and its negation are never both in
/// the set, and [`RootSystem::contains`] checks both signs.
#[derive(Debug, Clone)]
pub struct RootSystem {
    series: Series,
    rank: usize,
    positive: HashSet<Weight>,
    gram: GramMatrix,
    highest: Weight,
    zero: Weight,
}

impl RootSystem {
    /// Builds the root system for the given series and rank.
    ///
    /// Total work is bounded by the family's root count; nothing is
    /// recomputed after construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRank`] if the family has no root
    /// system of this rank.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::{RootSystem, Series};
    ///
    /// let e8 = RootSystem::new(Series::E, 8).unwrap();
    /// assert_eq!(e8.positive_root_count(), 120);
    /// assert!(RootSystem::new(Series::E, 9).is_err());
    /// ```
    pub fn new(series: Series, rank: usize) -> Result<Self, Error> {
        let positive: HashSet<Weight> = generator::positive_roots(series, rank)?
            .into_iter()
            .collect();
        let gram = generator::gram_matrix(series, rank)?;
        // Every supported (series, rank) has a unique root of maximal
        // height, so the choice below is deterministic. The set is never
        // empty once generation succeeded.
        let highest = positive
            .iter()
            .max_by_key(|r| r.height())
            .cloned()
            .ok_or(Error::UnsupportedRank { series, rank })?;
        Ok(Self {
            series,
            rank,
            positive,
            gram,
            highest,
            zero: Weight::zero(rank),
        })
    }

    /// Builds a root system from a series letter and rank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSeries`] for a letter outside A–G, or
    /// [`Error::UnsupportedRank`] for a rank outside the family's range.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::RootSystem;
    ///
    /// let f4 = RootSystem::from_letter('F', 4).unwrap();
    /// assert_eq!(f4.positive_root_count(), 24);
    /// assert!(RootSystem::from_letter('X', 4).is_err());
    /// ```
    pub fn from_letter(letter: char, rank: usize) -> Result<Self, Error> {
        Self::new(Series::from_letter(letter)?, rank)
    }

    /// The series letter.
    #[inline]
    #[must_use]
    pub fn series(&self) -> Series {
        self.series
    }

    /// The rank (dimension of the simple-root basis).
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// True iff the weight is a root of this system: either it or its
    /// negation is in the positive-root set.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::{RootSystem, Series, Weight};
    ///
    /// let a2 = RootSystem::new(Series::A, 2).unwrap();
    /// assert!(a2.contains(&Weight::from([1, 1])));
    /// assert!(a2.contains(&Weight::from([-1, -1])));
    /// assert!(!a2.contains(&Weight::from([2, 1])));
    /// ```
    #[must_use]
    pub fn contains(&self, weight: &Weight) -> bool {
        self.positive.contains(weight) || self.positive.contains(&-weight)
    }

    /// A fresh iterator over the simple roots e_1 … e_rank, in basis
    /// order.
    pub fn simple_roots(&self) -> impl Iterator<Item = Weight> + '_ {
        (0..self.rank).map(|k| Weight::basis(k, self.rank))
    }

    /// The all-zero weight of length `rank`.
    #[inline]
    #[must_use]
    pub fn zero_weight(&self) -> &Weight {
        &self.zero
    }

    /// A fresh iterator over the positive roots.
    ///
    /// Iteration order is unspecified but the content is stable across
    /// calls.
    pub fn positive_roots(&self) -> impl Iterator<Item = &Weight> {
        self.positive.iter()
    }

    /// Number of positive roots.
    #[inline]
    #[must_use]
    pub fn positive_root_count(&self) -> usize {
        self.positive.len()
    }

    /// All roots: the positive roots followed by their negations, in the
    /// same relative pairing. Exactly twice as long as
    /// [`RootSystem::positive_roots`].
    pub fn all_roots(&self) -> impl Iterator<Item = Weight> + '_ {
        self.positive
            .iter()
            .cloned()
            .chain(self.positive.iter().map(|r| -r))
    }

    /// The unique positive root of maximal height.
    #[inline]
    #[must_use]
    pub fn highest_root(&self) -> &Weight {
        &self.highest
    }

    /// The Gram matrix of the bilinear form on the simple roots.
    #[inline]
    #[must_use]
    pub fn gram_matrix(&self) -> &GramMatrix {
        &self.gram
    }

    /// The bilinear form `uᵗ · G · v`, computed as `G·v` dotted with `u`.
    ///
    /// No dimension check is performed; callers supply weights of length
    /// `rank`.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::{RootSystem, Series, Weight};
    ///
    /// let a2 = RootSystem::new(Series::A, 2).unwrap();
    /// let alpha = Weight::from([1, 0]);
    /// // ⟨α, α⟩ = 2 for every simple root of A_n.
    /// assert_eq!(a2.scalar_product(&alpha, &alpha), 2);
    /// ```
    #[must_use]
    pub fn scalar_product(&self, u: &Weight, v: &Weight) -> i64 {
        u.dot(&self.gram.apply(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_fails_cleanly() {
        assert!(matches!(
            RootSystem::new(Series::D, 3),
            Err(Error::UnsupportedRank {
                series: Series::D,
                rank: 3
            })
        ));
        assert!(matches!(
            RootSystem::from_letter('Q', 2),
            Err(Error::UnknownSeries('Q'))
        ));
    }

    #[test]
    fn test_identity() {
        let b3 = RootSystem::new(Series::B, 3).unwrap();
        assert_eq!(b3.series(), Series::B);
        assert_eq!(b3.rank(), 3);
    }

    #[test]
    fn test_simple_roots_fresh_and_ordered() {
        let a3 = RootSystem::new(Series::A, 3).unwrap();
        let first: Vec<Weight> = a3.simple_roots().collect();
        let second: Vec<Weight> = a3.simple_roots().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        for (k, root) in first.iter().enumerate() {
            assert_eq!(*root, Weight::basis(k, 3));
            assert!(a3.contains(root));
        }
    }

    #[test]
    fn test_zero_weight() {
        let c2 = RootSystem::new(Series::C, 2).unwrap();
        assert_eq!(*c2.zero_weight(), Weight::zero(2));
        assert!(!c2.contains(c2.zero_weight()));
    }

    #[test]
    fn test_contains_both_signs() {
        let g2 = RootSystem::new(Series::G, 2).unwrap();
        for root in g2.positive_roots() {
            assert!(g2.contains(root));
            assert!(g2.contains(&-root));
        }
    }

    #[test]
    fn test_non_membership() {
        let g2 = RootSystem::new(Series::G, 2).unwrap();
        // Past the highest root: (3,2) + (1,0) = (4,2) is not a root.
        let beyond = g2.highest_root() + &Weight::basis(0, 2);
        assert!(!g2.contains(&beyond));
        assert!(!g2.contains(&Weight::from([1, -1])));
    }

    #[test]
    fn test_all_roots_doubles_positive() {
        for (series, rank) in [(Series::A, 4), (Series::D, 5), (Series::F, 4)] {
            let system = RootSystem::new(series, rank).unwrap();
            let all: Vec<Weight> = system.all_roots().collect();
            assert_eq!(all.len(), 2 * system.positive_root_count());
            // Positives first, then the matching negations.
            let n = system.positive_root_count();
            for k in 0..n {
                assert_eq!(all[n + k], -&all[k]);
            }
        }
    }

    #[test]
    fn test_positive_roots_content_stable() {
        let e6 = RootSystem::new(Series::E, 6).unwrap();
        let first: HashSet<Weight> = e6.positive_roots().cloned().collect();
        let second: HashSet<Weight> = e6.positive_roots().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 36);
    }

    #[test]
    fn test_no_root_paired_with_its_negation() {
        for (series, rank) in [(Series::B, 4), (Series::E, 6), (Series::G, 2)] {
            let system = RootSystem::new(series, rank).unwrap();
            for root in system.positive_roots() {
                assert!(root.is_positive());
                assert!(!(-root).is_positive(), "{root} negation is positive");
            }
        }
    }

    #[test]
    fn test_highest_root_examples() {
        let cases = [
            (Series::A, 4, Weight::from([1, 1, 1, 1])),
            (Series::C, 3, Weight::from([2, 2, 1])),
            (Series::F, 4, Weight::from([2, 3, 4, 2])),
            (Series::G, 2, Weight::from([3, 2])),
        ];
        for (series, rank, expected) in cases {
            let system = RootSystem::new(series, rank).unwrap();
            assert_eq!(*system.highest_root(), expected, "{series}_{rank}");
        }
    }

    #[test]
    fn test_highest_root_is_unique_maximum() {
        for series in Series::ALL {
            let rank = match series {
                Series::A => 3,
                Series::B | Series::C => 3,
                Series::D => 4,
                Series::E => 7,
                Series::F => 4,
                Series::G => 2,
            };
            let system = RootSystem::new(series, rank).unwrap();
            let max_height = system.highest_root().height();
            let at_max = system
                .positive_roots()
                .filter(|r| r.height() == max_height)
                .count();
            assert_eq!(at_max, 1, "{series}_{rank} maximum is not unique");
        }
    }

    #[test]
    fn test_gram_symmetric_for_all_families() {
        for (series, rank) in [
            (Series::A, 1),
            (Series::A, 6),
            (Series::B, 2),
            (Series::C, 5),
            (Series::D, 6),
            (Series::E, 8),
            (Series::F, 4),
            (Series::G, 2),
        ] {
            let system = RootSystem::new(series, rank).unwrap();
            assert!(system.gram_matrix().is_symmetric(), "{series}_{rank}");
        }
    }

    #[test]
    fn test_scalar_product_g2() {
        let g2 = RootSystem::new(Series::G, 2).unwrap();
        let alpha = Weight::from([1, 0]);
        let beta = Weight::from([0, 1]);
        assert_eq!(g2.scalar_product(&alpha, &alpha), 2);
        assert_eq!(g2.scalar_product(&beta, &beta), 6);
        assert_eq!(g2.scalar_product(&alpha, &beta), -3);
        assert_eq!(g2.scalar_product(&beta, &alpha), -3);
    }

    #[test]
    fn test_scalar_product_highest_root_norm() {
        // The highest root is a long root: squared length 2 in the
        // simply-laced families.
        for (series, rank) in [(Series::A, 5), (Series::D, 4), (Series::E, 6)] {
            let system = RootSystem::new(series, rank).unwrap();
            let theta = system.highest_root();
            assert_eq!(system.scalar_product(theta, theta), 2, "{series}_{rank}");
        }
    }
}
