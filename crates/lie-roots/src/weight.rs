//! Weight-space elements as coefficient vectors in a simple-root basis.
//!
//! A [`Weight`] is an immutable, ordered sequence of integer coefficients.
//! Roots are weights; so are arbitrary integer combinations of simple
//! roots that arise during weight computations. No rank is stored on the
//! type — the length is fixed at construction and implicit thereafter.
//!
//! Height (the coefficient sum) and positivity (every coefficient ≥ 0)
//! are computed once at construction and stored, so every accessor on a
//! constructed weight is O(1) or a plain slice walk.
//!
//! # Arithmetic over the positional overlap
//!
//! `+` and `-` pair coefficients positionally and stop at the shorter
//! operand; no length check is performed. The result is only meaningful
//! when both operands share a basis of the same rank — callers own that
//! discipline, matching the rest of this crate, which never mixes ranks.
//!
//! # Example
//!
//! ```
//! use lie_roots::Weight;
//!
//! let alpha = Weight::from([1, 0, 1]);
//! let beta = Weight::from([0, 1, 0]);
//!
//! let sum = &alpha + &beta;
//! assert_eq!(sum, Weight::from([1, 1, 1]));
//! assert_eq!(sum.height(), 3);
//! assert!(sum.is_positive());
//! assert!((-&sum).height() == -3);
//! ```

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

/// An element of the weight space, stored as coefficients in a
/// simple-root basis.
///
/// Equality and hashing are strict: the full coefficient sequences must
/// match, and weights of different lengths are simply unequal. Height
/// and positivity are precomputed; they are functions of the
/// coefficients, so the derived `Eq`/`Hash` stay consistent.
///
/// # Example
///
/// ```
/// use lie_roots::Weight;
///
/// let w = Weight::from([3, 2]);
/// assert_eq!(w.height(), 5);
/// assert!(w.is_positive());
/// assert!(!w.is_zero());
/// assert_eq!(w.to_string(), "(3,2)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Weight {
    coefficients: Vec<i64>,
    height: i64,
    positive: bool,
}

impl Weight {
    /// Creates a weight from a coefficient vector.
    #[must_use]
    pub fn new(coefficients: Vec<i64>) -> Self {
        let height = coefficients.iter().sum();
        let positive = coefficients.iter().all(|&c| c >= 0);
        Self {
            coefficients,
            height,
            positive,
        }
    }

    /// The zero weight of the given length.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::Weight;
    ///
    /// let z = Weight::zero(4);
    /// assert!(z.is_zero());
    /// assert_eq!(z.len(), 4);
    /// ```
    #[must_use]
    pub fn zero(len: usize) -> Self {
        Self::new(vec![0; len])
    }

    /// The standard basis vector e_index of the given length
    /// (the simple root α_index in its own basis).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::Weight;
    ///
    /// assert_eq!(Weight::basis(1, 3), Weight::from([0, 1, 0]));
    /// ```
    #[must_use]
    pub fn basis(index: usize, len: usize) -> Self {
        assert!(index < len, "basis index {index} out of range for length {len}");
        let mut coefficients = vec![0; len];
        coefficients[index] = 1;
        Self::new(coefficients)
    }

    /// Number of coefficients.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// True for the empty (length-zero) weight.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The coefficient at basis position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn coefficient(&self, index: usize) -> i64 {
        self.coefficients[index]
    }

    /// The full coefficient slice, in basis order.
    #[inline]
    #[must_use]
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// A fresh iterator over the coefficients in basis order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.coefficients.iter().copied()
    }

    /// Sum of the coefficients. Precomputed at construction.
    ///
    /// For a positive root this is the usual height in the root poset.
    #[inline]
    #[must_use]
    pub fn height(&self) -> i64 {
        self.height
    }

    /// True iff every coefficient is ≥ 0. Precomputed at construction.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// True iff every coefficient is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::Weight;
    ///
    /// assert!(Weight::zero(3).is_zero());
    /// assert!(!Weight::basis(0, 3).is_zero());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0)
    }

    /// Dot product with another weight over the positional overlap.
    #[must_use]
    pub fn dot(&self, other: &Self) -> i64 {
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }
}

impl From<Vec<i64>> for Weight {
    fn from(coefficients: Vec<i64>) -> Self {
        Self::new(coefficients)
    }
}

impl From<&[i64]> for Weight {
    fn from(coefficients: &[i64]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for Weight {
    fn from(coefficients: [i64; N]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl FromIterator<i64> for Weight {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Weight {
    type Item = i64;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.iter().copied()
    }
}

impl Add for &Weight {
    type Output = Weight;

    fn add(self, other: Self) -> Weight {
        self.iter().zip(other.iter()).map(|(a, b)| a + b).collect()
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, other: Self) -> Weight {
        &self + &other
    }
}

impl Sub for &Weight {
    type Output = Weight;

    fn sub(self, other: Self) -> Weight {
        self.iter().zip(other.iter()).map(|(a, b)| a - b).collect()
    }
}

impl Sub for Weight {
    type Output = Weight;

    fn sub(self, other: Self) -> Weight {
        &self - &other
    }
}

impl Neg for &Weight {
    type Output = Weight;

    fn neg(self) -> Weight {
        self.iter().map(|c| -c).collect()
    }
}

impl Neg for Weight {
    type Output = Weight;

    fn neg(self) -> Weight {
        -&self
    }
}

impl Mul<i64> for &Weight {
    type Output = Weight;

    fn mul(self, scalar: i64) -> Weight {
        self.iter().map(|c| c * scalar).collect()
    }
}

impl Mul<i64> for Weight {
    type Output = Weight;

    fn mul(self, scalar: i64) -> Weight {
        &self * scalar
    }
}

impl Mul<&Weight> for i64 {
    type Output = Weight;

    fn mul(self, weight: &Weight) -> Weight {
        weight * self
    }
}

impl Mul<Weight> for i64 {
    type Output = Weight;

    fn mul(self, weight: Weight) -> Weight {
        &weight * self
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(mut iter: I) -> Self {
        let first = match iter.next() {
            Some(w) => w,
            None => Weight::zero(0),
        };
        iter.fold(first, |acc, w| &acc + &w)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weight{self}")
    }
}
