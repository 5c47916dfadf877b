//! Combinatorial enumeration used by the root generators.
//!
//! Three small pure helpers cover everything the seven recipes need:
//! ordered index pairs (cut points for interval roots), index pairs with
//! repetition, and distinct permutations of a multiset (orbit expansion
//! in the E-series generator).
//!
//! # Example
//!
//! ```
//! use lie_roots::combinat::{distinct_permutations, index_pairs};
//!
//! let pairs: Vec<_> = index_pairs(3).collect();
//! assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
//!
//! // 3 distinct arrangements of {1, 1, 0}
//! assert_eq!(distinct_permutations(&[1, 1, 0]).len(), 3);
//! ```

/// All index pairs `(i, j)` with `i < j < n`, in lexicographic order.
///
/// # Example
///
/// ```
/// use lie_roots::combinat::index_pairs;
///
/// assert_eq!(index_pairs(2).collect::<Vec<_>>(), vec![(0, 1)]);
/// assert_eq!(index_pairs(0).count(), 0);
/// assert_eq!(index_pairs(5).count(), 10); // C(5, 2)
/// ```
pub fn index_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// All index pairs `(i, j)` with `i ≤ j < n`, in lexicographic order
/// (pairs with repetition).
///
/// # Example
///
/// ```
/// use lie_roots::combinat::index_multipairs;
///
/// assert_eq!(
///     index_multipairs(2).collect::<Vec<_>>(),
///     vec![(0, 0), (0, 1), (1, 1)],
/// );
/// assert_eq!(index_multipairs(4).count(), 10); // C(5, 2)
/// ```
pub fn index_multipairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i..n).map(move |j| (i, j)))
}

/// Every distinct permutation of a multiset, each exactly once.
///
/// Enumerates in lexicographic order starting from the sorted
/// arrangement, so repeated elements in the input never produce
/// duplicate outputs. The output length is the multinomial coefficient
/// of the element multiplicities.
///
/// # Example
///
/// ```
/// use lie_roots::combinat::distinct_permutations;
///
/// let perms = distinct_permutations(&[1, 1, 0]);
/// assert_eq!(perms, vec![
///     vec![0, 1, 1],
///     vec![1, 0, 1],
///     vec![1, 1, 0],
/// ]);
/// ```
#[must_use]
pub fn distinct_permutations(pattern: &[i64]) -> Vec<Vec<i64>> {
    if pattern.is_empty() {
        return vec![Vec::new()];
    }
    let mut current = pattern.to_vec();
    current.sort_unstable();
    let mut out = Vec::new();
    loop {
        out.push(current.clone());
        if !next_permutation(&mut current) {
            return out;
        }
    }
}

/// Advances a slice to its next lexicographic permutation in place.
///
/// Returns `false` (leaving the slice untouched) once the slice is the
/// last permutation, i.e. sorted in descending order.
fn next_permutation(a: &mut [i64]) -> bool {
    // Longest non-increasing suffix; the pivot sits just before it.
    let Some(pivot) = a.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let pivot_value = a[pivot];
    let successor = a.iter().rposition(|&x| x > pivot_value).unwrap_or(pivot + 1);
    a.swap(pivot, successor);
    a[pivot + 1..].reverse();
    true
}
