//! Per-family positive-root generators and Gram-matrix builders.
//!
//! One submodule per series letter. Each exposes two functions with the
//! same shape — `positive_roots(rank)` and `gram_matrix(rank)` — and
//! validates the rank itself, so a builder can never run on a rank its
//! family does not support. Dispatch is an exhaustive `match` on
//! [`Series`]; there is no runtime key lookup to miss.

use crate::error::Error;
use crate::gram::GramMatrix;
use crate::series::Series;
use crate::weight::Weight;

pub(crate) mod type_a;
pub(crate) mod type_b;
pub(crate) mod type_c;
pub(crate) mod type_d;
pub(crate) mod type_e;
pub(crate) mod type_f;
pub(crate) mod type_g;

/// Generates the positive roots for the given series and rank.
///
/// # Errors
///
/// Returns [`Error::UnsupportedRank`] if the rank is outside the
/// family's range.
pub(crate) fn positive_roots(series: Series, rank: usize) -> Result<Vec<Weight>, Error> {
    match series {
        Series::A => type_a::positive_roots(rank),
        Series::B => type_b::positive_roots(rank),
        Series::C => type_c::positive_roots(rank),
        Series::D => type_d::positive_roots(rank),
        Series::E => type_e::positive_roots(rank),
        Series::F => type_f::positive_roots(rank),
        Series::G => type_g::positive_roots(rank),
    }
}

/// Builds the Gram matrix for the given series and rank.
///
/// # Errors
///
/// Returns [`Error::UnsupportedRank`] if the rank is outside the
/// family's range.
pub(crate) fn gram_matrix(series: Series, rank: usize) -> Result<GramMatrix, Error> {
    match series {
        Series::A => type_a::gram_matrix(rank),
        Series::B => type_b::gram_matrix(rank),
        Series::C => type_c::gram_matrix(rank),
        Series::D => type_d::gram_matrix(rank),
        Series::E => type_e::gram_matrix(rank),
        Series::F => type_f::gram_matrix(rank),
        Series::G => type_g::gram_matrix(rank),
    }
}

/// A weight assembled from constant runs: `(value, count)` segments
/// concatenated in order. The interval-root recipes are all phrased as
/// runs of 0s, 1s, and 2s.
pub(crate) fn runs(segments: &[(i64, usize)]) -> Weight {
    let len = segments.iter().map(|&(_, n)| n).sum();
    let mut coefficients = Vec::with_capacity(len);
    for &(value, count) in segments {
        coefficients.extend(std::iter::repeat(value).take(count));
    }
    Weight::new(coefficients)
}

/// The near-tridiagonal base pattern shared by the classical families:
/// 2 on the diagonal, −1 between adjacent simple roots.
pub(crate) fn tridiagonal(rank: usize) -> GramMatrix {
    GramMatrix::from_fn(rank, |i, j| {
        if i == j {
            2
        } else if i.abs_diff(j) == 1 {
            -1
        } else {
            0
        }
    })
}
