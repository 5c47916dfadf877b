//! Configuration errors raised at root-system construction.
//!
//! Construction is the only fallible surface of the crate: either the
//! series letter is not one of A–G, or the rank is outside the family's
//! supported range. Once a [`crate::RootSystem`] exists it cannot fail.

use thiserror::Error;

use crate::series::Series;

/// Invalid (series, rank) configuration.
///
/// # Example
///
/// ```
/// use lie_roots::{Error, RootSystem, Series};
///
/// let err = RootSystem::new(Series::F, 5).unwrap_err();
/// assert_eq!(err, Error::UnsupportedRank { series: Series::F, rank: 5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The series letter is not one of A–G.
    #[error("unknown series letter '{0}'")]
    UnknownSeries(char),

    /// The rank is outside the supported range for the series.
    #[error("incorrect rank parameter: {series}_{rank} is not a root system")]
    UnsupportedRank {
        /// The series whose generator rejected the rank.
        series: Series,
        /// The rejected rank.
        rank: usize,
    },
}
