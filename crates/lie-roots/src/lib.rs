//! Root systems of simple Lie algebras.
//!
//! Given a series letter (A–G) and a rank, this crate builds the
//! canonical set of positive roots as integer coefficient vectors in a
//! simple-root basis, together with the Gram matrix of the bilinear
//! form, and answers structural queries: containment, height, highest
//! root, scalar products.
//!
//! # The seven families
//!
//! | Series | Ranks   | Positive roots | Highest-root height |
//! |--------|---------|----------------|---------------------|
//! | A_n    | n ≥ 1   | n(n+1)/2       | n                   |
//! | B_n    | n ≥ 2   | n²             | 2n − 1              |
//! | C_n    | n ≥ 2   | n²             | 2n − 1              |
//! | D_n    | n ≥ 4   | n² − n         | 2n − 3              |
//! | E_n    | 6, 7, 8 | 36 / 63 / 120  | 11 / 17 / 29        |
//! | F_4    | 4       | 24             | 11                  |
//! | G_2    | 2       | 6              | 5                   |
//!
//! # Construction is eager
//!
//! Everything derived — the positive-root set, the Gram matrix, the
//! highest root, the zero weight — is computed once inside
//! [`RootSystem::new`]. A constructed system is fully immutable and
//! every query is a plain read, so sharing one across threads needs no
//! synchronization. Construction fails with [`Error`] on an unknown
//! letter or an unsupported rank, producing no instance.
//!
//! # Example
//!
//! ```
//! use lie_roots::{RootSystem, Series, Weight};
//!
//! let f4 = RootSystem::new(Series::F, 4)?;
//! assert_eq!(f4.positive_root_count(), 24);
//! assert_eq!(*f4.highest_root(), Weight::from([2, 3, 4, 2]));
//! assert_eq!(f4.highest_root().height(), 11);
//!
//! // Roots come in positive/negative pairs.
//! assert_eq!(f4.all_roots().count(), 48);
//! let alpha = Weight::from([1, 0, 0, 0]);
//! assert!(f4.contains(&alpha));
//! assert!(f4.contains(&-&alpha));
//!
//! // The bilinear form distinguishes long and short simple roots.
//! assert_eq!(f4.scalar_product(&alpha, &alpha), 4);
//! # Ok::<(), lie_roots::Error>(())
//! ```
//!
//! # Non-goals
//!
//! No Weyl-group computation, no classification or isomorphism testing,
//! no non-crystallographic systems, no serialization.

// Coefficient vectors in the simple-root basis
pub mod weight;

// The seven series letters and their rank ranges
pub mod series;

// Configuration errors
pub mod error;

// Combinatorial enumeration shared by the generators
pub mod combinat;

// The bilinear-form matrix on the simple roots
pub mod gram;

// Per-family root generators and Gram builders
mod generator;

// The root-system engine
pub mod system;

pub use error::Error;
pub use gram::GramMatrix;
pub use series::Series;
pub use system::RootSystem;
pub use weight::Weight;

/// Prelude module for convenient imports.
///
/// ```
/// use lie_roots::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::gram::GramMatrix;
    pub use crate::series::Series;
    pub use crate::system::RootSystem;
    pub use crate::weight::Weight;
}
