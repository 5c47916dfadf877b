//! The seven families of simple Lie algebras.
//!
//! Each root system is identified by a series letter and a rank. The
//! letter picks one of seven generation recipes; the rank picks the
//! dimension of the simple-root basis. Rank validity is family-specific:
//!
//! | Series | Ranks     | Positive roots |
//! |--------|-----------|----------------|
//! | A      | n ≥ 1     | n(n+1)/2       |
//! | B      | n ≥ 2     | n²             |
//! | C      | n ≥ 2     | n²             |
//! | D      | n ≥ 4     | n² − n         |
//! | E      | 6, 7, 8   | 36 / 63 / 120  |
//! | F      | 4         | 24             |
//! | G      | 2         | 6              |
//!
//! # Example
//!
//! ```
//! use lie_roots::Series;
//!
//! let s = Series::from_letter('E').unwrap();
//! assert_eq!(s, Series::E);
//! assert!(s.supports_rank(8));
//! assert!(!s.supports_rank(9));
//! assert_eq!(s.positive_root_count(8), Some(120));
//! ```

use core::fmt;

use crate::error::Error;

/// A series letter, one of the seven families A–G.
///
/// Replaces string-keyed dispatch with a closed enum: every `match` over
/// a `Series` is checked for exhaustiveness, and an unrecognized letter
/// can only arise at the [`Series::from_letter`] boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Series {
    /// A_n, n ≥ 1 (sl(n+1)).
    A,
    /// B_n, n ≥ 2 (so(2n+1)).
    B,
    /// C_n, n ≥ 2 (sp(2n)).
    C,
    /// D_n, n ≥ 4 (so(2n)).
    D,
    /// E_6, E_7, E_8.
    E,
    /// F_4.
    F,
    /// G_2.
    G,
}

impl Series {
    /// All series in canonical order.
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Parses a series letter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSeries`] for any character outside
    /// `{A, B, C, D, E, F, G}` (lowercase included — the letter set is
    /// closed and case matters in the classical notation).
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::Series;
    ///
    /// assert_eq!(Series::from_letter('G').unwrap(), Series::G);
    /// assert!(Series::from_letter('H').is_err());
    /// assert!(Series::from_letter('a').is_err());
    /// ```
    pub fn from_letter(letter: char) -> Result<Self, Error> {
        match letter {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'E' => Ok(Self::E),
            'F' => Ok(Self::F),
            'G' => Ok(Self::G),
            _ => Err(Error::UnknownSeries(letter)),
        }
    }

    /// The series letter.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }

    /// True iff this family has a root system of the given rank.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::Series;
    ///
    /// assert!(Series::A.supports_rank(1));
    /// assert!(!Series::D.supports_rank(3));
    /// assert!(Series::F.supports_rank(4));
    /// assert!(!Series::F.supports_rank(5));
    /// ```
    #[must_use]
    pub const fn supports_rank(self, rank: usize) -> bool {
        match self {
            Self::A => rank >= 1,
            Self::B | Self::C => rank >= 2,
            Self::D => rank >= 4,
            Self::E => matches!(rank, 6 | 7 | 8),
            Self::F => rank == 4,
            Self::G => rank == 2,
        }
    }

    /// Closed-form number of positive roots at the given rank, or `None`
    /// if the rank is unsupported for this family.
    ///
    /// # Example
    ///
    /// ```
    /// use lie_roots::Series;
    ///
    /// assert_eq!(Series::A.positive_root_count(3), Some(6));
    /// assert_eq!(Series::B.positive_root_count(2), Some(4));
    /// assert_eq!(Series::E.positive_root_count(7), Some(63));
    /// assert_eq!(Series::G.positive_root_count(3), None);
    /// ```
    #[must_use]
    pub const fn positive_root_count(self, rank: usize) -> Option<usize> {
        if !self.supports_rank(rank) {
            return None;
        }
        Some(match self {
            Self::A => rank * (rank + 1) / 2,
            Self::B | Self::C => rank * rank,
            Self::D => rank * rank - rank,
            Self::E => match rank {
                6 => 36,
                7 => 63,
                _ => 120,
            },
            Self::F => 24,
            Self::G => 6,
        })
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Series::{}", self.letter())
    }
}

impl TryFrom<char> for Series {
    type Error = Error;

    fn try_from(letter: char) -> Result<Self, Error> {
        Self::from_letter(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_letters_round_trip() {
        for series in Series::ALL {
            assert_eq!(Series::from_letter(series.letter()).unwrap(), series);
        }
    }

    #[test]
    fn test_unknown_letters_rejected() {
        for letter in ['H', 'Z', 'a', 'g', '1', ' '] {
            assert!(matches!(
                Series::from_letter(letter),
                Err(Error::UnknownSeries(l)) if l == letter
            ));
        }
    }

    #[test]
    fn test_rank_predicates() {
        assert!(Series::A.supports_rank(1));
        assert!(!Series::A.supports_rank(0));
        assert!(Series::B.supports_rank(2));
        assert!(!Series::B.supports_rank(1));
        assert!(Series::C.supports_rank(2));
        assert!(!Series::C.supports_rank(1));
        assert!(Series::D.supports_rank(4));
        assert!(!Series::D.supports_rank(3));
        assert!(Series::E.supports_rank(6));
        assert!(Series::E.supports_rank(7));
        assert!(Series::E.supports_rank(8));
        assert!(!Series::E.supports_rank(5));
        assert!(!Series::E.supports_rank(9));
        assert!(Series::F.supports_rank(4));
        assert!(!Series::F.supports_rank(3));
        assert!(Series::G.supports_rank(2));
        assert!(!Series::G.supports_rank(4));
    }

    #[test]
    fn test_closed_form_counts() {
        assert_eq!(Series::A.positive_root_count(3), Some(6));
        assert_eq!(Series::B.positive_root_count(2), Some(4));
        assert_eq!(Series::C.positive_root_count(2), Some(4));
        assert_eq!(Series::D.positive_root_count(4), Some(12));
        assert_eq!(Series::E.positive_root_count(6), Some(36));
        assert_eq!(Series::E.positive_root_count(7), Some(63));
        assert_eq!(Series::E.positive_root_count(8), Some(120));
        assert_eq!(Series::F.positive_root_count(4), Some(24));
        assert_eq!(Series::G.positive_root_count(2), Some(6));
        assert_eq!(Series::A.positive_root_count(0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Series::E.to_string(), "E");
        assert_eq!(format!("{:?}", Series::G), "Series::G");
    }
}
