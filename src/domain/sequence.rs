//! Bounded integer sequences fed to the runners.
//!
//! A [`Sequence`] is what the user typed or what was generated at random. The
//! length bound is a display constraint owned by the caller, so every
//! constructor takes it explicitly.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{AlgoscopeError, Result};

/// An ordered list of integers with a caller-supplied length bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    /// Wraps values that were already validated elsewhere.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Lenient parse matching the interactive input box.
    ///
    /// Every character other than an ASCII digit or a comma is dropped before
    /// splitting on commas. Empty pieces are skipped, pieces too large for an
    /// `i64` are skipped, and the result is truncated to `max_len`. This never
    /// fails; garbage input simply yields fewer values.
    ///
    /// # Example
    ///
    /// ```
    /// use algoscope::domain::Sequence;
    ///
    /// let seq = Sequence::sanitize("5, x3,,8;,-4", 10);
    /// assert_eq!(seq.as_slice(), &[5, 3, 8, 4]);
    /// ```
    #[must_use]
    pub fn sanitize(input: &str, max_len: usize) -> Self {
        let cleaned: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ',')
            .collect();

        let values = cleaned
            .split(',')
            .filter(|piece| !piece.is_empty())
            .filter_map(|piece| piece.parse::<i64>().ok())
            .take(max_len)
            .collect();

        Self { values }
    }

    /// Strict parse used by the command line.
    ///
    /// Values may be separated by commas, whitespace, or both, and may carry a
    /// leading `-`.
    ///
    /// # Errors
    ///
    /// - [`AlgoscopeError::InvalidInput`] if a piece is not an integer
    /// - [`AlgoscopeError::SequenceTooLong`] if more than `max_len` values are given
    pub fn parse(input: &str, max_len: usize) -> Result<Self> {
        let values = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                piece
                    .parse::<i64>()
                    .map_err(|_| AlgoscopeError::InvalidInput(piece.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        if values.len() > max_len {
            return Err(AlgoscopeError::SequenceTooLong {
                len: values.len(),
                max: max_len,
            });
        }

        Ok(Self { values })
    }

    /// Draws `len` values uniformly from `1..=max_value`.
    ///
    /// A `max_value` of zero is treated as one.
    pub fn random<R: Rng>(rng: &mut R, len: usize, max_value: i64) -> Self {
        let upper = max_value.max(1);
        let values = (0..len).map(|_| rng.random_range(1..=upper)).collect();
        Self { values }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every adjacent pair is non-decreasing.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        crate::algorithms::is_sorted(&self.values)
    }

    /// Returns an ascending copy (the "Sort Array" shortcut on the search page).
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut values = self.values.clone();
        values.sort_unstable();
        Self { values }
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_values(&self.values))
    }
}

/// Formats values as `a, b, c`, the form used in log lines and input boxes.
#[must_use]
pub fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sanitize_drops_everything_but_digits_and_commas() {
        let seq = Sequence::sanitize("a1b,2 2,,-3", 15);
        assert_eq!(seq.as_slice(), &[1, 22, 3]);
    }

    #[test]
    fn sanitize_truncates_to_max_len() {
        let seq = Sequence::sanitize("1,2,3,4,5", 3);
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn sanitize_of_empty_input_is_empty() {
        assert!(Sequence::sanitize("", 5).is_empty());
        assert!(Sequence::sanitize(",,,", 5).is_empty());
    }

    #[test]
    fn parse_accepts_mixed_separators_and_negatives() {
        let seq = Sequence::parse("5, 3 -8\t4", 10).unwrap();
        assert_eq!(seq.as_slice(), &[5, 3, -8, 4]);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = Sequence::parse("1, two, 3", 10).unwrap_err();
        assert!(matches!(err, AlgoscopeError::InvalidInput(ref piece) if piece == "two"));
    }

    #[test]
    fn parse_enforces_max_len() {
        let err = Sequence::parse("1 2 3", 2).unwrap_err();
        assert!(matches!(err, AlgoscopeError::SequenceTooLong { len: 3, max: 2 }));
    }

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let seq = Sequence::random(&mut rng, 200, 50);
        assert_eq!(seq.len(), 200);
        assert!(seq.as_slice().iter().all(|v| (1..=50).contains(v)));
    }

    #[test]
    fn display_joins_with_comma_space() {
        assert_eq!(Sequence::new(vec![2, 5, 8]).to_string(), "2, 5, 8");
        assert_eq!(Sequence::default().to_string(), "");
    }

    #[test]
    fn sorted_copy_is_ascending() {
        let seq = Sequence::new(vec![3, 1, 2]);
        assert!(!seq.is_sorted());
        assert_eq!(seq.sorted().as_slice(), &[1, 2, 3]);
    }
}
