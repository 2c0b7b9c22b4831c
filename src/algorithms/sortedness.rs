//! Sortedness predicate gating Binary and Jump search.

/// Returns `true` iff every adjacent pair is non-decreasing.
///
/// Empty and single-element slices are sorted.
///
/// ```
/// use algoscope::algorithms::is_sorted;
///
/// assert!(is_sorted(&[1, 1, 2, 3]));
/// assert!(!is_sorted(&[3, 1, 2]));
/// ```
#[must_use]
pub fn is_sorted(values: &[i64]) -> bool {
    first_descent(values).is_none()
}

/// Index `i` of the first pair with `values[i] > values[i + 1]`.
#[must_use]
pub fn first_descent(values: &[i64]) -> Option<usize> {
    values.windows(2).position(|pair| pair[0] > pair[1])
}
