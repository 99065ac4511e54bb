//! Permutation space sizes.

/// `n!`, or `None` if it does not fit in a `u64` (n > 20).
///
/// # Examples
///
/// ```
/// use u_tsp::permutation::checked_factorial;
///
/// assert_eq!(checked_factorial(0), Some(1));
/// assert_eq!(checked_factorial(5), Some(120));
/// assert_eq!(checked_factorial(21), None);
/// ```
pub fn checked_factorial(n: usize) -> Option<u64> {
    (2..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Number of closed tours an exhaustive search evaluates over
/// `city_count` cities: `(city_count - 1)!`.
///
/// Zero cities gives `Some(0)`. Returns `None` when the count overflows a
/// `u64`.
pub fn checked_permutation_count(city_count: usize) -> Option<u64> {
    match city_count {
        0 => Some(0),
        n => checked_factorial(n - 1),
    }
}

/// Like [`checked_permutation_count`], saturating at `u64::MAX`.
///
/// Meant for progress display only; the search never relies on it.
///
/// # Examples
///
/// ```
/// use u_tsp::permutation::permutation_count;
///
/// assert_eq!(permutation_count(0), 0);
/// assert_eq!(permutation_count(1), 1);
/// assert_eq!(permutation_count(3), 2);
/// assert_eq!(permutation_count(40), u64::MAX);
/// ```
pub fn permutation_count(city_count: usize) -> u64 {
    checked_permutation_count(city_count).unwrap_or(u64::MAX)
}
