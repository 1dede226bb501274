//! Critical values of T for the two-tailed test at α = 0.05.

use crate::constants::{MAX_TABLE_N, MIN_TABLE_N};
use crate::error::{Error, Result};

/// Indexed by N. Entries below `MIN_TABLE_N` are -1 sentinels.
const CRITICAL_VALUES: [i32; MAX_TABLE_N + 1] = [
    -1, -1, -1, -1, -1, -1, 1, 2, 4, 6, 8, 11, 14, 17, 21, 25, 30, 35, 40, 46, 52,
];

/// True if a critical value is tabulated for `n`.
pub fn is_supported(n: usize) -> bool {
    (MIN_TABLE_N..=MAX_TABLE_N).contains(&n)
}

/// Look up the critical value for sample size `n`.
///
/// The null hypothesis is rejected when T ≤ the returned value.
///
/// # Errors
///
/// `UnsupportedSampleSize` unless `6 <= n <= 20`.
pub fn critical_value(n: usize) -> Result<i32> {
    if !is_supported(n) {
        return Err(Error::UnsupportedSampleSize {
            n,
            min: MIN_TABLE_N,
            max: MAX_TABLE_N,
        });
    }
    Ok(CRITICAL_VALUES[n])
}
