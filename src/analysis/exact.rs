//! Exact p-value by exhaustive sign enumeration.

use crate::error::{Error, Result};
use crate::statistics::{SignCombinations, SignedRanks};

/// Fraction of the 2^n sign patterns over the rank magnitudes of `ranks`
/// whose statistic min(Σ⁺, Σ⁻) is ≤ `threshold`.
///
/// The original signs in `ranks` are ignored; only the magnitudes are
/// re-signed. A negative threshold yields 0.
///
/// # Errors
///
/// `EnumerationOverflow` if `ranks.len()` exceeds `max_n`.
pub fn exact_p_value(ranks: &SignedRanks, threshold: i64, max_n: u32) -> Result<f64> {
    let n = ranks.len();
    if n > max_n as usize {
        tracing::warn!(n, max_n, "exact enumeration skipped: 2^n sweep exceeds limit");
        return Err(Error::EnumerationOverflow { n, max: max_n });
    }

    let combos = SignCombinations::new(n)?;
    let magnitudes = ranks.magnitudes();
    let hits = combos.count_at_most(&magnitudes, threshold)?;

    Ok(hits as f64 / combos.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks_of(n: usize) -> SignedRanks {
        let diffs: Vec<f64> = (1..=n).map(|i| i as f64).collect();
        SignedRanks::from_differences(&diffs).unwrap()
    }

    #[test]
    fn test_two_tailed_tail_for_ten_ranks() {
        let ranks = ranks_of(10);
        assert_eq!(exact_p_value(&ranks, 1, 20).unwrap(), 4.0 / 1024.0);
        assert_eq!(exact_p_value(&ranks, 8, 20).unwrap(), 50.0 / 1024.0);
    }

    #[test]
    fn test_threshold_extremes() {
        let ranks = ranks_of(8);
        assert_eq!(exact_p_value(&ranks, -1, 20).unwrap(), 0.0);
        assert_eq!(exact_p_value(&ranks, 36, 20).unwrap(), 1.0);
    }

    #[test]
    fn test_ignores_original_signs() {
        let mixed = SignedRanks::from_differences(&[1.0, -2.0, 3.0, -4.0, 5.0, -6.0]).unwrap();
        let positive = ranks_of(6);
        for threshold in 0..=10 {
            assert_eq!(
                exact_p_value(&mixed, threshold, 20).unwrap(),
                exact_p_value(&positive, threshold, 20).unwrap()
            );
        }
    }

    #[test]
    fn test_overflow_guard() {
        let ranks = ranks_of(12);
        assert_eq!(
            exact_p_value(&ranks, 5, 10),
            Err(Error::EnumerationOverflow { n: 12, max: 10 })
        );
    }
}
