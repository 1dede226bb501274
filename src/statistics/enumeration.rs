//! Exhaustive enumeration of sign assignments over fixed rank magnitudes.
//!
//! Combination `k` in `0..2^n` is decoded from its bits: bit `i` set means
//! the `i`-th magnitude is counted as positive. Every combination is a pure
//! function of its index, so the sweep has no iterator state and splits
//! freely across threads.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::constants::ENUMERATION_CEILING;
use crate::error::{Error, Result};
use crate::types::Sign;

/// One of the 2^n sign patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignCombination {
    bits: u64,
    n: u32,
}

impl SignCombination {
    /// Index of this combination in `0..2^n`.
    pub fn index(&self) -> u64 {
        self.bits
    }

    /// Sign assigned to position `i`, or `None` past the end.
    pub fn sign(&self, i: u32) -> Option<Sign> {
        if i >= self.n {
            return None;
        }
        Some(if (self.bits >> i) & 1 == 1 {
            Sign::Positive
        } else {
            Sign::Negative
        })
    }

    /// (sum of magnitudes assigned +, sum assigned -).
    ///
    /// `magnitudes` must hold exactly `n` entries.
    pub fn rank_sums(&self, magnitudes: &[u32]) -> (u64, u64) {
        debug_assert_eq!(magnitudes.len(), self.n as usize);
        let mut plus = 0u64;
        let mut minus = 0u64;
        for (i, &m) in magnitudes.iter().take(self.n as usize).enumerate() {
            if (self.bits >> i) & 1 == 1 {
                plus += u64::from(m);
            } else {
                minus += u64::from(m);
            }
        }
        (plus, minus)
    }

    /// min(plus, minus) for this pattern.
    pub fn statistic(&self, magnitudes: &[u32]) -> u64 {
        let (plus, minus) = self.rank_sums(magnitudes);
        plus.min(minus)
    }
}

/// The full set of 2^n sign patterns for `n` ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignCombinations {
    n: u32,
}

impl SignCombinations {
    /// Patterns over `n` ranks.
    ///
    /// # Errors
    ///
    /// `EnumerationOverflow` if 2^n does not fit the `u64` index space.
    pub fn new(n: usize) -> Result<Self> {
        if n > ENUMERATION_CEILING as usize {
            return Err(Error::EnumerationOverflow {
                n,
                max: ENUMERATION_CEILING,
            });
        }
        Ok(Self { n: n as u32 })
    }

    /// 2^n.
    pub fn len(&self) -> u64 {
        1u64 << self.n
    }

    /// Never empty: n = 0 still has the single empty pattern.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Decode combination `index`, or `None` if `index >= 2^n`.
    pub fn combination(&self, index: u64) -> Option<SignCombination> {
        (index < self.len()).then_some(SignCombination {
            bits: index,
            n: self.n,
        })
    }

    /// All combinations in index order.
    pub fn iter(&self) -> impl Iterator<Item = SignCombination> + '_ {
        (0..self.len()).map(move |bits| SignCombination { bits, n: self.n })
    }

    /// Count the patterns whose statistic is ≤ `threshold`.
    ///
    /// A negative threshold matches nothing.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless `magnitudes` holds exactly `n` entries.
    pub fn count_at_most(&self, magnitudes: &[u32], threshold: i64) -> Result<u64> {
        if magnitudes.len() != self.n as usize {
            return Err(Error::DimensionMismatch {
                left: self.n as usize,
                right: magnitudes.len(),
            });
        }
        if threshold < 0 {
            return Ok(0);
        }
        let threshold = threshold as u64;
        let n = self.n;
        let hits = move |bits: u64| {
            SignCombination { bits, n }.statistic(magnitudes) <= threshold
        };

        #[cfg(feature = "parallel")]
        let count = crate::thread_pool::install(|| {
            (0..self.len())
                .into_par_iter()
                .filter(|&bits| hits(bits))
                .count() as u64
        });

        #[cfg(not(feature = "parallel"))]
        let count = crate::thread_pool::install(|| {
            (0..self.len()).filter(|&bits| hits(bits)).count() as u64
        });

        Ok(count)
    }
}
