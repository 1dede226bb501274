//! Signed-rank statistic for paired samples.
//!
//! Differences `d_i = b[i] - a[i]` are ordered by |d_i| ascending with a
//! stable sort, so equal magnitudes keep their input order, and ranks
//! 1..=n are assigned positionally. Tied magnitudes are not averaged.
//!
//! A zero difference still consumes a rank slot but contributes to neither
//! rank-sum. This biases T downward when zeros occur.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Sign, SignedRank};

/// Ranked paired differences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedRanks {
    /// Entries in rank order (rank 1 first).
    ranks: Vec<SignedRank>,
}

impl SignedRanks {
    /// Rank the differences `b[i] - a[i]`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the samples differ in length, `NonFiniteSample`
    /// if any value is NaN or infinite.
    pub fn from_pairs(a: &[f64], b: &[f64]) -> Result<Self> {
        if a.len() != b.len() {
            return Err(Error::DimensionMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        if let Some(index) = a
            .iter()
            .zip(b)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(Error::NonFiniteSample { index });
        }

        let differences: Vec<f64> = a.iter().zip(b).map(|(&x, &y)| y - x).collect();
        Self::from_differences(&differences)
    }

    /// Rank precomputed differences.
    ///
    /// # Errors
    ///
    /// `NonFiniteSample` if any difference is NaN or infinite.
    pub fn from_differences(differences: &[f64]) -> Result<Self> {
        if let Some(index) = differences.iter().position(|d| !d.is_finite()) {
            return Err(Error::NonFiniteSample { index });
        }

        let mut order: Vec<usize> = (0..differences.len()).collect();
        // `sort_by` is stable: ties in |d| keep input order.
        order.sort_by(|&i, &j| differences[i].abs().total_cmp(&differences[j].abs()));

        let ranks = order
            .into_iter()
            .enumerate()
            .map(|(pos, index)| SignedRank {
                rank: pos as u32 + 1,
                sign: Sign::of(differences[index]),
                difference: differences[index],
                index,
            })
            .collect();

        Ok(Self { ranks })
    }

    /// Number of ranked pairs.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// True if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Ranked entries, rank 1 first.
    pub fn ranks(&self) -> &[SignedRank] {
        &self.ranks
    }

    /// Rank magnitudes (always `1..=n`), in rank order.
    pub fn magnitudes(&self) -> Vec<u32> {
        self.ranks.iter().map(|r| r.rank).collect()
    }

    /// Sum of ranks whose difference is positive (W⁺).
    pub fn positive_rank_sum(&self) -> u64 {
        self.sum_where(Sign::Positive)
    }

    /// Sum of ranks whose difference is negative (W⁻).
    pub fn negative_rank_sum(&self) -> u64 {
        self.sum_where(Sign::Negative)
    }

    /// T = min(W⁺, W⁻).
    pub fn test_statistic(&self) -> u64 {
        self.positive_rank_sum().min(self.negative_rank_sum())
    }

    /// W = Σ sign_i · rank_i.
    pub fn signed_rank_sum(&self) -> i64 {
        self.ranks
            .iter()
            .map(|r| r.sign.as_i64() * i64::from(r.rank))
            .sum()
    }

    /// Number of exactly-zero differences.
    pub fn zero_count(&self) -> usize {
        self.ranks.iter().filter(|r| r.sign == Sign::Zero).count()
    }

    /// n(n+1)/2, the sum of all ranks.
    pub fn total_rank_sum(&self) -> u64 {
        let n = self.ranks.len() as u64;
        n * (n + 1) / 2
    }

    fn sum_where(&self, sign: Sign) -> u64 {
        self.ranks
            .iter()
            .filter(|r| r.sign == sign)
            .map(|r| u64::from(r.rank))
            .sum()
    }
}
