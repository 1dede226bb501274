//! Common types for ranked differences.

use serde::{Deserialize, Serialize};

/// Sign of a paired difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Difference strictly greater than zero.
    Positive,
    /// Difference strictly less than zero.
    Negative,
    /// Difference exactly zero. Ranked, but counted in neither rank-sum.
    Zero,
}

impl Sign {
    /// Classify a difference.
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// +1, -1 or 0.
    pub fn as_i64(self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
            Sign::Zero => 0,
        }
    }

    /// The opposite sign; `Zero` stays `Zero`.
    pub fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
        }
    }
}

/// A rank paired with the difference it was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignedRank {
    /// 1-based rank by ascending |difference|.
    pub rank: u32,
    /// Sign of the underlying difference.
    pub sign: Sign,
    /// The difference `b[i] - a[i]`.
    pub difference: f64,
    /// Index of the pair in the input samples.
    pub index: usize,
}
