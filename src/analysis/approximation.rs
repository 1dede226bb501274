//! Large-sample normal approximation to the signed-rank distribution.
//!
//! Under the null, the rank sum has mean μ = n(n+1)/4 and standard deviation
//! σ = √(n(n+1)(2n+1)/24). The signed sum W = Σ sign·rank is placed on the
//! rank-sum scale as (W + n(n+1)/2) / 2, which equals W⁺ when no difference
//! is zero and flips to W⁻ under a global sign flip, so |z| does not depend
//! on which sample is subtracted from which.

use serde::{Deserialize, Serialize};

use crate::statistics::{two_tail_area, SignedRanks};

/// Normal-approximation summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalApproximation {
    /// μ = n(n+1)/4.
    pub mean: f64,
    /// σ = √(n(n+1)(2n+1)/24).
    pub std_dev: f64,
    /// Standardized score.
    pub z_score: f64,
    /// Two-tailed p-value, clamped to at most 1.
    pub p_value: f64,
    /// True if the integrated area exceeded 1 before clamping.
    pub clamped: bool,
}

/// (μ, σ) of the signed-rank sum under the null for `n` pairs.
pub fn rank_sum_moments(n: usize) -> (f64, f64) {
    let n = n as f64;
    let mean = n * (n + 1.0) / 4.0;
    let variance = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0;
    (mean, variance.sqrt())
}

/// Standardize the signed rank sum and integrate the two-tailed normal area.
pub fn normal_approximation(ranks: &SignedRanks, step: f64, upper_bound: f64) -> NormalApproximation {
    let (mean, std_dev) = rank_sum_moments(ranks.len());
    let rank_scale = (ranks.signed_rank_sum() as f64 + ranks.total_rank_sum() as f64) / 2.0;

    let z_score = if std_dev > 0.0 {
        (rank_scale - mean) / std_dev
    } else {
        0.0
    };

    let raw = two_tail_area(z_score, step, upper_bound);
    let clamped = raw > 1.0;
    if clamped {
        tracing::warn!(raw, z_score, "two-tailed normal area exceeds 1, clamping");
    }

    NormalApproximation {
        mean,
        std_dev,
        z_score,
        p_value: raw.clamp(0.0, 1.0),
        clamped,
    }
}
