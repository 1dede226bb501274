//! Test result types.

use serde::{Deserialize, Serialize};

use crate::config::ExactThreshold;

/// Complete result of one signed-rank test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WilcoxonResult {
    /// True if the null hypothesis is retained (T > critical value).
    pub null_hypothesis: bool,

    /// Observed T = min(W⁺, W⁻).
    pub test_statistic: u64,

    /// Tabulated two-tailed critical value at α = 0.05.
    pub critical_value: i32,

    /// Fraction of the 2^n sign patterns at or below the exact threshold.
    pub exact_p_value: f64,

    /// Two-tailed normal-approximation p-value, clamped to [0, 1].
    pub approx_p_value: f64,

    /// Number of pairs.
    pub sample_size: usize,

    /// W = Σ sign·rank.
    pub signed_rank_sum: i64,

    /// Standardized score used for `approx_p_value`.
    pub z_score: f64,

    /// True if the integrated two-tailed area exceeded 1 and was clamped.
    pub approx_p_value_clamped: bool,

    /// Threshold the exact enumeration compared against.
    pub exact_threshold: ExactThreshold,
}

/// Outcome of the table-based decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// T > critical value: no evidence of a difference at α = 0.05.
    RetainNull,
    /// T ≤ critical value: the paired samples differ at α = 0.05.
    RejectNull,
}

impl WilcoxonResult {
    /// Table-based decision.
    pub fn decision(&self) -> Decision {
        if self.null_hypothesis {
            Decision::RetainNull
        } else {
            Decision::RejectNull
        }
    }

    /// True if the null hypothesis is rejected.
    pub fn is_significant(&self) -> bool {
        !self.null_hypothesis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_follows_null_flag() {
        let mut result = WilcoxonResult {
            null_hypothesis: true,
            test_statistic: 20,
            critical_value: 8,
            exact_p_value: 0.05,
            approx_p_value: 0.4,
            sample_size: 10,
            signed_rank_sum: 15,
            z_score: 0.76,
            approx_p_value_clamped: false,
            exact_threshold: ExactThreshold::CriticalValue,
        };
        assert_eq!(result.decision(), Decision::RetainNull);
        assert!(!result.is_significant());

        result.null_hypothesis = false;
        assert_eq!(result.decision(), Decision::RejectNull);
        assert!(result.is_significant());
    }
}
