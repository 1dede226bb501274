//! Configuration for the signed-rank test.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_INTEGRATION_STEP, DEFAULT_MAX_ENUMERATION_N, DEFAULT_UPPER_BOUND, ENUMERATION_CEILING,
};
use crate::error::{Error, Result};

/// Configuration options for `WilcoxonTest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rectangle width for the normal tail integral (default: 0.001).
    ///
    /// Larger steps trade accuracy for speed.
    pub integration_step: f64,

    /// Upper bound of the tail integral (default: 10.0).
    pub integration_upper_bound: f64,

    /// Largest n for exhaustive sign enumeration (default: 20).
    ///
    /// The exact p-value costs O(2^n · n); above this bound the test fails
    /// with `EnumerationOverflow` instead of running.
    pub max_enumeration_n: u32,

    /// What enumerated statistics are compared against (default: critical value).
    pub exact_threshold: ExactThreshold,
}

/// Threshold used when counting extreme sign patterns for the exact p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExactThreshold {
    /// Compare against the tabulated critical value.
    ///
    /// The resulting "p-value" is P(T ≤ cv) under the null, which is the
    /// attained size of the table's decision rule rather than a p-value for
    /// the observed data.
    #[default]
    CriticalValue,

    /// Compare against the observed T (the textbook permutation p-value).
    Observed,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            integration_step: DEFAULT_INTEGRATION_STEP,
            integration_upper_bound: DEFAULT_UPPER_BOUND,
            max_enumeration_n: DEFAULT_MAX_ENUMERATION_N,
            exact_threshold: ExactThreshold::CriticalValue,
        }
    }
}

impl Config {
    /// Check every knob is in range.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.integration_step.is_finite() && self.integration_step > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "integration_step must be positive and finite, got {}",
                self.integration_step
            )));
        }
        if !(self.integration_upper_bound.is_finite() && self.integration_upper_bound > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "integration_upper_bound must be positive and finite, got {}",
                self.integration_upper_bound
            )));
        }
        if self.max_enumeration_n == 0 || self.max_enumeration_n > ENUMERATION_CEILING {
            return Err(Error::InvalidConfig(format!(
                "max_enumeration_n must be in 1..={}, got {}",
                ENUMERATION_CEILING, self.max_enumeration_n
            )));
        }
        Ok(())
    }

    /// Merge overrides from environment variables.
    ///
    /// - `SIGNED_RANK_INTEGRATION_STEP`
    /// - `SIGNED_RANK_UPPER_BOUND`
    /// - `SIGNED_RANK_MAX_ENUMERATION`
    /// - `SIGNED_RANK_EXACT_THRESHOLD` (`critical` or `observed`)
    ///
    /// Unset or unparsable variables leave the field unchanged.
    pub fn from_env(mut self) -> Self {
        if let Some(step) = parse_f64_env("SIGNED_RANK_INTEGRATION_STEP") {
            self.integration_step = step;
        }
        if let Some(bound) = parse_f64_env("SIGNED_RANK_UPPER_BOUND") {
            self.integration_upper_bound = bound;
        }
        if let Some(max_n) = parse_u32_env("SIGNED_RANK_MAX_ENUMERATION") {
            self.max_enumeration_n = max_n;
        }
        if let Some(threshold) = parse_threshold_env("SIGNED_RANK_EXACT_THRESHOLD") {
            self.exact_threshold = threshold;
        }
        self
    }
}

fn parse_f64_env(key: &str) -> Option<f64> {
    env::var(key).ok()?.parse().ok()
}

fn parse_u32_env(key: &str) -> Option<u32> {
    env::var(key).ok()?.parse().ok()
}

fn parse_threshold_env(key: &str) -> Option<ExactThreshold> {
    match env::var(key).ok()?.to_ascii_lowercase().as_str() {
        "critical" | "critical_value" | "cv" => Some(ExactThreshold::CriticalValue),
        "observed" | "t" => Some(ExactThreshold::Observed),
        _ => None,
    }
}
