//! Main `WilcoxonTest` entry point and builder.

use crate::analysis::{exact_p_value, normal_approximation};
use crate::config::{Config, ExactThreshold};
use crate::error::Result;
use crate::result::WilcoxonResult;
use crate::statistics::{critical_value, SignedRanks};

/// Wilcoxon signed-rank test for two paired samples.
///
/// Use the builder methods to adjust the numerical knobs, then call
/// [`run`](Self::run).
///
/// # Example
///
/// ```
/// use signed_rank::WilcoxonTest;
///
/// let before = [0.71, 0.74, 0.69, 0.80, 0.77, 0.73, 0.75];
/// let after = [0.78, 0.79, 0.70, 0.86, 0.84, 0.81, 0.80];
///
/// let result = WilcoxonTest::new().run(&before, &after).unwrap();
/// assert_eq!(result.test_statistic, 0);
/// assert!(!result.null_hypothesis);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WilcoxonTest {
    config: Config,
}

impl WilcoxonTest {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Coarse integration (step 0.01) for fast, approximate runs.
    pub fn quick() -> Self {
        Self::with_config(Config {
            integration_step: 0.01,
            ..Config::default()
        })
    }

    /// Fine integration (step 0.0001).
    pub fn precise() -> Self {
        Self::with_config(Config {
            integration_step: 0.0001,
            ..Config::default()
        })
    }

    /// Set the rectangle width of the normal tail integral.
    pub fn integration_step(mut self, step: f64) -> Self {
        self.config.integration_step = step;
        self
    }

    /// Set the upper bound of the normal tail integral.
    pub fn integration_upper_bound(mut self, bound: f64) -> Self {
        self.config.integration_upper_bound = bound;
        self
    }

    /// Set the largest n for exhaustive enumeration.
    pub fn max_enumeration_n(mut self, n: u32) -> Self {
        self.config.max_enumeration_n = n;
        self
    }

    /// Choose what the exact enumeration compares against.
    pub fn exact_threshold(mut self, threshold: ExactThreshold) -> Self {
        self.config.exact_threshold = threshold;
        self
    }

    /// Merge overrides from environment variables (see [`Config::from_env`]).
    pub fn from_env(mut self) -> Self {
        self.config = self.config.from_env();
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the test on paired samples `a` and `b` (differences are `b - a`).
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the configuration fails validation
    /// - `DimensionMismatch` if `a` and `b` differ in length
    /// - `NonFiniteSample` if any value is NaN or infinite
    /// - `UnsupportedSampleSize` unless `6 <= n <= 20`
    /// - `EnumerationOverflow` if n exceeds `max_enumeration_n`
    pub fn run(&self, a: &[f64], b: &[f64]) -> Result<WilcoxonResult> {
        self.config.validate()?;

        let ranks = SignedRanks::from_pairs(a, b)?;
        let n = ranks.len();
        let t = ranks.test_statistic();
        let cv = critical_value(n)?;

        tracing::debug!(
            n,
            t,
            w = ranks.signed_rank_sum(),
            zeros = ranks.zero_count(),
            critical_value = cv,
            "signed ranks computed"
        );

        let threshold = match self.config.exact_threshold {
            ExactThreshold::CriticalValue => i64::from(cv),
            ExactThreshold::Observed => t as i64,
        };
        let exact = exact_p_value(&ranks, threshold, self.config.max_enumeration_n)?;
        tracing::debug!(threshold, exact_p_value = exact, "exact enumeration finished");

        let approx = normal_approximation(
            &ranks,
            self.config.integration_step,
            self.config.integration_upper_bound,
        );
        tracing::debug!(
            z = approx.z_score,
            approx_p_value = approx.p_value,
            "normal approximation finished"
        );

        Ok(WilcoxonResult {
            null_hypothesis: t as i64 > i64::from(cv),
            test_statistic: t,
            critical_value: cv,
            exact_p_value: exact,
            approx_p_value: approx.p_value,
            sample_size: n,
            signed_rank_sum: ranks.signed_rank_sum(),
            z_score: approx.z_score,
            approx_p_value_clamped: approx.clamped,
            exact_threshold: self.config.exact_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const KNN: [f64; 10] = [
        0.757895, 0.754098, 0.796460, 0.756757, 0.813559, 0.800000, 0.803738, 0.779661, 0.784000,
        0.775862,
    ];
    const SVM: [f64; 10] = [
        0.857143, 0.833333, 0.785714, 0.828829, 0.831858, 0.821429, 0.831858, 0.834783, 0.810811,
        0.827586,
    ];

    #[test]
    fn test_knn_vs_svm() {
        let result = WilcoxonTest::new().run(&KNN, &SVM).unwrap();
        assert_eq!(result.sample_size, 10);
        assert_eq!(result.critical_value, 8);
        assert_eq!(result.test_statistic, 1);
        assert!(!result.null_hypothesis);
        assert_eq!(result.signed_rank_sum, 53);
        assert_eq!(result.exact_p_value, 50.0 / 1024.0);
        assert!((result.z_score - 2.701_130_114_6).abs() < 1e-9);
        assert!((result.approx_p_value - 0.006_910_43).abs() < 1e-6);
        assert!(!result.approx_p_value_clamped);
    }

    #[test]
    fn test_observed_threshold_matches_permutation_p_value() {
        let result = WilcoxonTest::new()
            .exact_threshold(ExactThreshold::Observed)
            .run(&KNN, &SVM)
            .unwrap();
        // Two-tailed exact p-value for T = 1, n = 10.
        assert_eq!(result.exact_p_value, 4.0 / 1024.0);
        assert_eq!(result.exact_threshold, ExactThreshold::Observed);
    }

    #[test]
    fn test_validation_order() {
        let test = WilcoxonTest::new();
        assert_eq!(
            test.run(&KNN, &SVM[..9]),
            Err(Error::DimensionMismatch { left: 10, right: 9 })
        );
        assert!(matches!(
            test.run(&KNN[..5], &SVM[..5]),
            Err(Error::UnsupportedSampleSize { n: 5, .. })
        ));
        assert!(matches!(
            WilcoxonTest::new().integration_step(-1.0).run(&KNN, &SVM),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_enumeration_bound_applies() {
        let result = WilcoxonTest::new().max_enumeration_n(8).run(&KNN, &SVM);
        assert_eq!(result, Err(Error::EnumerationOverflow { n: 10, max: 8 }));
    }

    #[test]
    fn test_builder_sets_config() {
        let test = WilcoxonTest::quick().integration_upper_bound(8.0);
        assert!((test.config().integration_step - 0.01).abs() < 1e-12);
        assert!((test.config().integration_upper_bound - 8.0).abs() < 1e-12);
        assert!((WilcoxonTest::precise().config().integration_step - 0.0001).abs() < 1e-12);
    }
}
