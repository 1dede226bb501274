//! # signed-rank
//!
//! Wilcoxon signed-rank test for two paired samples.
//!
//! The test ranks the paired differences `b[i] - a[i]` by magnitude and
//! derives T = min(W⁺, W⁻), then reports:
//! - The α = 0.05 two-tailed decision from a critical-value table (6 ≤ n ≤ 20)
//! - An exact p-value from enumerating all 2^n sign patterns
//! - A normal-approximation p-value from numerically integrating the
//!   standard normal density
//!
//! ## Quick Start
//!
//! ```
//! use signed_rank::wilcoxon;
//!
//! let knn = [0.757895, 0.754098, 0.796460, 0.756757, 0.813559,
//!            0.800000, 0.803738, 0.779661, 0.784000, 0.775862];
//! let svm = [0.857143, 0.833333, 0.785714, 0.828829, 0.831858,
//!            0.821429, 0.831858, 0.834783, 0.810811, 0.827586];
//!
//! let result = wilcoxon(&knn, &svm).unwrap();
//! assert_eq!(result.test_statistic, 1);
//! assert!(result.is_significant());
//! ```
//!
//! ## Zero differences
//!
//! A pair with equal values keeps its rank slot but is counted in neither
//! rank-sum, which lowers T. Tied magnitudes are ranked in input order, not
//! averaged.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod thread_pool;
mod types;
mod wilcoxon;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::{Config, ExactThreshold};
pub use constants::{
    ALPHA, DEFAULT_INTEGRATION_STEP, DEFAULT_MAX_ENUMERATION_N, DEFAULT_UPPER_BOUND, MAX_TABLE_N,
    MIN_TABLE_N,
};
pub use error::{Error, Result};
pub use result::{Decision, WilcoxonResult};
pub use types::{Sign, SignedRank};
pub use wilcoxon::WilcoxonTest;

/// Run the signed-rank test with the default configuration.
///
/// Shorthand for `WilcoxonTest::new().run(a, b)`.
///
/// # Errors
///
/// See [`WilcoxonTest::run`].
pub fn wilcoxon(a: &[f64], b: &[f64]) -> Result<WilcoxonResult> {
    WilcoxonTest::new().run(a, b)
}
