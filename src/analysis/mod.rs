//! p-value estimators for the signed-rank test.
//!
//! 1. **Exact** ([`exact`]): proportion of all 2^n equally likely sign
//!    patterns whose statistic is at or below a threshold
//! 2. **Normal approximation** ([`approximation`]): standardized rank sum and
//!    the numerically integrated two-tailed normal area

mod approximation;
mod exact;

pub use approximation::{normal_approximation, rank_sum_moments, NormalApproximation};
pub use exact::exact_p_value;
