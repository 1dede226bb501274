//! Fixed constants shared across the crate.

/// Significance level the critical-value table is tabulated for (two-tailed).
pub const ALPHA: f64 = 0.05;

/// Smallest sample size with a tabulated critical value.
pub const MIN_TABLE_N: usize = 6;

/// Largest sample size with a tabulated critical value.
pub const MAX_TABLE_N: usize = 20;

/// Default rectangle width for integrating the normal density.
pub const DEFAULT_INTEGRATION_STEP: f64 = 0.001;

/// Default upper bound of the tail integral. Mass beyond 10σ is below 1e-23.
pub const DEFAULT_UPPER_BOUND: f64 = 10.0;

/// Default largest n for which all 2^n sign patterns are enumerated.
pub const DEFAULT_MAX_ENUMERATION_N: u32 = 20;

/// Hard ceiling for enumeration: combinations are indexed by `u64` bitmasks.
pub const ENUMERATION_CEILING: u32 = 63;
