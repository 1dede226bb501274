//! Error types for the signed-rank test.

use thiserror::Error;

/// Errors surfaced by the signed-rank pipeline.
///
/// Every computation is pure, so each variant is a validation failure that is
/// returned immediately; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The paired samples have different lengths.
    #[error("paired samples differ in length: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the first sample.
        left: usize,
        /// Length of the second sample.
        right: usize,
    },

    /// No critical value is tabulated for this sample size.
    #[error("sample size {n} is outside the critical-value table ({min}..={max})")]
    UnsupportedSampleSize {
        /// Requested sample size.
        n: usize,
        /// Smallest supported sample size.
        min: usize,
        /// Largest supported sample size.
        max: usize,
    },

    /// Exhaustive enumeration was requested above the configured bound.
    #[error("refusing to enumerate 2^{n} sign combinations (limit is n = {max})")]
    EnumerationOverflow {
        /// Number of ranks.
        n: usize,
        /// Configured maximum.
        max: u32,
    },

    /// A sample value is NaN or infinite.
    #[error("sample value at index {index} is not finite")]
    NonFiniteSample {
        /// Position of the offending pair.
        index: usize,
    },

    /// A configuration knob is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_values() {
        let err = Error::DimensionMismatch { left: 10, right: 9 };
        assert_eq!(err.to_string(), "paired samples differ in length: 10 vs 9");

        let err = Error::UnsupportedSampleSize { n: 21, min: 6, max: 20 };
        assert!(err.to_string().contains("21"));
        assert!(err.to_string().contains("6..=20"));
    }
}
