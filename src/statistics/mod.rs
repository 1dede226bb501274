//! Statistical building blocks for the signed-rank test.
//!
//! This module provides the leaf computations the test is assembled from:
//! - Signed ranks of paired differences and the statistic T
//! - The tabulated α = 0.05 critical values
//! - Exhaustive enumeration of sign patterns over rank magnitudes
//! - Numerical integration of the standard normal tail

mod critical_value;
mod enumeration;
mod normal;
mod signed_rank;

pub use critical_value::{critical_value, is_supported};
pub use enumeration::{SignCombination, SignCombinations};
pub use normal::{standard_normal_pdf, two_tail_area, two_tail_area_default};
pub use signed_rank::SignedRanks;
