//! JSON serialization for test results.

use crate::result::WilcoxonResult;

/// Serialize a result to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (non-finite floats are written
/// as `null`, so this does not happen in practice).
pub fn to_json(result: &WilcoxonResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a result to a pretty-printed JSON string.
///
/// # Errors
///
/// See [`to_json`].
pub fn to_json_pretty(result: &WilcoxonResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExactThreshold;

    fn make_result() -> WilcoxonResult {
        WilcoxonResult {
            null_hypothesis: false,
            test_statistic: 1,
            critical_value: 8,
            exact_p_value: 0.048828125,
            approx_p_value: 0.0069,
            sample_size: 10,
            signed_rank_sum: 53,
            z_score: 2.7,
            approx_p_value_clamped: false,
            exact_threshold: ExactThreshold::CriticalValue,
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_result()).unwrap();
        assert!(json.contains("\"null_hypothesis\":false"));
        assert!(json.contains("\"test_statistic\":1"));
        assert!(json.contains("\"critical_value\":8"));
        assert!(json.contains("\"exact_threshold\":\"critical_value\""));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_result()).unwrap();
        assert!(json.contains('\n'));
        let parsed: WilcoxonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, make_result());
    }
}
