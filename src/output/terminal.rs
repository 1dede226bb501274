//! Terminal output formatting with colors.

use colored::Colorize;

use crate::config::ExactThreshold;
use crate::constants::ALPHA;
use crate::result::{Decision, WilcoxonResult};

/// Format a result for human-readable terminal output.
pub fn format_result(result: &WilcoxonResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("Wilcoxon signed-rank test\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Pairs: {}\n", result.sample_size));
    output.push_str(&format!(
        "  Test statistic T: {} (critical value {} at \u{03b1} = {})\n",
        result.test_statistic, result.critical_value, ALPHA
    ));
    output.push_str(&format!("  Signed rank sum W: {}\n", result.signed_rank_sum));
    output.push('\n');

    match result.decision() {
        Decision::RetainNull => output.push_str(&format!(
            "  {}\n\n",
            "\u{2713} Null hypothesis retained".green().bold()
        )),
        Decision::RejectNull => output.push_str(&format!(
            "  {}\n\n",
            "\u{26A0} Null hypothesis rejected".yellow().bold()
        )),
    }

    output.push_str(&format!(
        "    Exact p-value:       {:.6} ({})\n",
        result.exact_p_value,
        threshold_label(result.exact_threshold)
    ));
    output.push_str(&format!(
        "    Normal approx:       {:.6} (z = {:.4})\n",
        result.approx_p_value, result.z_score
    ));
    if result.approx_p_value_clamped {
        output.push_str(&format!(
            "    {}\n",
            "Integrated area exceeded 1 and was clamped".yellow()
        ));
    }
    output.push('\n');

    output.push_str(&sep);
    output.push('\n');

    output
}

fn threshold_label(threshold: ExactThreshold) -> &'static str {
    match threshold {
        ExactThreshold::CriticalValue => "T_k \u{2264} critical value",
        ExactThreshold::Observed => "T_k \u{2264} observed T",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(null_hypothesis: bool, clamped: bool) -> WilcoxonResult {
        WilcoxonResult {
            null_hypothesis,
            test_statistic: if null_hypothesis { 20 } else { 1 },
            critical_value: 8,
            exact_p_value: 0.048828125,
            approx_p_value: 0.006910,
            sample_size: 10,
            signed_rank_sum: 53,
            z_score: 2.7011,
            approx_p_value_clamped: clamped,
            exact_threshold: ExactThreshold::CriticalValue,
        }
    }

    #[test]
    fn test_format_rejected() {
        let output = format_result(&make_result(false, false));
        assert!(output.contains("Wilcoxon signed-rank test"));
        assert!(output.contains("Null hypothesis rejected"));
        assert!(output.contains("Test statistic T: 1 (critical value 8"));
        assert!(output.contains("0.048828"));
        assert!(!output.contains("clamped"));
    }

    #[test]
    fn test_format_retained_and_clamped() {
        let output = format_result(&make_result(true, true));
        assert!(output.contains("Null hypothesis retained"));
        assert!(output.contains("clamped"));
    }
}
