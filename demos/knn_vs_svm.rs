//! Compare KNN and SVM accuracy scores across ten folds.
//!
//! Run with `cargo run --example knn_vs_svm`. Set `RUST_LOG=signed_rank=debug`
//! to see the intermediate statistics.

use signed_rank::output::{format_result, to_json_pretty};
use signed_rank::{ExactThreshold, WilcoxonTest};

const KNN: [f64; 10] = [
    0.757895, 0.754098, 0.796460, 0.756757, 0.813559, 0.800000, 0.803738, 0.779661, 0.784000,
    0.775862,
];
const SVM: [f64; 10] = [
    0.857143, 0.833333, 0.785714, 0.828829, 0.831858, 0.821429, 0.831858, 0.834783, 0.810811,
    0.827586,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let test = WilcoxonTest::new().from_env();
    let result = test.run(&KNN, &SVM)?;
    print!("{}", format_result(&result));
    println!("{}", to_json_pretty(&result)?);

    let textbook = test
        .exact_threshold(ExactThreshold::Observed)
        .run(&KNN, &SVM)?;
    println!(
        "exact p-value against observed T = {}: {:.6}",
        textbook.test_statistic, textbook.exact_p_value
    );

    Ok(())
}
