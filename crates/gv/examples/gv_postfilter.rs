//! GV Postfilter Examples
//!
//! This example demonstrates:
//! - Estimating GV statistics from a small corpus
//! - Postfiltering an over-smoothed sequence
//! - Handling of constant (zero-variance) dimensions

use gv::prelude::*;

fn main() -> Result<(), GvError> {
    println!("{}", "=".repeat(80));
    println!("GV Postfilter Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_estimate_and_postfilter()?;
    example_2_zero_variance()?;

    Ok(())
}

/// Example 1: Estimate and Postfilter
fn example_1_estimate_and_postfilter() -> Result<(), GvError> {
    println!("Example 1: Estimate and Postfilter");
    println!("{}", "-".repeat(80));

    let seq1 = FeatureMatrix::from_rows(&[[1.0, 2.0], [1.0, 2.0], [1.0, 2.0]])?;
    let seq2 = FeatureMatrix::from_rows(&[[1.0, 4.0], [3.0, 2.0], [5.0, 0.0]])?;
    let corpus = [seq1.as_frames(), seq2.as_frames()];

    let model = GlobalVariance::new().start_dim(1).build()?;
    let stats = model.estimate(&corpus)?;
    println!("{}", stats);

    let predicted = FeatureMatrix::from_rows(&[[0.0, 10.0], [0.0, 20.0], [0.0, 30.0]])?;
    let filtered = model.postfilter(&predicted.as_frames(), &stats)?;

    println!("{:>8} {:>12} {:>12}", "Frame", "Predicted", "Filtered");
    for t in 0..filtered.n_frames() {
        println!("{:>8} {:>12.4} {:>12.4}", t, predicted[(t, 1)], filtered[(t, 1)]);
    }

    println!();
    Ok(())
}

/// Example 2: Zero-Variance Dimensions
fn example_2_zero_variance() -> Result<(), GvError> {
    println!("Example 2: Zero-Variance Dimensions");
    println!("{}", "-".repeat(80));

    let stats = GvStats::from_rows(vec![1.0, 1.0], vec![0.0, 0.0])?;
    let flat = FeatureMatrix::from_rows(&[[0.0, 3.0], [1.0, 3.0], [2.0, 3.0]])?;

    let propagated = postfilter(&flat.as_frames(), &stats, 1)?;
    println!("Propagate: dimension 1 -> {:?}", propagated.column(1).collect::<Vec<_>>());

    let strict = GlobalVariance::new().variance_policy(Reject).build()?;
    match strict.postfilter(&flat.as_frames(), &stats) {
        Ok(_) => println!("Reject: unexpectedly succeeded"),
        Err(e) => println!("Reject: {}", e),
    }

    println!();
    Ok(())
}
