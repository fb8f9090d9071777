//! fastGV Parallel Postfilter Examples
//!
//! This example demonstrates features specific to `fastGV`:
//! - Parallel estimation over a corpus using `rayon`
//! - Sequential fallback
//! - `ndarray` inputs and outputs
//! - `tracing` output

use fastGV::prelude::*;
use ndarray::{Array2, Axis};
use std::time::Instant;

fn main() -> Result<(), GvError> {
    tracing_subscriber::fmt()
        .with_env_filter("fastGV=debug")
        .init();

    println!("{}", "=".repeat(80));
    println!("fastGV Parallel Postfilter Examples");
    println!("{}", "=".repeat(80));
    println!();

    let corpus: Vec<Array2<f64>> = (0..64).map(|i| natural_sequence(400 + 13 * i, 25, i)).collect();

    example_1_parallel_execution(&corpus)?;
    example_2_sequential_fallback(&corpus)?;

    Ok(())
}

/// Synthetic "natural" mel-cepstrum-like sequence: decaying per-dimension amplitude.
fn natural_sequence(n_frames: usize, dim: usize, seed: usize) -> Array2<f64> {
    Array2::from_shape_fn((n_frames, dim), |(t, d)| {
        let amp = 1.0 / (1.0 + d as f64);
        let phase = (seed * 7 + d * 3) as f64;
        amp * ((t as f64) * 0.05 * (1.0 + d as f64 * 0.1) + phase).sin()
    })
}

/// Example 1: Parallel Execution
/// Estimates GV from a corpus and postfilters an over-smoothed prediction
fn example_1_parallel_execution(corpus: &[Array2<f64>]) -> Result<(), GvError> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let model = GlobalVariance::new()
        .start_dim(1) // Keep the power coefficient untouched
        .parallel(true) // Enable parallel execution (default)
        .build()?;

    let stats = model.estimate(corpus)?;
    println!("Estimated GV from {} sequences in {:?}", corpus.len(), start.elapsed());
    println!("{}", stats);

    // Regression output is over-smoothed: shrink a natural sequence by half
    let predicted = natural_sequence(500, 25, 1000).mapv(|v| 0.5 * v);
    let filtered = model.postfilter(&predicted, &stats)?;

    let before = predicted.var_axis(Axis(0), 0.0);
    let after = filtered.var_axis(Axis(0), 0.0);
    println!("{:>8} {:>14} {:>14} {:>14}", "Dim", "Var_Before", "Var_After", "GV_Mean");
    for d in 0..5 {
        println!(
            "{:>8} {:>14.6} {:>14.6} {:>14.6}",
            d,
            before[d],
            after[d],
            stats.mean()[d]
        );
    }

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Same computation on a single thread; results are identical
fn example_2_sequential_fallback(corpus: &[Array2<f64>]) -> Result<(), GvError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let sequential = GlobalVariance::new().parallel(false).build()?;
    let parallel = GlobalVariance::new().parallel(true).build()?;

    let start = Instant::now();
    let s_stats = sequential.estimate(corpus)?;
    let s_time = start.elapsed();

    let start = Instant::now();
    let p_stats = parallel.estimate(corpus)?;
    let p_time = start.elapsed();

    println!("Sequential: {:?}, Parallel: {:?}", s_time, p_time);
    println!("Identical statistics: {}", s_stats == p_stats);
    println!("As (2, D) array:\n{:.4}", stats_to_array(&p_stats));

    println!();
    Ok(())
}
