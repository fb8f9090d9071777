#![cfg(feature = "dev")]
//! Tests for GV statistics estimation.
//!
//! These tests verify the two estimation stages:
//! - The per-sequence variance pass
//! - The reduction to GV mean and GV variance across sequences
//!
//! ## Test Organization
//!
//! 1. **Variance Pass** - Row layout, population divisor
//! 2. **Reduction** - Mean and variance of variances
//! 3. **Corpus Scenarios** - Reference corpus, single-frame corpus

use approx::assert_relative_eq;

use gv::internals::algorithms::estimation::{reduce_sequence_variances, sequence_variance_pass};
use gv::internals::primitives::frames::Frames;

// ============================================================================
// Helper Functions
// ============================================================================

fn reference_corpus() -> (Vec<f64>, Vec<f64>) {
    let seq1 = vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
    let seq2 = vec![1.0, 4.0, 3.0, 2.0, 5.0, 0.0];
    (seq1, seq2)
}

// ============================================================================
// Variance Pass Tests
// ============================================================================

/// Test that each sequence fills one row, in corpus order.
#[test]
fn test_variance_pass_row_layout() {
    let (seq1, seq2) = reference_corpus();
    let corpus = [Frames::new(&seq1, 2).unwrap(), Frames::new(&seq2, 2).unwrap()];

    let mut out = vec![f64::NAN; 4];
    sequence_variance_pass(&corpus, &mut out);

    assert_eq!(&out[..2], &[0.0, 0.0]);
    assert_relative_eq!(out[2], 8.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(out[3], 8.0 / 3.0, epsilon = 1e-12);
}

/// Test that sequences of different lengths are each normalised by their own T.
#[test]
fn test_variance_pass_varying_lengths() {
    let short = vec![0.0f64, 2.0];
    let long = vec![0.0f64, 0.0, 0.0, 4.0];
    let corpus = [Frames::new(&short, 1).unwrap(), Frames::new(&long, 1).unwrap()];

    let mut out = vec![0.0; 2];
    sequence_variance_pass(&corpus, &mut out);

    // [0, 2] -> mean 1, var 1; [0, 0, 0, 4] -> mean 1, var (1 + 1 + 1 + 9) / 4 = 3
    assert_relative_eq!(out[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(out[1], 3.0, epsilon = 1e-12);
}

/// Test that an empty corpus leaves the output untouched.
#[test]
fn test_variance_pass_empty_corpus() {
    let corpus: [Frames<'_, f64>; 0] = [];
    let mut out: Vec<f64> = Vec::new();
    sequence_variance_pass(&corpus, &mut out);
    assert!(out.is_empty());
}

// ============================================================================
// Reduction Tests
// ============================================================================

/// Test that the reduction is the population mean/variance of the variance rows.
#[test]
fn test_reduce_sequence_variances() {
    // Three sequences, one dimension: variances {1, 2, 6}
    // mean = 3, var = (4 + 1 + 9) / 3
    let variances = [1.0f64, 2.0, 6.0];
    let matrix = Frames::new(&variances, 1).unwrap();
    let gv = reduce_sequence_variances(&matrix);

    assert_relative_eq!(gv.mean[0], 3.0, epsilon = 1e-12);
    assert_relative_eq!(gv.variance[0], 14.0 / 3.0, epsilon = 1e-12);
}

/// Test that a single sequence has zero GV variance.
#[test]
fn test_reduce_single_sequence() {
    let variances = [0.5f64, 4.0];
    let matrix = Frames::new(&variances, 2).unwrap();
    let gv = reduce_sequence_variances(&matrix);

    assert_eq!(gv.mean, vec![0.5, 4.0]);
    assert_eq!(gv.variance, vec![0.0, 0.0]);
}

// ============================================================================
// Corpus Scenario Tests
// ============================================================================

/// Test the reference corpus end to end through both stages.
#[test]
fn test_reference_corpus() {
    let (seq1, seq2) = reference_corpus();
    let corpus = [Frames::new(&seq1, 2).unwrap(), Frames::new(&seq2, 2).unwrap()];

    let mut variances = vec![0.0; 4];
    sequence_variance_pass(&corpus, &mut variances);
    let gv = reduce_sequence_variances(&Frames::new(&variances, 2).unwrap());

    // Variances {0, 8/3} per dimension -> mean 4/3, var 16/9
    for d in 0..2 {
        assert_relative_eq!(gv.mean[d], 4.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(gv.variance[d], 16.0 / 9.0, epsilon = 1e-12);
    }
}

/// Test that a corpus of single-frame sequences yields all-zero statistics.
#[test]
fn test_single_frame_corpus() {
    let a = vec![1.0f64, 2.0, 3.0];
    let b = vec![-4.0f64, 0.0, 9.0];
    let corpus = [Frames::new(&a, 3).unwrap(), Frames::new(&b, 3).unwrap()];

    let mut variances = vec![f64::NAN; 6];
    sequence_variance_pass(&corpus, &mut variances);
    let gv = reduce_sequence_variances(&Frames::new(&variances, 3).unwrap());

    assert_eq!(gv.mean, vec![0.0; 3]);
    assert_eq!(gv.variance, vec![0.0; 3]);
}
