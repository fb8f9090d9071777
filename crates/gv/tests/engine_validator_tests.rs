#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! ## Test Organization
//!
//! 1. **Corpus Validation** - Empty corpus, inconsistent dimension, empty sequence
//! 2. **Statistics Validation** - Dimension mismatch, shape
//! 3. **Parameter Validation** - start_dim, variance policy, duplicates

use gv::internals::algorithms::postfilter::VariancePolicy;
use gv::internals::engine::validator::Validator;
use gv::internals::primitives::errors::GvError;
use gv::internals::primitives::frames::Frames;

// ============================================================================
// Corpus Validation Tests
// ============================================================================

/// Test that a consistent corpus returns its dimension.
#[test]
fn test_validate_corpus_ok() {
    let a = [1.0f64, 2.0, 3.0, 4.0];
    let b = [5.0f64, 6.0];
    let corpus = [Frames::new(&a, 2).unwrap(), Frames::new(&b, 2).unwrap()];

    assert_eq!(Validator::validate_corpus(&corpus), Ok(2));
}

/// Test that an empty corpus is rejected.
#[test]
fn test_validate_corpus_empty() {
    let corpus: [Frames<'_, f64>; 0] = [];
    assert_eq!(Validator::validate_corpus(&corpus), Err(GvError::EmptyCorpus));
}

/// Test that the first inconsistent sequence is reported.
#[test]
fn test_validate_corpus_inconsistent_dimension() {
    let a = [1.0f64, 2.0];
    let b = [1.0f64, 2.0, 3.0];
    let corpus = [
        Frames::new(&a, 2).unwrap(),
        Frames::new(&a, 2).unwrap(),
        Frames::new(&b, 3).unwrap(),
    ];

    assert_eq!(
        Validator::validate_corpus(&corpus),
        Err(GvError::InconsistentDimension {
            index: 2,
            expected: 2,
            got: 3
        })
    );
}

/// Test that a sequence without frames is rejected.
#[test]
fn test_validate_corpus_empty_sequence() {
    let a = [1.0f64, 2.0];
    let empty: [f64; 0] = [];
    let corpus = [Frames::new(&a, 2).unwrap(), Frames::new(&empty, 2).unwrap()];

    assert_eq!(
        Validator::validate_corpus(&corpus),
        Err(GvError::EmptySequence { index: 1 })
    );
}

/// Test that empty frames are rejected for postfiltering.
#[test]
fn test_validate_frames_empty() {
    let empty: [f64; 0] = [];
    let frames = Frames::new(&empty, 4).unwrap();
    assert_eq!(Validator::validate_frames(&frames), Err(GvError::EmptyInput));
}

// ============================================================================
// Statistics Validation Tests
// ============================================================================

/// Test statistics dimension checks.
#[test]
fn test_validate_stats_dim() {
    assert!(Validator::validate_stats_dim(24, 24).is_ok());
    assert_eq!(
        Validator::validate_stats_dim(24, 25),
        Err(GvError::DimensionMismatch {
            data_dim: 24,
            stats_dim: 25
        })
    );
}

/// Test statistics shape checks.
#[test]
fn test_validate_stats_shape() {
    assert!(Validator::validate_stats_shape(2, 1).is_ok());
    assert_eq!(
        Validator::validate_stats_shape(3, 4),
        Err(GvError::InvalidStatsShape { rows: 3, cols: 4 })
    );
    assert_eq!(
        Validator::validate_stats_shape(2, 0),
        Err(GvError::InvalidStatsShape { rows: 2, cols: 0 })
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test start_dim bounds.
#[test]
fn test_validate_start_dim() {
    assert!(Validator::validate_start_dim(0, 1).is_ok());
    assert!(Validator::validate_start_dim(1, 2).is_ok());
    assert_eq!(
        Validator::validate_start_dim(2, 2),
        Err(GvError::InvalidStartDim { start_dim: 2, dim: 2 })
    );
}

/// Test the zero-variance policy.
#[test]
fn test_validate_variance_policy() {
    let data = [4.0f64, 1.0, 9.0, 4.0, 2.0, 9.0];
    let frames = Frames::new(&data, 3).unwrap();

    assert!(Validator::validate_variance(&frames, 1, VariancePolicy::Propagate).is_ok());
    assert_eq!(
        Validator::validate_variance(&frames, 1, VariancePolicy::Reject),
        Err(GvError::ZeroVariance { dim: 2 })
    );

    // Dimension 0 is not filtered, so its constancy is fine
    let data = [4.0f64, 1.0, 4.0, 2.0];
    let frames = Frames::new(&data, 2).unwrap();
    assert!(Validator::validate_variance(&frames, 1, VariancePolicy::Reject).is_ok());
}

/// Test that an inexact constant column is rejected.
#[test]
fn test_validate_variance_inexact_constant() {
    let data = [0.0f64, 0.1, 1.0, 0.1, 2.0, 0.1];
    let frames = Frames::new(&data, 2).unwrap();

    assert_eq!(
        Validator::validate_variance(&frames, 1, VariancePolicy::Reject),
        Err(GvError::ZeroVariance { dim: 1 })
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("start_dim")),
        Err(GvError::DuplicateParameter {
            parameter: "start_dim"
        })
    );
}
