//! Input validation for GV configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before every GV
//! operation. It checks corpus consistency, frame counts, statistics shape,
//! the `start_dim` bound and the zero-variance policy.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Shape checks run before any pass over the data.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy the shape contracts of the algorithms.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness; non-finite input propagates.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::postfilter::{VariancePolicy, zero_variance_dims};
use crate::primitives::errors::GvError;
use crate::primitives::frames::Frames;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for GV configuration and input data.
///
/// Provides static methods returning `Result<_, GvError>` that fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a corpus for estimation and return its common dimension.
    pub fn validate_corpus<T: Float>(corpus: &[Frames<'_, T>]) -> Result<usize, GvError> {
        // Check 1: Non-empty corpus
        let first = corpus.first().ok_or(GvError::EmptyCorpus)?;
        let expected = first.dim();

        // Check 2: Shared dimension and at least one frame per sequence
        for (index, frames) in corpus.iter().enumerate() {
            if frames.dim() != expected {
                return Err(GvError::InconsistentDimension {
                    index,
                    expected,
                    got: frames.dim(),
                });
            }
            if frames.is_empty() {
                return Err(GvError::EmptySequence { index });
            }
        }

        Ok(expected)
    }

    /// Validate a sequence to be postfiltered.
    pub fn validate_frames<T: Float>(frames: &Frames<'_, T>) -> Result<(), GvError> {
        if frames.is_empty() {
            return Err(GvError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that statistics and data share the same dimension.
    pub fn validate_stats_dim(data_dim: usize, stats_dim: usize) -> Result<(), GvError> {
        if data_dim != stats_dim {
            return Err(GvError::DimensionMismatch {
                data_dim,
                stats_dim,
            });
        }
        Ok(())
    }

    /// Validate that a statistics matrix is shaped `(2, D)` with `D >= 1`.
    pub fn validate_stats_shape(rows: usize, cols: usize) -> Result<(), GvError> {
        if rows != 2 || cols == 0 {
            return Err(GvError::InvalidStatsShape { rows, cols });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the first filtered dimension against the data dimension.
    pub fn validate_start_dim(start_dim: usize, dim: usize) -> Result<(), GvError> {
        if start_dim >= dim {
            return Err(GvError::InvalidStartDim { start_dim, dim });
        }
        Ok(())
    }

    /// Apply the zero-variance policy to the filtered dimensions of a sequence.
    pub fn validate_variance<T: Float>(
        data: &Frames<'_, T>,
        start_dim: usize,
        policy: VariancePolicy,
    ) -> Result<(), GvError> {
        if policy == VariancePolicy::Reject {
            if let Some(dim) = zero_variance_dims(*data, start_dim).next() {
                return Err(GvError::ZeroVariance { dim });
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), GvError> {
        if let Some(param) = duplicate_param {
            return Err(GvError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
