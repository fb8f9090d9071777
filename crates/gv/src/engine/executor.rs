//! Execution engine for GV operations.
//!
//! ## Purpose
//!
//! This module orchestrates the two GV operations: it validates inputs,
//! allocates the working buffers, runs the (possibly injected) passes and
//! assembles the outputs.
//!
//! ## Design notes
//!
//! * Validation always runs before the first pass; no partial output escapes.
//! * Passes are plain function pointers so extension crates can inject
//!   parallel versions without changing semantics.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The per-sequence variance buffer is row-major `(n_files, D)`.
//! * The filter output buffer has the same length as the input frames.
//!
//! ## Non-goals
//!
//! * This module does not handle parallel execution directly (handled by extension crates).
//! * This module does not provide public-facing configuration (handled by the API).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::estimation::{reduce_sequence_variances, sequence_variance_pass};
use crate::algorithms::postfilter::{VariancePolicy, filter_pass, scale_factors};
use crate::engine::output::GvStats;
use crate::engine::validator::Validator;
use crate::math::moments::ColumnMoments;
use crate::primitives::errors::GvError;
use crate::primitives::frames::{FeatureMatrix, Frames};

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom per-sequence variance pass function
#[doc(hidden)]
pub type SequenceVariancePassFn<T> = fn(
    &[Frames<'_, T>], // corpus
    &mut [T],         // output (n_files x dim, row-major)
);

/// Signature for custom filter pass function
#[doc(hidden)]
pub type FilterPassFn<T> = fn(
    &Frames<'_, T>, // data
    usize,          // start_dim
    &[T],           // scale
    &[T],           // datamean
    &mut [T],       // output (same shape as data)
);

/// Resolved configuration for a GV execution.
#[derive(Debug, Clone)]
pub struct GvConfig<T> {
    /// First dimension subject to GV correction.
    pub start_dim: usize,

    /// Behavior for zero-variance filtered dimensions.
    pub variance_policy: VariancePolicy,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom per-sequence variance pass function.
    #[doc(hidden)]
    pub custom_variance_pass: Option<SequenceVariancePassFn<T>>,

    /// Custom filter pass function.
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,
}

impl<T> Default for GvConfig<T> {
    fn default() -> Self {
        Self {
            start_dim: 1,
            variance_policy: VariancePolicy::default(),
            custom_variance_pass: None,
            custom_filter_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless runner for GV estimation and postfiltering.
pub struct GvExecutor;

impl GvExecutor {
    /// Estimate GV statistics from a corpus.
    pub fn estimate<T: Float>(
        corpus: &[Frames<'_, T>],
        config: &GvConfig<T>,
    ) -> Result<GvStats<T>, GvError> {
        let dim = Validator::validate_corpus(corpus)?;

        // Stage 1: per-sequence temporal variances
        let mut variances = vec![T::zero(); corpus.len() * dim];
        let pass = config.custom_variance_pass.unwrap_or(sequence_variance_pass::<T>);
        pass(corpus, &mut variances);

        // Stage 2: mean and variance across sequences
        let matrix = Frames::new(&variances, dim)?;
        let moments = reduce_sequence_variances(&matrix);

        Ok(GvStats::from_moments(moments, corpus.len()))
    }

    /// Apply the GV postfilter to a single sequence.
    pub fn postfilter<T: Float>(
        data: &Frames<'_, T>,
        stats: &GvStats<T>,
        config: &GvConfig<T>,
    ) -> Result<FeatureMatrix<T>, GvError> {
        Validator::validate_frames(data)?;
        let dim = data.dim();
        Validator::validate_stats_dim(dim, stats.dim())?;
        Validator::validate_start_dim(config.start_dim, dim)?;

        Validator::validate_variance(data, config.start_dim, config.variance_policy)?;

        let moments = ColumnMoments::compute(data);

        let scale = scale_factors(stats.mean(), &moments.variance, config.start_dim);
        let mut filtered = vec![T::zero(); data.as_slice().len()];
        let pass = config.custom_filter_pass.unwrap_or(filter_pass::<T>);
        pass(data, config.start_dim, &scale, &moments.mean, &mut filtered);

        Ok(FeatureMatrix::from_parts(filtered, dim))
    }
}
