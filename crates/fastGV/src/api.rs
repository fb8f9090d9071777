//! High-level API for parallel GV operations.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastGV`. It wraps the
//! `gv` builder, adds the `parallel` switch and accepts any [`GvInput`]
//! (frame views, feature matrices, `ndarray` arrays).
//!
//! ## Design notes
//!
//! * **Delegation**: All validation and semantics live in the `gv` crate.
//! * **Parallelism**: With `parallel(true)` (default) and the `cpu` feature,
//!   the `rayon` passes are injected into the `gv` engine.
//! * **Logging**: Operations emit `tracing` events; no subscriber is installed.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GvBuilder`] via `GlobalVariance::new()`.
//! 2. Chain configuration methods (`.start_dim()`, `.variance_policy()`, `.parallel()`).
//! 3. Call `.build()` to get a [`ParallelGvProcessor`].

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{filter_pass_parallel, sequence_variance_pass_parallel};

// External dependencies
use ndarray::Array2;
use num_traits::Float;
use std::fmt::Debug;
use tracing::{debug, warn};

// Export dependencies from gv crate
use gv::internals::api::{GvBuilder as BaseGvBuilder, GvProcessor};
use gv::internals::engine::validator::Validator;
use gv::internals::primitives::frames::Frames;

// Publicly re-exported types
pub use gv::internals::api::{FeatureMatrix, GvError, GvStats, VariancePolicy};

// Internal dependencies
pub use crate::input::GvInput;
pub use crate::output::{matrix_into_array, stats_from_array, stats_to_array};

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for GV operations with parallel support.
#[derive(Debug, Clone)]
pub struct GvBuilder<T: Float> {
    /// Base builder from the gv crate
    pub base: BaseGvBuilder<T>,

    /// Parallel execution switch (default: true)
    pub parallel: Option<bool>,

    /// Tracks if `parallel` was set multiple times
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float + Send + Sync + 'static> Default for GvBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync + 'static> GvBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the gv builder
    /// * parallel: true (fastGV extension)
    pub fn new() -> Self {
        Self {
            base: BaseGvBuilder::new(),
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the first dimension subject to GV correction.
    pub fn start_dim(mut self, start_dim: usize) -> Self {
        self.base = self.base.start_dim(start_dim);
        self
    }

    /// Set behavior for filtered dimensions with zero temporal variance.
    pub fn variance_policy(mut self, policy: VariancePolicy) -> Self {
        self.base = self.base.variance_policy(policy);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the processor.
    pub fn build(self) -> Result<ParallelGvProcessor<T>, GvError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let parallel = self.parallel.unwrap_or(true);
        let mut base = self.base;

        #[cfg(feature = "cpu")]
        {
            if parallel {
                base = base
                    .custom_variance_pass(Some(sequence_variance_pass_parallel::<T>))
                    .custom_filter_pass(Some(filter_pass_parallel::<T>));
            } else {
                base = base.custom_variance_pass(None).custom_filter_pass(None);
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            base = base.custom_variance_pass(None).custom_filter_pass(None);
        }

        Ok(ParallelGvProcessor {
            processor: base.build()?,
            parallel: parallel && cfg!(feature = "cpu"),
        })
    }
}

// ============================================================================
// Extended Processor
// ============================================================================

/// GV processor accepting `ndarray` inputs, with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelGvProcessor<T: Float> {
    processor: GvProcessor<T>,
    parallel: bool,
}

impl<T: Float + Debug + Send + Sync + 'static> ParallelGvProcessor<T> {
    /// Whether the parallel passes are active.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// First dimension subject to GV correction.
    pub fn start_dim(&self) -> usize {
        self.processor.start_dim()
    }

    /// Estimate GV statistics from a corpus of `(T_i, D)` sequences.
    pub fn estimate<I>(&self, corpus: &[I]) -> Result<GvStats<T>, GvError>
    where
        I: GvInput<T>,
    {
        let frames = corpus
            .iter()
            .map(|input| input.as_gv_frames())
            .collect::<Result<Vec<Frames<'_, T>>, GvError>>()?;

        debug!(
            sequences = frames.len(),
            dim = frames.first().map(Frames::dim),
            total_frames = frames.iter().map(Frames::n_frames).sum::<usize>(),
            parallel = self.parallel,
            "estimating GV statistics"
        );

        self.processor.estimate(&frames)
    }

    /// Postfilter a `(T, D)` sequence, returning a `(T, D)` array.
    pub fn postfilter<I>(&self, data: &I, stats: &GvStats<T>) -> Result<Array2<T>, GvError>
    where
        I: GvInput<T> + ?Sized,
    {
        let frames = data.as_gv_frames()?;
        let start_dim = self.processor.start_dim();

        debug!(
            frames = frames.n_frames(),
            dim = frames.dim(),
            start_dim,
            parallel = self.parallel,
            "applying GV postfilter"
        );

        let filtered = self.processor.postfilter(&frames, stats)?;
        warn_non_finite(&frames, &filtered, start_dim);

        matrix_into_array(filtered)
    }
}

/// Report filtered dimensions that turned non-finite.
fn warn_non_finite<T: Float>(data: &Frames<'_, T>, filtered: &FeatureMatrix<T>, start_dim: usize) {
    let (input, output) = (data.row(0), filtered.row(0));
    for d in start_dim..data.dim() {
        if input[d].is_finite() && !output[d].is_finite() {
            warn!(
                dim = d,
                "GV postfilter produced non-finite values; dimension has zero temporal variance or a negative GV mean"
            );
        }
    }
}
