//! High-level API for GV estimation and postfiltering.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the postfilter and produces an immutable
//! [`GvProcessor`] that runs both operations.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called;
//!   data-dependent checks (`start_dim < D`) run on every call.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GvBuilder`] via `GlobalVariance::new()`.
//! 2. Chain configuration methods (`.start_dim()`, `.variance_policy()`).
//! 3. Call `.build()` to get a [`GvProcessor`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FilterPassFn, GvConfig, GvExecutor, SequenceVariancePassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::postfilter::VariancePolicy;
pub use crate::engine::output::GvStats;
pub use crate::primitives::errors::GvError;
pub use crate::primitives::frames::{FeatureMatrix, Frames};

/// Fluent builder for configuring GV operations.
#[derive(Debug, Clone)]
pub struct GvBuilder<T> {
    /// First dimension subject to GV correction (default: 1).
    pub start_dim: Option<usize>,

    /// Behavior for zero-variance filtered dimensions (default: Propagate).
    pub variance_policy: Option<VariancePolicy>,

    // ======================================
    // DEV
    // ======================================
    /// Custom per-sequence variance pass function.
    #[doc(hidden)]
    pub custom_variance_pass: Option<SequenceVariancePassFn<T>>,

    /// Custom filter pass function.
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GvBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GvBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            start_dim: None,
            variance_policy: None,
            custom_variance_pass: None,
            custom_filter_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the first dimension subject to GV correction.
    ///
    /// Dimensions before it (by convention the 0th, power coefficient) are
    /// passed through unchanged.
    pub fn start_dim(mut self, start_dim: usize) -> Self {
        if self.start_dim.is_some() {
            self.duplicate_param = Some("start_dim");
        }
        self.start_dim = Some(start_dim);
        self
    }

    /// Set behavior for filtered dimensions with zero temporal variance.
    pub fn variance_policy(mut self, policy: VariancePolicy) -> Self {
        if self.variance_policy.is_some() {
            self.duplicate_param = Some("variance_policy");
        }
        self.variance_policy = Some(policy);
        self
    }

    // ======================================
    // DEV
    // ======================================

    /// Set a custom per-sequence variance pass function.
    #[doc(hidden)]
    pub fn custom_variance_pass(mut self, pass: Option<SequenceVariancePassFn<T>>) -> Self {
        self.custom_variance_pass = pass;
        self
    }

    /// Set a custom filter pass function.
    #[doc(hidden)]
    pub fn custom_filter_pass(mut self, pass: Option<FilterPassFn<T>>) -> Self {
        self.custom_filter_pass = pass;
        self
    }

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<GvProcessor<T>, GvError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(GvProcessor {
            config: GvConfig {
                start_dim: self.start_dim.unwrap_or(1),
                variance_policy: self.variance_policy.unwrap_or_default(),
                custom_variance_pass: self.custom_variance_pass,
                custom_filter_pass: self.custom_filter_pass,
            },
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured, immutable GV processor.
#[derive(Debug, Clone)]
pub struct GvProcessor<T> {
    config: GvConfig<T>,
}

impl<T: Float> GvProcessor<T> {
    /// First dimension subject to GV correction.
    pub fn start_dim(&self) -> usize {
        self.config.start_dim
    }

    /// Configured zero-variance policy.
    pub fn variance_policy(&self) -> VariancePolicy {
        self.config.variance_policy
    }

    /// Estimate GV statistics from a corpus of `(T_i, D)` sequences.
    pub fn estimate(&self, corpus: &[Frames<'_, T>]) -> Result<GvStats<T>, GvError> {
        GvExecutor::estimate(corpus, &self.config)
    }

    /// Postfilter a `(T, D)` sequence so its filtered dimensions match the GV mean.
    pub fn postfilter(
        &self,
        data: &Frames<'_, T>,
        stats: &GvStats<T>,
    ) -> Result<FeatureMatrix<T>, GvError> {
        GvExecutor::postfilter(data, stats, &self.config)
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Estimate GV statistics with the default configuration.
pub fn estimate<T: Float>(corpus: &[Frames<'_, T>]) -> Result<GvStats<T>, GvError> {
    GvExecutor::estimate(corpus, &GvConfig::default())
}

/// Postfilter a sequence starting at dimension `start_dim`, propagating
/// non-finite values from zero-variance dimensions.
pub fn postfilter<T: Float>(
    data: &Frames<'_, T>,
    stats: &GvStats<T>,
    start_dim: usize,
) -> Result<FeatureMatrix<T>, GvError> {
    let config = GvConfig {
        start_dim,
        ..GvConfig::default()
    };
    GvExecutor::postfilter(data, stats, &config)
}
