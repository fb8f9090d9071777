//! Output types for GV estimation.
//!
//! ## Purpose
//!
//! This module defines [`GvStats`], the `(2, D)` global variance statistics
//! produced by estimation and consumed by the postfilter.
//!
//! ## Design notes
//!
//! * **Value object**: Immutable after construction; reusable across calls and threads.
//! * **Row semantics**: Row 0 is the GV mean, row 1 is the GV variance.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `mean` and `variance` have the same, non-zero length.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond trivial accessors.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::moments::ColumnMoments;
use crate::primitives::errors::GvError;
use crate::primitives::frames::{FeatureMatrix, Frames};

// ============================================================================
// Statistics Structure
// ============================================================================

/// Global variance statistics of a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct GvStats<T> {
    /// Per-dimension mean of per-sequence variance (row 0).
    mean: Vec<T>,

    /// Per-dimension variance of per-sequence variance (row 1).
    variance: Vec<T>,

    /// Number of sequences the statistics were estimated from, if known.
    n_sequences: Option<usize>,
}

impl<T: Float> GvStats<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build statistics from their two rows.
    pub fn from_rows(mean: Vec<T>, variance: Vec<T>) -> core::result::Result<Self, GvError> {
        Validator::validate_stats_shape(2, mean.len())?;
        if variance.len() != mean.len() {
            return Err(GvError::RaggedFrames {
                len: variance.len(),
                dim: mean.len(),
            });
        }
        Ok(Self {
            mean,
            variance,
            n_sequences: None,
        })
    }

    /// Build statistics from a `(2, D)` matrix.
    pub fn try_from_matrix(matrix: &Frames<'_, T>) -> core::result::Result<Self, GvError> {
        Validator::validate_stats_shape(matrix.n_frames(), matrix.dim())?;
        Ok(Self {
            mean: matrix.row(0).to_vec(),
            variance: matrix.row(1).to_vec(),
            n_sequences: None,
        })
    }

    /// Wrap corpus-level moments computed by the executor.
    pub(crate) fn from_moments(moments: ColumnMoments<T>, n_sequences: usize) -> Self {
        Self {
            mean: moments.mean,
            variance: moments.variance,
            n_sequences: Some(n_sequences),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Feature dimension (D).
    #[inline]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Per-dimension mean of per-sequence variance (row 0).
    #[inline]
    pub fn mean(&self) -> &[T] {
        &self.mean
    }

    /// Per-dimension variance of per-sequence variance (row 1).
    #[inline]
    pub fn variance(&self) -> &[T] {
        &self.variance
    }

    /// Number of sequences used for estimation (`None` when built from raw rows).
    #[inline]
    pub fn n_sequences(&self) -> Option<usize> {
        self.n_sequences
    }

    /// Target temporal standard deviation of dimension `d` after postfiltering.
    #[inline]
    pub fn expected_std(&self, d: usize) -> T {
        self.mean[d].sqrt()
    }

    /// Copy the statistics into a `(2, D)` matrix.
    pub fn to_matrix(&self) -> FeatureMatrix<T> {
        let mut data = Vec::with_capacity(2 * self.dim());
        data.extend_from_slice(&self.mean);
        data.extend_from_slice(&self.variance);
        FeatureMatrix::from_parts(data, self.dim())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for GvStats<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Dimensions: {}", self.dim())?;
        if let Some(n) = self.n_sequences {
            writeln!(f, "  Sequences:  {}", n)?;
        }
        writeln!(f)?;

        writeln!(f, "GV Statistics:")?;
        writeln!(f, "{:>8} {:>14} {:>14}", "Dim", "GV_Mean", "GV_Var")?;
        writeln!(f, "{:-<width$}", "", width = 38)?;

        // Show first 10 and last 10 dimensions if more than 20
        let n = self.dim();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8} {:>14.6} {:>14.6}",
                idx, self.mean[idx], self.variance[idx]
            )?;
        }

        Ok(())
    }
}
