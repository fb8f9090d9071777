//! GV postfilter.
//!
//! ## Purpose
//!
//! This module rescales the temporal variance of a predicted feature sequence
//! so that each filtered dimension matches the corpus GV mean, while keeping
//! its temporal mean unchanged:
//!
//! ```text
//! scale[d]       = sqrt(gv_mean[d] / datavar[d])
//! filtered[t, d] = scale[d] * (data[t, d] - datamean[d]) + datamean[d]
//! ```
//!
//! Dimensions before `start_dim` (typically the power coefficient) are copied
//! through unchanged.
//!
//! ## Design notes
//!
//! * **Pluggable**: The filter pass has a fixed signature so extension crates
//!   can swap in a parallel version.
//! * **Propagating**: A zero data variance yields an infinite (or NaN) scale
//!   factor that flows into the output unless the policy rejects it upfront.
//!
//! ## Non-goals
//!
//! * This module does not validate shapes (handled by `validator`).
//! * This module does not substitute fallback scale factors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::frames::Frames;

// ============================================================================
// Variance Policy
// ============================================================================

/// Behavior when a filtered dimension has zero temporal variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariancePolicy {
    /// Let the non-finite scale factor propagate into the output.
    #[default]
    Propagate,

    /// Fail with `GvError::ZeroVariance` before producing output.
    Reject,
}

// ============================================================================
// Scale Factors
// ============================================================================

/// Per-dimension scale factors; entries before `start_dim` are one.
pub fn scale_factors<T: Float>(gv_mean: &[T], data_var: &[T], start_dim: usize) -> Vec<T> {
    gv_mean
        .iter()
        .zip(data_var)
        .enumerate()
        .map(|(d, (&target, &var))| {
            if d < start_dim {
                T::one()
            } else {
                (target / var).sqrt()
            }
        })
        .collect()
}

/// Indices of filtered dimensions that are constant over time.
///
/// Constancy is read from the raw frame values. A computed variance can be a
/// tiny positive number for a constant column whose mean rounds (e.g. `0.1`).
pub fn zero_variance_dims<'a, T: Float + 'a>(
    frames: Frames<'a, T>,
    start_dim: usize,
) -> impl Iterator<Item = usize> + 'a {
    (start_dim..frames.dim()).filter(move |&d| is_constant(frames.column(d)))
}

fn is_constant<T: Float>(mut values: impl Iterator<Item = T>) -> bool {
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}

// ============================================================================
// Filter Pass
// ============================================================================

/// Write the postfiltered frames into `out` (row-major, same shape as `frames`).
pub fn filter_pass<T: Float>(
    frames: &Frames<'_, T>,
    start_dim: usize,
    scale: &[T],
    mean: &[T],
    out: &mut [T],
) {
    for (row, out_row) in frames.rows().zip(out.chunks_exact_mut(frames.dim())) {
        filter_frame(row, start_dim, scale, mean, out_row);
    }
}

/// Postfilter a single frame.
#[inline]
pub fn filter_frame<T: Float>(row: &[T], start_dim: usize, scale: &[T], mean: &[T], out: &mut [T]) {
    out[..start_dim].copy_from_slice(&row[..start_dim]);
    for d in start_dim..row.len() {
        out[d] = scale[d] * (row[d] - mean[d]) + mean[d];
    }
}
