//! Column-wise moments over frames.
//!
//! Population statistics along the time axis: for each dimension `d`,
//! `mean[d] = sum_t x[t, d] / T` and `var[d] = sum_t (x[t, d] - mean[d])^2 / T`.
//! The variance is computed in two passes around the mean, never as
//! `E[x^2] - E[x]^2`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::frames::Frames;

/// Per-dimension mean and population variance of a frame sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMoments<T> {
    /// Temporal mean of each dimension.
    pub mean: Vec<T>,

    /// Temporal population variance of each dimension.
    pub variance: Vec<T>,
}

impl<T: Float> ColumnMoments<T> {
    /// Compute mean and population variance of every dimension.
    pub fn compute(frames: &Frames<'_, T>) -> Self {
        let dim = frames.dim();
        let mut mean = vec![T::zero(); dim];
        let mut variance = vec![T::zero(); dim];
        column_means_into(frames, &mut mean);
        column_variances_into(frames, &mean, &mut variance);
        Self { mean, variance }
    }
}

/// Write the temporal mean of every dimension into `out`.
///
/// With zero frames the result is NaN (0 / 0), matching the arithmetic.
pub fn column_means_into<T: Float>(frames: &Frames<'_, T>, out: &mut [T]) {
    debug_assert_eq!(out.len(), frames.dim());

    out.iter_mut().for_each(|m| *m = T::zero());
    for row in frames.rows() {
        for (acc, &x) in out.iter_mut().zip(row) {
            *acc = *acc + x;
        }
    }

    let n = count_as::<T>(frames.n_frames());
    out.iter_mut().for_each(|m| *m = *m / n);
}

/// Write the temporal population variance of every dimension into `out`.
///
/// `mean` must be the output of [`column_means_into`] for the same frames.
pub fn column_variances_into<T: Float>(frames: &Frames<'_, T>, mean: &[T], out: &mut [T]) {
    debug_assert_eq!(mean.len(), frames.dim());
    debug_assert_eq!(out.len(), frames.dim());

    out.iter_mut().for_each(|v| *v = T::zero());
    for row in frames.rows() {
        for ((acc, &x), &m) in out.iter_mut().zip(row).zip(mean) {
            let dev = x - m;
            *acc = *acc + dev * dev;
        }
    }

    let n = count_as::<T>(frames.n_frames());
    out.iter_mut().for_each(|v| *v = *v / n);
}

#[inline]
fn count_as<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or(T::nan())
}
