//! Parallel execution passes for GV operations.
//!
//! ## Purpose
//!
//! This module provides the parallel pass functions injected into the `gv`
//! crate's execution engine. Sequences of a corpus, and frames of a filtered
//! sequence, are independent, so both passes split cleanly across CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential passes.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Reproducibility**: Each output row is reduced in the same order as the
//!   sequential pass, so results do not depend on the thread count.
//!
//! ## Invariants
//!
//! * Output buffers are row-major and sized by the caller.
//! * Corpus and frames are already validated.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `gv::validator`).
//! * This module does not reduce the per-sequence variances (handled by `gv::executor`).

// External dependencies
use num_traits::Float;
use rayon::prelude::*;

// Export dependencies from gv crate
use gv::internals::algorithms::postfilter::filter_frame;
use gv::internals::math::moments::{column_means_into, column_variances_into};
use gv::internals::primitives::frames::Frames;

// ============================================================================
// Parallel Passes
// ============================================================================

/// Compute the temporal variance of every sequence in parallel.
pub fn sequence_variance_pass_parallel<T>(corpus: &[Frames<'_, T>], out: &mut [T])
where
    T: Float + Send + Sync,
{
    let Some(dim) = corpus.first().map(Frames::dim) else {
        return;
    };

    out.par_chunks_mut(dim)
        .zip(corpus.par_iter())
        .for_each_init(
            || vec![T::zero(); dim],
            |mean, (row, frames)| {
                column_means_into(frames, mean.as_mut_slice());
                column_variances_into(frames, mean.as_slice(), row);
            },
        );
}

/// Postfilter every frame in parallel.
pub fn filter_pass_parallel<T>(
    frames: &Frames<'_, T>,
    start_dim: usize,
    scale: &[T],
    mean: &[T],
    out: &mut [T],
) where
    T: Float + Send + Sync,
{
    let dim = frames.dim();
    out.par_chunks_mut(dim)
        .zip(frames.as_slice().par_chunks(dim))
        .for_each(|(out_row, row)| filter_frame(row, start_dim, scale, mean, out_row));
}
