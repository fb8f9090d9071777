//! GV statistics estimation.
//!
//! ## Purpose
//!
//! This module estimates global variance statistics from a corpus of feature
//! sequences. Each sequence contributes one vector of per-dimension temporal
//! variances; the statistics are the mean and population variance of those
//! vectors across the corpus.
//!
//! ## Design notes
//!
//! * **Two stages**: A per-sequence variance pass fills an `(n_files, D)`
//!   matrix, which is then reduced column-wise.
//! * **Pluggable**: The per-sequence pass has a fixed signature so extension
//!   crates can swap in a parallel version.
//! * **Population divisors**: Both stages divide by the sample count.
//!
//! ## Invariants
//!
//! * The variance matrix has one row per sequence, in corpus order.
//! * A single-frame sequence contributes a zero variance vector.
//!
//! ## Non-goals
//!
//! * This module does not validate the corpus (handled by `validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{ColumnMoments, column_means_into, column_variances_into};
use crate::primitives::frames::Frames;

// ============================================================================
// Per-Sequence Variance Pass
// ============================================================================

/// Fill `out` (row-major `(n_files, D)`) with the temporal variance of each sequence.
pub fn sequence_variance_pass<T: Float>(corpus: &[Frames<'_, T>], out: &mut [T]) {
    let Some(dim) = corpus.first().map(Frames::dim) else {
        return;
    };

    let mut mean = vec![T::zero(); dim];
    for (frames, row) in corpus.iter().zip(out.chunks_exact_mut(dim)) {
        column_means_into(frames, &mut mean);
        column_variances_into(frames, &mean, row);
    }
}

// ============================================================================
// Corpus Reduction
// ============================================================================

/// Reduce an `(n_files, D)` variance matrix to GV mean and GV variance.
pub fn reduce_sequence_variances<T: Float>(variances: &Frames<'_, T>) -> ColumnMoments<T> {
    ColumnMoments::compute(variances)
}
