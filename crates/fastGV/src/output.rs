//! `ndarray` conversions for GV outputs.
//!
//! GV statistics travel as `(2, D)` arrays (row 0 = GV mean, row 1 = GV
//! variance) and filtered sequences as `(T, D)` arrays.

// External dependencies
use ndarray::{Array2, ArrayBase, Data, Ix2};
use num_traits::Float;

// Export dependencies from gv crate
use gv::internals::engine::output::GvStats;
use gv::internals::primitives::errors::GvError;
use gv::internals::primitives::frames::FeatureMatrix;

// Internal dependencies
use crate::input::GvInput;

/// Copy GV statistics into a `(2, D)` array.
pub fn stats_to_array<T: Float>(stats: &GvStats<T>) -> Array2<T> {
    let mut out = Array2::from_elem((2, stats.dim()), T::zero());
    for (d, (&m, &v)) in stats.mean().iter().zip(stats.variance()).enumerate() {
        out[[0, d]] = m;
        out[[1, d]] = v;
    }
    out
}

/// Read GV statistics from a `(2, D)` array.
pub fn stats_from_array<T, S>(array: &ArrayBase<S, Ix2>) -> Result<GvStats<T>, GvError>
where
    T: Float,
    S: Data<Elem = T>,
{
    match array.as_gv_frames() {
        Ok(frames) => GvStats::try_from_matrix(&frames),
        // Non-standard layouts are copied row by row.
        Err(GvError::InvalidInput(_)) => {
            let (rows, cols) = array.dim();
            if rows != 2 || cols == 0 {
                return Err(GvError::InvalidStatsShape { rows, cols });
            }
            GvStats::from_rows(array.row(0).to_vec(), array.row(1).to_vec())
        }
        Err(_) => {
            let (rows, cols) = array.dim();
            Err(GvError::InvalidStatsShape { rows, cols })
        }
    }
}

/// Move a feature matrix into a `(T, D)` array.
pub fn matrix_into_array<T: Float>(matrix: FeatureMatrix<T>) -> Result<Array2<T>, GvError> {
    let shape = matrix.shape();
    Array2::from_shape_vec(shape, matrix.into_vec())
        .map_err(|e| GvError::InvalidInput(e.to_string()))
}
