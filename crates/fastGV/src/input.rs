//! Input abstractions for GV operations.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for GV inputs, allowing
//! `estimate` and `postfilter` to accept frame views, owned feature matrices
//! and `ndarray` 2-D arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct row-major views of the underlying buffers.
//! * **Interoperability**: Bridges the core frame types with `ndarray`.
//! * **Fail-fast validation**: Ensures standard (C-order, contiguous) layout before processing.
//!
//! ## Invariants
//!
//! * Returned views cover all elements of the input container.
//! * Non-contiguous or column-major arrays return an error instead of being copied.
//!
//! ## Non-goals
//!
//! * This module does not reorder, copy or reshape data.

// External dependencies
use ndarray::{ArrayBase, Data, Ix2};
use num_traits::Float;

// Export dependencies from gv crate
use gv::internals::primitives::errors::GvError;
use gv::internals::primitives::frames::{FeatureMatrix, Frames};

/// Trait for types that can be used as a `(T, D)` feature sequence.
pub trait GvInput<T: Float> {
    /// Borrow the input as a row-major frame view.
    fn as_gv_frames(&self) -> Result<Frames<'_, T>, GvError>;
}

impl<T: Float> GvInput<T> for Frames<'_, T> {
    fn as_gv_frames(&self) -> Result<Frames<'_, T>, GvError> {
        Ok(*self)
    }
}

impl<T: Float> GvInput<T> for FeatureMatrix<T> {
    fn as_gv_frames(&self) -> Result<Frames<'_, T>, GvError> {
        Ok(self.as_frames())
    }
}

impl<T: Float, S> GvInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_gv_frames(&self) -> Result<Frames<'_, T>, GvError> {
        let slice = self.as_slice().ok_or_else(|| {
            GvError::InvalidInput("ndarray input must be contiguous in standard layout".to_string())
        })?;
        Frames::new(slice, self.ncols())
    }
}
