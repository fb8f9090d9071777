//! Frame views and owned feature matrices.
//!
//! ## Purpose
//!
//! This module provides the dense, row-major `(T, D)` layout shared by every
//! GV operation: a borrowed view ([`Frames`]) over an existing buffer and an
//! owned matrix ([`FeatureMatrix`]) for results.
//!
//! ## Design notes
//!
//! * **Row-major**: Frame `t` occupies `data[t * dim..(t + 1) * dim]`.
//! * **Zero-copy**: `Frames` only borrows; no data is moved on construction.
//! * **Shape-checked**: Construction rejects zero dimensions and ragged buffers.
//!
//! ## Invariants
//!
//! * `dim >= 1` and `data.len()` is a multiple of `dim`.
//! * A view may hold zero frames; operations decide whether that is an error.
//!
//! ## Non-goals
//!
//! * This module does not compute statistics over frames.
//! * This module does not provide strided or column-major layouts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::iter::{Copied, Skip, StepBy};
use core::ops::Index;
use core::slice::{ChunksExact, Iter};

// Internal dependencies
use crate::primitives::errors::GvError;

/// Iterator over the values of one dimension across all frames.
pub type Column<'a, T> = Copied<StepBy<Skip<Iter<'a, T>>>>;

// ============================================================================
// Borrowed View
// ============================================================================

/// Borrowed row-major view of a `(T, D)` feature sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frames<'a, T> {
    data: &'a [T],
    dim: usize,
}

impl<'a, T: Copy> Frames<'a, T> {
    /// Wrap a row-major buffer holding frames of `dim` values each.
    pub fn new(data: &'a [T], dim: usize) -> Result<Self, GvError> {
        if dim == 0 {
            return Err(GvError::ZeroDimension);
        }
        if data.len() % dim != 0 {
            return Err(GvError::RaggedFrames {
                len: data.len(),
                dim,
            });
        }
        Ok(Self { data, dim })
    }

    /// Number of frames (T).
    #[inline]
    pub fn n_frames(&self) -> usize {
        self.data.len() / self.dim
    }

    /// Feature dimension (D).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Shape as `(T, D)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_frames(), self.dim)
    }

    /// Check whether the view holds no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Frame `t` as a slice of `dim` values.
    #[inline]
    pub fn row(&self, t: usize) -> &'a [T] {
        &self.data[t * self.dim..(t + 1) * self.dim]
    }

    /// Iterate over frames in time order.
    #[inline]
    pub fn rows(&self) -> ChunksExact<'a, T> {
        self.data.chunks_exact(self.dim)
    }

    /// Iterate over the values of dimension `d` in time order.
    #[inline]
    pub fn column(&self, d: usize) -> Column<'a, T> {
        self.data.iter().skip(d).step_by(self.dim).copied()
    }
}

// ============================================================================
// Owned Matrix
// ============================================================================

/// Owned row-major `(T, D)` feature matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix<T> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Copy> FeatureMatrix<T> {
    /// Take ownership of a row-major buffer holding frames of `dim` values each.
    pub fn new(data: Vec<T>, dim: usize) -> Result<Self, GvError> {
        Frames::new(&data, dim)?;
        Ok(Self { data, dim })
    }

    /// Build a matrix from a list of frames, which must all have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GvError> {
        let first = rows.first().ok_or(GvError::EmptyInput)?;
        let dim = first.as_ref().len();
        if dim == 0 {
            return Err(GvError::ZeroDimension);
        }

        let mut data = Vec::with_capacity(rows.len() * dim);
        for row in rows {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(GvError::RaggedFrames {
                    len: row.len(),
                    dim,
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { data, dim })
    }

    /// Wrap an already shape-checked buffer.
    #[inline]
    pub(crate) fn from_parts(data: Vec<T>, dim: usize) -> Self {
        debug_assert!(dim > 0 && data.len() % dim == 0);
        Self { data, dim }
    }

    /// Borrow the matrix as a frame view.
    #[inline]
    pub fn as_frames(&self) -> Frames<'_, T> {
        Frames {
            data: &self.data,
            dim: self.dim,
        }
    }

    /// Number of frames (T).
    #[inline]
    pub fn n_frames(&self) -> usize {
        self.data.len() / self.dim
    }

    /// Feature dimension (D).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Shape as `(T, D)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_frames(), self.dim)
    }

    /// Underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Frame `t` as a slice of `dim` values.
    #[inline]
    pub fn row(&self, t: usize) -> &[T] {
        &self.data[t * self.dim..(t + 1) * self.dim]
    }

    /// Iterate over the values of dimension `d` in time order.
    #[inline]
    pub fn column(&self, d: usize) -> Column<'_, T> {
        self.data.iter().skip(d).step_by(self.dim).copied()
    }

    /// Consume the matrix and return its row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for FeatureMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (t, d): (usize, usize)) -> &T {
        assert!(d < self.dim, "dimension index {d} out of range for dim {}", self.dim);
        &self.data[t * self.dim + d]
    }
}

impl<'a, T: Copy> From<&'a FeatureMatrix<T>> for Frames<'a, T> {
    fn from(matrix: &'a FeatureMatrix<T>) -> Self {
        matrix.as_frames()
    }
}
