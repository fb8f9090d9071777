//! Error types for GV operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while estimating
//! global variance statistics or applying the GV postfilter, covering frame
//! layout, corpus consistency, statistics shape and builder configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (indices, dimensions).
//! * **Fail-fast**: Every error is raised before any output is produced.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Layout errors**: Empty buffers, zero dimension, ragged frames.
//! 2. **Corpus errors**: Empty corpus, empty sequence, inconsistent dimension.
//! 3. **Statistics errors**: Dimension mismatch, malformed `(2, D)` matrix.
//! 4. **Configuration errors**: Out-of-range `start_dim`, duplicated parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not substitute fallback values for degenerate input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for GV operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GvError {
    /// Frame buffer is empty; a sequence needs at least one frame.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// A feature matrix must have at least one dimension.
    ZeroDimension,

    /// Buffer length is not a whole number of frames.
    RaggedFrames {
        /// Number of values in the buffer (or in the offending row).
        len: usize,
        /// Declared feature dimension.
        dim: usize,
    },

    /// Estimation requires at least one sequence.
    EmptyCorpus,

    /// A corpus sequence has no frames.
    EmptySequence {
        /// Position of the sequence in the corpus.
        index: usize,
    },

    /// Corpus sequences do not share the same feature dimension.
    InconsistentDimension {
        /// Position of the offending sequence in the corpus.
        index: usize,
        /// Dimension of the first sequence.
        expected: usize,
        /// Dimension of the offending sequence.
        got: usize,
    },

    /// Statistics were estimated for a different feature dimension.
    DimensionMismatch {
        /// Dimension of the data being filtered.
        data_dim: usize,
        /// Dimension of the statistics.
        stats_dim: usize,
    },

    /// A statistics matrix must have exactly two rows (mean and variance of GV).
    InvalidStatsShape {
        /// Number of rows provided.
        rows: usize,
        /// Number of columns provided.
        cols: usize,
    },

    /// First filtered dimension lies outside the feature dimension.
    InvalidStartDim {
        /// The requested start dimension.
        start_dim: usize,
        /// Dimension of the data.
        dim: usize,
    },

    /// A filtered dimension is constant over time (rejected by policy).
    ZeroVariance {
        /// Index of the constant dimension.
        dim: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for GvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input frames are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::ZeroDimension => write!(f, "Feature dimension must be at least 1"),
            Self::RaggedFrames { len, dim } => {
                write!(f, "Ragged frames: {len} values do not form frames of dimension {dim}")
            }
            Self::EmptyCorpus => write!(f, "Corpus is empty; at least one sequence is required"),
            Self::EmptySequence { index } => write!(f, "Sequence {index} has no frames"),
            Self::InconsistentDimension {
                index,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Inconsistent dimension: sequence {index} has {got} dimensions, expected {expected}"
                )
            }
            Self::DimensionMismatch {
                data_dim,
                stats_dim,
            } => {
                write!(
                    f,
                    "Dimension mismatch: data has {data_dim} dimensions, GV statistics have {stats_dim}"
                )
            }
            Self::InvalidStatsShape { rows, cols } => {
                write!(f, "Invalid GV statistics shape: ({rows}, {cols}) (must be (2, dim))")
            }
            Self::InvalidStartDim { start_dim, dim } => {
                write!(f, "Invalid start_dim: {start_dim} (must be less than dimension {dim})")
            }
            Self::ZeroVariance { dim } => {
                write!(f, "Dimension {dim} has zero variance; GV scale factor is undefined")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for GvError {}
