//! # GV — Global Variance statistics for Rust
//!
//! Estimation of global variance (GV) statistics from a corpus of feature
//! sequences, and the GV postfilter that restores natural variability to
//! over-smoothed predicted sequences (e.g. mel-cepstra produced by a
//! statistical voice-conversion or speech-synthesis model).
//!
//! ## What is GV?
//!
//! Regression-based feature prediction tends to under-estimate the temporal
//! variance of every feature dimension, which is heard as muffled speech.
//! The GV of a sequence is its per-dimension temporal variance; over a corpus
//! of natural sequences its mean and variance form the GV statistics. The
//! postfilter rescales each predicted dimension around its own temporal mean
//! so its variance matches the corpus GV mean:
//!
//! ```text
//! filtered[t, d] = sqrt(gv_mean[d] / datavar[d]) * (data[t, d] - datamean[d]) + datamean[d]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use gv::prelude::*;
//!
//! // Two natural sequences of 2-dimensional features.
//! let seq1 = [1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
//! let seq2 = [1.0, 4.0, 3.0, 2.0, 5.0, 0.0];
//! let corpus = [Frames::new(&seq1, 2)?, Frames::new(&seq2, 2)?];
//!
//! let model = GlobalVariance::new()
//!     .start_dim(1)       // Leave the power coefficient untouched
//!     .build()?;
//!
//! let stats = model.estimate(&corpus)?;
//! println!("{}", stats);
//!
//! // Postfilter an over-smoothed prediction.
//! let predicted = [0.0, 10.0, 0.0, 20.0, 0.0, 30.0];
//! let filtered = model.postfilter(&Frames::new(&predicted, 2)?, &stats)?;
//! assert_eq!(filtered.shape(), (3, 2));
//! # Result::<(), GvError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Dimensions: 2
//!   Sequences:  2
//!
//! GV Statistics:
//!      Dim        GV_Mean         GV_Var
//! --------------------------------------
//!        0       1.333333       1.777778
//!        1       1.333333       1.777778
//! ```
//!
//! ### Result and Error Handling
//!
//! Both operations return `Result<_, GvError>` and fail fast: shape problems
//! (empty corpus, inconsistent dimensions, statistics of the wrong dimension,
//! `start_dim` out of range) are reported before any computation.
//!
//! A filtered dimension that is constant over time has an undefined scale
//! factor. By default the resulting non-finite values are propagated into the
//! output; `.variance_policy(Reject)` turns this into `GvError::ZeroVariance`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! gv = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data layout and error types.
mod primitives;

// Layer 2: Math - column-wise moments.
mod math;

// Layer 3: Algorithms - GV estimation and postfilter.
mod algorithms;

// Layer 4: Engine - validation, execution and outputs.
mod engine;

// High-level fluent API for GV.
mod api;

// Standard GV prelude.
pub mod prelude {
    pub use crate::api::{
        FeatureMatrix, Frames, GvBuilder as GlobalVariance, GvError, GvProcessor, GvStats,
        VariancePolicy::Propagate, VariancePolicy::Reject, estimate, postfilter,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
