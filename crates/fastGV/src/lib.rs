//! # fastGV — parallel, ndarray-native Global Variance
//!
//! `fastGV` extends the [`gv`] crate with `ndarray` inputs and outputs and
//! with `rayon`-parallel estimation and postfiltering. Semantics and
//! validation are exactly those of `gv`; only the execution changes.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastGV::prelude::*;
//! use ndarray::array;
//!
//! let corpus = vec![
//!     array![[1.0, 2.0], [1.0, 2.0], [1.0, 2.0]],
//!     array![[1.0, 4.0], [3.0, 2.0], [5.0, 0.0]],
//! ];
//!
//! let model = GlobalVariance::new()
//!     .start_dim(1)       // Leave the power coefficient untouched
//!     .parallel(true)     // Parallel by default
//!     .build()?;
//!
//! let stats = model.estimate(&corpus)?;
//! let gv = stats_to_array(&stats);
//! assert_eq!(gv.dim(), (2, 2));
//!
//! let predicted = array![[0.0, 10.0], [0.0, 20.0], [0.0, 30.0]];
//! let filtered = model.postfilter(&predicted, &stats)?;
//! assert_eq!(filtered.dim(), (3, 2));
//! # Result::<(), GvError>::Ok(())
//! ```
//!
//! ### Statistics as arrays
//!
//! Statistics can be handed around as `(2, D)` arrays and read back with
//! [`prelude::stats_from_array`]; arrays of any other shape are rejected.
//!
//! ### Logging
//!
//! Every call emits a `tracing` `debug!` event with the input sizes, and a
//! `warn!` event for each filtered dimension that became non-finite, either
//! from zero temporal variance or from a negative GV mean. Install any
//! `tracing` subscriber to see them.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel pass functions.
mod engine;

// High-level fluent API for GV.
mod api;

// Input data handling.
mod input;

// Output conversions.
mod output;

// Standard fastGV prelude.
pub mod prelude {
    pub use crate::api::{
        FeatureMatrix, GvBuilder as GlobalVariance, GvError, GvInput, GvStats,
        ParallelGvProcessor, VariancePolicy::Propagate, VariancePolicy::Reject,
        matrix_into_array, stats_from_array, stats_to_array,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod output {
        pub use crate::output::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
