//! Layer 5: Engine
//!
//! This layer provides the parallel pass functions injected into the `gv`
//! execution engine:
//!
//! - **Variance pass**: Per-sequence temporal variances, one task per sequence
//! - **Filter pass**: GV postfilter, one task per frame

// Parallel pass functions.
#[cfg(feature = "cpu")]
pub mod executor;
