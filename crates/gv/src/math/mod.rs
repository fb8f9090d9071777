//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the axis-aware reductions GV is built from:
//! per-dimension mean and population variance over frames.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Column-wise moments (mean, population variance).
pub mod moments;
