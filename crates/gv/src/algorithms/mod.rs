//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the two GV operations on validated frames:
//! - Estimation of GV statistics from a corpus
//! - Variance-scaling postfilter of a single sequence
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// GV statistics estimation.
pub mod estimation;

/// GV postfilter.
pub mod postfilter;
