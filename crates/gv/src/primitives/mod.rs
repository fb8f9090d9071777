//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data layout and error types used throughout the
//! crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Row-major frame views and owned matrices.
pub mod frames;

/// Shared error types.
pub mod errors;
