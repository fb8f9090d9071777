//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates GV operations:
//! - Validation of corpus, frames, statistics and parameters
//! - Execution of the estimation and postfilter passes
//! - Output types (`GvStats`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine.
pub mod executor;

/// Output types.
pub mod output;

/// Input and parameter validation.
pub mod validator;
