//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the statistics themselves:
//! - The pluggable aggregation strategies (`Aggregate`, `Mean`, `Median`)
//! - The incremental moving-mean engine
//! - The incremental moving-median engine
//!
//! The incremental engines are deliberately independent of the generic
//! window filter in the engine layer; the two paths validate each other.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Window aggregation strategies.
pub mod aggregate;

/// Incremental moving-mean engine.
pub mod mean;

/// Incremental moving-median engine.
pub mod median;
