//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer contains the generic moving-window filter: the ring-buffer
//! sweep that applies a pluggable aggregation strategy in causal or centric
//! mode. It is the reference implementation the incremental engines are
//! validated against.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Generic moving-window filter.
pub mod window;
