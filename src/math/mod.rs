//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks with no
//! filter-specific logic:
//! - Order-statistic selection for median computation
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Order-statistic selection.
pub mod selection;
