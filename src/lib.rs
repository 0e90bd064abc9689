//! # movrank — moving-window statistics over rank-annotated sequences
//!
//! Sliding-window mean and median filters for numeric sequences in which
//! every sample carries an integer quality rank. Filters of this kind sit
//! in stream-processing graphs (profile smoothing, temporal low-pass
//! stages) where invalid samples must keep their positions but stay out of
//! the statistics.
//!
//! ## Data model
//!
//! A sequence is a [`prelude::RankedArray`]: parallel values and ranks,
//! where rank [`prelude::RANK_MIN`] (0) marks a sample as invalid and
//! [`prelude::RANK_MAX`] (255) is best quality. Bad-ranked samples occupy
//! their positions but are excluded from aggregation; output ranks are the
//! truncating integer mean of the good input ranks in the window.
//!
//! ## Quick start
//!
//! Median-smooth a spike out of a profile line:
//!
//! ```rust
//! use movrank::prelude::*;
//!
//! let input = RankedArray::from_parts(vec![5.0, 5.0, 9.0, 5.0, 5.0], vec![RANK_MAX; 5]);
//! let mut output = RankedArray::new();
//!
//! // Scratch length = window length.
//! let mut scratch = vec![0.0; 3];
//! moving_median(&input, &mut output, &mut scratch, false);
//!
//! assert_eq!(output.values(), &[5.0, 5.0, 5.0, 5.0, 5.0]);
//! ```
//!
//! Mean-smooth with the incremental engine:
//!
//! ```rust
//! use movrank::prelude::*;
//!
//! let input = RankedArray::from_parts(vec![1.0, 2.0, 3.0, 4.0], vec![RANK_MAX; 4]);
//! let mut output = RankedArray::new();
//!
//! moving_mean(&input, &mut output, 2, false);
//!
//! assert_eq!(output.values(), &[1.5, 2.5, 3.5, 4.0]);
//! ```
//!
//! Or run the generic filter with any aggregation strategy:
//!
//! ```rust
//! use movrank::prelude::*;
//!
//! let input = RankedArray::from_parts(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![RANK_MAX; 5]);
//! let mut output = RankedArray::new();
//!
//! let mut filter = MovingWindow::new(3, Mean, false)?;
//! filter.process_centric(&input, &mut output);
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ## Window modes
//!
//! * **Causal** (`MovingWindow::process`): `out[i]` aggregates the window
//!   *ending* at `in[i]` — the classic FIR low-pass shape.
//! * **Centric** (`MovingWindow::process_centric` and both incremental
//!   engines): `out[i]` aggregates the window *centered* on `in[i]`. Near
//!   the sequence boundaries the window is padded with bad-ranked filler
//!   (real samples prime the window at the start; filler drains it at the
//!   end), so it always holds exactly the configured number of slots.
//!
//! With `pass_through_bad_rank`, an invalid input sample forces an invalid
//! output at its position, overriding whatever the window aggregates to.
//!
//! ## Two implementations, one contract
//!
//! The generic [`prelude::MovingWindow`] re-aggregates the full window at
//! every position: O(n·size), simple, and easy to trust. The incremental
//! engines [`prelude::moving_mean`] (running sums, O(n)) and
//! [`prelude::moving_median`] (unordered working set with O(1)
//! swap-removal) compute the same centric results without re-scanning. The
//! two paths are intentionally kept independent: the generic filter is the
//! oracle the incremental engines are tested against — mean within 5e-14
//! absolute on values and exactly on ranks, median exactly on both.
//!
//! ## `no_std`
//!
//! Disable default features for `no_std` + `alloc` environments:
//!
//! ```toml
//! [dependencies]
//! movrank = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Tukey, J. W. (1977). *Exploratory Data Analysis* (running-median
//!   smoothing)
//! - Huang, T., Yang, G., Tang, G. (1979). "A Fast Two-Dimensional Median
//!   Filtering Algorithm"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the rank-annotated sequence type (`RankedArray`), the circular
// window buffer (`RingBuffer`), and typed configuration errors.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains order-statistic selection for median computation.
mod math;

// Layer 3: Algorithms - aggregation strategies and incremental engines.
//
// Contains the pluggable aggregation strategies (`Mean`, `Median`) and the
// two incremental engines (`moving_mean`, `moving_median`).
mod algorithms;

// Layer 4: Engine - the generic moving-window filter.
//
// Contains `MovingWindow` with causal and centric processing; the
// correctness oracle for the incremental engines.
mod engine;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the public surface:
///
/// ```
/// use movrank::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::aggregate::{Aggregate, AggregateFn, Mean, Median};
    pub use crate::algorithms::mean::moving_mean;
    pub use crate::algorithms::median::moving_median;
    pub use crate::engine::window::MovingWindow;
    pub use crate::primitives::array::{Rank, RankedArray, RANK_MAX, RANK_MIN};
    pub use crate::primitives::errors::FilterError;
    pub use crate::primitives::ring::RingBuffer;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
}
