//! Order-statistic selection for median computation.
//!
//! ## Purpose
//!
//! This module provides the lower-median order statistic used by both the
//! generic median aggregator and the incremental median engine.
//!
//! ## Design notes
//!
//! * **Algorithm**: Quickselect via `select_nth_unstable_by`, O(n) expected,
//!   avoiding a full sort.
//! * **Lower median**: For even populations the `(n/2)`-th order statistic
//!   is returned as-is. A median here must be one existing sample value —
//!   averaging the two middle values would synthesize a value that never
//!   occurred in the window.
//! * **In-place**: The slice is partially reordered by selection; callers
//!   that need positional stability must not rely on element order after
//!   the call.
//!
//! ## Invariants
//!
//! * The result is an element of the input slice.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (NaN/Inf).

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Select the lower median of a non-empty slice, partially reordering it.
#[inline]
pub fn lower_median<T: Float>(vals: &mut [T]) -> T {
    debug_assert!(!vals.is_empty());

    let mid = vals.len() / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    vals[mid]
}
