//! Window aggregation strategies.
//!
//! ## Purpose
//!
//! This module defines the pluggable aggregation contract consumed by the
//! reference window filter, plus the two first-class strategies: rank-aware
//! mean and rank-aware median.
//!
//! ## Design notes
//!
//! * **Static dispatch**: The strategy is a generic parameter on the filter,
//!   resolved at compile time. No trait objects in the hot loop.
//! * **Rank awareness**: Bad-ranked entries are excluded from the value
//!   statistic. The output rank is the truncating integer mean of the good
//!   ranks; since bad entries carry rank `RANK_MIN == 0`, summing over all
//!   entries and dividing by the good count yields exactly that mean.
//! * **Scratch ownership**: `Median` owns its compaction scratch so repeated
//!   aggregation over a window allocates only on growth.
//!
//! ## Key concepts
//!
//! * **Empty window**: A window with no good entry aggregates to
//!   `(T::zero(), RANK_MIN)` for every strategy.
//!
//! ## Non-goals
//!
//! * No weighted or higher-moment aggregates; anything beyond mean and
//!   median enters through `AggregateFn` or a custom `Aggregate` impl.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::selection::lower_median;
use crate::primitives::array::{Rank, RankedArray, RANK_MIN};

/// Aggregation strategy applied to one window of samples.
///
/// Implementations may keep internal scratch; the window is read-only.
pub trait Aggregate<T> {
    /// Reduce the window to one `(value, rank)` sample.
    fn aggregate(&mut self, window: &RankedArray<T>) -> (T, Rank);
}

// ============================================================================
// Mean
// ============================================================================

/// Rank-aware arithmetic mean over a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<T: Float> Aggregate<T> for Mean {
    fn aggregate(&mut self, window: &RankedArray<T>) -> (T, Rank) {
        let mut sum = T::zero();
        let mut rank_sum: Rank = 0;
        let mut count_good: Rank = 0;

        for (&value, &rank) in window.values().iter().zip(window.ranks()) {
            if rank == RANK_MIN {
                continue;
            }
            sum = sum + value;
            rank_sum += rank;
            count_good += 1;
        }

        if count_good == 0 {
            return (T::zero(), RANK_MIN);
        }

        (
            sum / T::from(count_good).unwrap(),
            rank_sum / count_good,
        )
    }
}

// ============================================================================
// Median
// ============================================================================

/// Rank-aware lower median over a window.
#[derive(Debug, Clone, Default)]
pub struct Median<T> {
    scratch: Vec<T>,
}

impl<T: Float> Median<T> {
    /// Create a median strategy with empty scratch.
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl<T: Float> Aggregate<T> for Median<T> {
    fn aggregate(&mut self, window: &RankedArray<T>) -> (T, Rank) {
        self.scratch.clear();
        let mut rank_sum: Rank = 0;

        for (&value, &rank) in window.values().iter().zip(window.ranks()) {
            rank_sum += rank;
            if rank != RANK_MIN {
                self.scratch.push(value);
            }
        }

        if self.scratch.is_empty() {
            return (T::zero(), RANK_MIN);
        }

        let count_good = self.scratch.len() as Rank;
        (lower_median(&mut self.scratch), rank_sum / count_good)
    }
}

// ============================================================================
// Closure adapter
// ============================================================================

/// Adapter turning any `FnMut(&RankedArray<T>) -> (T, Rank)` into an
/// [`Aggregate`] strategy.
#[derive(Debug, Clone)]
pub struct AggregateFn<F>(
    /// The aggregation closure.
    pub F,
);

impl<T, F> Aggregate<T> for AggregateFn<F>
where
    F: FnMut(&RankedArray<T>) -> (T, Rank),
{
    #[inline]
    fn aggregate(&mut self, window: &RankedArray<T>) -> (T, Rank) {
        (self.0)(window)
    }
}
