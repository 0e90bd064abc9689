//! Incremental moving-median engine.
//!
//! ## Purpose
//!
//! This module provides the optimized centric moving median: the good values
//! of the current window live in an unordered working set with O(1)
//! swap-remove, and each step performs one slot update instead of
//! re-collecting the whole window.
//!
//! ## Design notes
//!
//! * **Independent fast path**: Shares no code with the generic window
//!   filter; the equivalence suite asserts exact agreement on both value
//!   and rank (the median selects an existing sample, so no tolerance).
//! * **Unordered set**: Selection partially reorders the set, so the slot
//!   of a given value is not stable; removal searches linearly and
//!   swap-shrinks. Keeping the set unordered is what makes removal O(1)
//!   after the search.
//! * **Rank bookkeeping**: `rank_sum` accumulates ranks of *all* represented
//!   entries; bad entries contribute `RANK_MIN == 0`, so dividing by the
//!   good count yields the mean good rank.
//! * **Caller-sized scratch**: The window length is the scratch length —
//!   the scratch *is* the configuration, sized once by the caller and
//!   overwritten by every call.
//!
//! ## Invariants
//!
//! * Every good-ranked value fed into the window is present in the working
//!   set until removed. A failed search for a good value is an algorithm
//!   defect and panics; continuing would silently corrupt `rank_sum` and
//!   the set size for the rest of the call.
//!
//! ## Non-goals
//!
//! * No NaN handling: a NaN value carrying a good rank cannot be found
//!   again by the equality search and trips the consistency panic.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::selection::lower_median;
use crate::primitives::array::{Rank, RankedArray, RANK_MIN};

/// Unordered multiset of the good values currently in the window.
///
/// Borrows caller-supplied scratch; `slots[..size]` are live.
#[derive(Debug)]
pub struct WorkingSet<'a, T> {
    slots: &'a mut [T],
    size: usize,
    rank_sum: Rank,
}

impl<'a, T: Float> WorkingSet<'a, T> {
    /// Wrap caller scratch; the scratch length is the window length.
    pub fn new(slots: &'a mut [T]) -> Self {
        Self {
            slots,
            size: 0,
            rank_sum: 0,
        }
    }

    /// Number of good values currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the set holds no good value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Account for an incoming sample; good values enter the set.
    pub fn append(&mut self, value: T, rank: Rank) {
        self.rank_sum += rank;
        if rank != RANK_MIN {
            debug_assert!(self.size < self.slots.len());
            self.slots[self.size] = value;
            self.size += 1;
        }
    }

    /// Locate a previously appended value. Returns `None` only for bad
    /// rank; a miss for a good rank is an internal-consistency fault.
    pub fn search(&self, value: T, rank: Rank) -> Option<usize> {
        if rank == RANK_MIN {
            return None;
        }
        match self.slots[..self.size].iter().position(|&v| v == value) {
            Some(index) => Some(index),
            None => panic!("good-ranked value missing from median working set"),
        }
    }

    /// Remove the value at `index` by swapping in the last live slot.
    fn remove_at(&mut self, index: usize) {
        debug_assert!(index < self.size);
        let last = self.size - 1;
        self.slots[index] = self.slots[last];
        self.size = last;
    }

    /// Account for an outgoing sample; good values leave the set.
    pub fn remove_value(&mut self, value: T, rank: Rank) {
        if let Some(index) = self.search(value, rank) {
            self.rank_sum -= rank;
            self.remove_at(index);
        }
    }

    /// Replace the outgoing sample with the incoming one in a single step,
    /// reusing the vacated slot when both are good. When the outgoing rank
    /// was bad (no slot to vacate), the incoming sample is appended.
    pub fn update_value(&mut self, old_value: T, old_rank: Rank, new_value: T, new_rank: Rank) {
        match self.search(old_value, old_rank) {
            Some(index) => {
                self.rank_sum -= old_rank;
                if new_rank != RANK_MIN {
                    self.rank_sum += new_rank;
                    self.slots[index] = new_value;
                } else {
                    self.remove_at(index);
                }
            }
            None => self.append(new_value, new_rank),
        }
    }

    /// Produce the output sample for the current window.
    pub fn emit(&mut self, input_rank_at_out: Rank, pass_through_bad_rank: bool) -> (T, Rank) {
        if pass_through_bad_rank && input_rank_at_out == RANK_MIN {
            return (T::zero(), RANK_MIN);
        }
        if self.size > 0 {
            let median = lower_median(&mut self.slots[..self.size]);
            (median, self.rank_sum / self.size as Rank)
        } else {
            (T::zero(), RANK_MIN)
        }
    }
}

/// Centric moving median over a rank-annotated sequence.
///
/// Equivalent to the generic window filter parametrized with the median
/// strategy. `working_set` is caller-supplied scratch whose length is the
/// window length; its contents are overwritten. Degenerate configurations
/// (`working_set.len() <= 1` or an input shorter than the window) copy the
/// input unchanged. With `pass_through_bad_rank`, a bad input rank at an
/// output position forces `(T::zero(), RANK_MIN)` there regardless of the
/// window contents.
///
/// # Panics
///
/// Panics if the working set loses track of a good value (an algorithm
/// defect, not a data condition).
pub fn moving_median<T: Float>(
    input: &RankedArray<T>,
    output: &mut RankedArray<T>,
    working_set: &mut [T],
    pass_through_bad_rank: bool,
) {
    let filter_size = working_set.len();
    let n = input.len();
    if filter_size <= 1 || n < filter_size {
        output.assign_from(input);
        return;
    }
    output.resize(n);

    let half = filter_size / 2;
    let mut set = WorkingSet::new(working_set);

    // Priming: fill the window; start emitting once the centered output
    // index becomes valid.
    for read in 0..filter_size {
        let (value, rank) = input.get(read);
        set.append(value, rank);
        if read >= half {
            let out = read - half;
            let (v, r) = set.emit(input.ranks()[out], pass_through_bad_rank);
            output.set(out, v, r);
        }
    }

    // Steady state: one slot update per step.
    for read in filter_size..n {
        let (old_value, old_rank) = input.get(read - filter_size);
        let (new_value, new_rank) = input.get(read);
        set.update_value(old_value, old_rank, new_value, new_rank);

        let out = read - half;
        let (v, r) = set.emit(input.ranks()[out], pass_through_bad_rank);
        output.set(out, v, r);
    }

    // Draining: remove-only, equivalent to feeding bad filler.
    for step in 0..half {
        let (old_value, old_rank) = input.get(n - filter_size + step);
        set.remove_value(old_value, old_rank);

        let out = n - half + step;
        let (v, r) = set.emit(input.ranks()[out], pass_through_bad_rank);
        output.set(out, v, r);
    }
}
