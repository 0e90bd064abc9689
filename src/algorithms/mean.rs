//! Incremental moving-mean engine.
//!
//! ## Purpose
//!
//! This module provides the optimized centric moving mean: instead of
//! re-aggregating the whole window at every position, it maintains running
//! sums updated by one add and one remove per step.
//!
//! ## Design notes
//!
//! * **Independent fast path**: This engine shares no code with the generic
//!   window filter. The generic path is the correctness oracle; the
//!   equivalence suite keeps the two honest against each other.
//! * **Rank bookkeeping**: `rank_sum` accumulates the ranks of *all*
//!   represented entries. Bad entries contribute exactly `RANK_MIN == 0`,
//!   so the sum equals the good-only rank sum and dividing by the good
//!   count yields the mean good rank. Draining never subtracts for filler
//!   for the same reason.
//! * **Tolerance**: Running add/remove sums round differently from a fresh
//!   per-window summation; agreement with the generic path is within
//!   `5e-14` absolute on values and exact on ranks.
//!
//! ## Invariants
//!
//! * `count_good` equals the number of good-ranked entries currently
//!   represented in the window.
//!
//! ## Non-goals
//!
//! * No compensated (Kahan) summation; the tolerance contract above is the
//!   accepted accuracy envelope.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::array::{Rank, RankedArray, RANK_MIN};

/// Running window sums for the incremental mean.
#[derive(Debug, Clone)]
struct WindowSums<T> {
    sum_values: T,
    count_good: Rank,
    rank_sum: Rank,
}

impl<T: Float> WindowSums<T> {
    fn new() -> Self {
        Self {
            sum_values: T::zero(),
            count_good: 0,
            rank_sum: 0,
        }
    }

    #[inline]
    fn add(&mut self, value: T, rank: Rank) {
        self.rank_sum += rank;
        if rank != RANK_MIN {
            self.sum_values = self.sum_values + value;
            self.count_good += 1;
        }
    }

    #[inline]
    fn remove(&mut self, value: T, rank: Rank) {
        self.rank_sum -= rank;
        if rank != RANK_MIN {
            self.sum_values = self.sum_values - value;
            self.count_good -= 1;
        }
    }

    #[inline]
    fn emit(&self, input_rank_at_out: Rank, pass_through_bad_rank: bool) -> (T, Rank) {
        if pass_through_bad_rank && input_rank_at_out == RANK_MIN {
            return (T::zero(), RANK_MIN);
        }
        if self.count_good > 0 {
            (
                self.sum_values / T::from(self.count_good).unwrap(),
                self.rank_sum / self.count_good,
            )
        } else {
            (T::zero(), RANK_MIN)
        }
    }
}

/// Centric moving mean over a rank-annotated sequence.
///
/// Equivalent to the generic window filter parametrized with the mean
/// strategy, computed in O(n) by maintaining running sums. Degenerate
/// configurations (`filter_size <= 1` or an input shorter than the window)
/// copy the input unchanged. With `pass_through_bad_rank`, a bad input rank
/// at an output position forces `(T::zero(), RANK_MIN)` there regardless of
/// the window contents.
pub fn moving_mean<T: Float>(
    input: &RankedArray<T>,
    output: &mut RankedArray<T>,
    filter_size: usize,
    pass_through_bad_rank: bool,
) {
    let n = input.len();
    if filter_size <= 1 || n < filter_size {
        output.assign_from(input);
        return;
    }
    output.resize(n);

    let half = filter_size / 2;
    let mut sums = WindowSums::new();

    // Priming: fill the window; start emitting once the centered output
    // index becomes valid.
    for read in 0..filter_size {
        let (value, rank) = input.get(read);
        sums.add(value, rank);
        if read >= half {
            let out = read - half;
            let (v, r) = sums.emit(input.ranks()[out], pass_through_bad_rank);
            output.set(out, v, r);
        }
    }

    // Steady state: slide by one sample per step.
    for read in filter_size..n {
        let (old_value, old_rank) = input.get(read - filter_size);
        sums.remove(old_value, old_rank);
        let (value, rank) = input.get(read);
        sums.add(value, rank);

        let out = read - half;
        let (v, r) = sums.emit(input.ranks()[out], pass_through_bad_rank);
        output.set(out, v, r);
    }

    // Draining: removing the outgoing sample is equivalent to feeding bad
    // filler, which would change none of the sums.
    for step in 0..half {
        let (old_value, old_rank) = input.get(n - filter_size + step);
        sums.remove(old_value, old_rank);

        let out = n - half + step;
        let (v, r) = sums.emit(input.ranks()[out], pass_through_bad_rank);
        output.set(out, v, r);
    }
}
