//! Generic moving-window filter.
//!
//! ## Purpose
//!
//! This module provides the reference window filter: a ring buffer swept
//! over the input, re-aggregated at every position by a pluggable strategy.
//! It defines the boundary conventions the incremental engines must
//! reproduce, and serves as their correctness oracle.
//!
//! ## Design notes
//!
//! * **Two modes**: Causal `process` aggregates past samples only
//!   (`out[i]` from `in[i-size+1 .. i]`); centric `process_centric` centers
//!   the window on the output position and half-shifts the emission index.
//! * **Boundary convention**: Centric processing primes the window with
//!   real samples and drains it with `(T::zero(), RANK_MIN)` filler. The
//!   window is never logically shorter than the filter length; boundary
//!   windows are partially filler, which rank-aware aggregators treat as
//!   absent. This asymmetry (real priming, filler draining) is the defining
//!   difference from clamping or mirroring schemes.
//! * **Oracle role**: Intentionally O(n·size) and simple. Do not fold this
//!   path into the incremental engines; their regression value depends on
//!   the two implementations staying independent.
//!
//! ## Invariants
//!
//! * The ring buffer is reset to bad filler at the end of every call, so
//!   consecutive calls on one filter are independent.
//!
//! ## Non-goals
//!
//! * No streaming across calls; each call processes one complete array.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::aggregate::Aggregate;
use crate::primitives::array::{RankedArray, RANK_MIN};
use crate::primitives::errors::FilterError;
use crate::primitives::ring::RingBuffer;

/// Moving-window filter over rank-annotated sequences, parametrized with
/// an aggregation strategy.
///
/// ```
/// use movrank::prelude::*;
///
/// let input = RankedArray::from_parts(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![RANK_MAX; 5]);
/// let mut output = RankedArray::new();
///
/// let mut filter = MovingWindow::new(3, Mean, false)?;
/// filter.process_centric(&input, &mut output);
/// # Result::<(), FilterError>::Ok(())
/// ```
#[derive(Debug)]
pub struct MovingWindow<T, A> {
    size: usize,
    half: usize,
    aggregator: A,
    pass_through_bad_rank: bool,
    ring: RingBuffer<T>,
}

impl<T, A> MovingWindow<T, A>
where
    T: Float,
    A: Aggregate<T>,
{
    /// Create a filter with window length `size`.
    ///
    /// `size == 0` is a configuration error. With `pass_through_bad_rank`,
    /// centric processing forces `(T::zero(), RANK_MIN)` at every output
    /// position whose input rank is bad, overriding the aggregate.
    pub fn new(size: usize, aggregator: A, pass_through_bad_rank: bool) -> Result<Self, FilterError> {
        if size == 0 {
            return Err(FilterError::InvalidFilterSize(size));
        }
        Ok(Self {
            size,
            half: size / 2,
            aggregator,
            pass_through_bad_rank,
            ring: RingBuffer::new(size),
        })
    }

    /// Window length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The aggregation strategy.
    #[inline]
    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// The aggregation strategy, mutably.
    #[inline]
    pub fn aggregator_mut(&mut self) -> &mut A {
        &mut self.aggregator
    }

    /// Causal filtering: `out[i]` aggregates the window ending at `in[i]`.
    ///
    /// E.g. for size 3, `out[i] = f(in[i], in[i-1], in[i-2])`, with slots
    /// before the sequence start seen as bad filler. Requires
    /// `size <= input.len()`; a longer window logs a warning and leaves
    /// the output untouched. Size 1 copies the input.
    pub fn process(&mut self, input: &RankedArray<T>, output: &mut RankedArray<T>) {
        let n = input.len();
        if self.size > n {
            log::warn!(
                "window length ({}) must not exceed line length ({}); output unchanged",
                self.size,
                n
            );
            return;
        }
        if self.size == 1 {
            output.assign_from(input);
            return;
        }
        output.resize(n);

        for i in 0..n {
            let (value, rank) = input.get(i);
            self.ring.set(i % self.size, value, rank);
            let (v, r) = self.aggregator.aggregate(self.ring.as_array());
            output.set(i, v, r);
        }

        self.ring.assign(T::zero(), RANK_MIN);
    }

    /// Centric filtering: `out[i]` aggregates the window centered on
    /// `in[i]`.
    ///
    /// E.g. for size 3, `out[i] = f(in[i+1], in[i], in[i-1])`. Degenerate
    /// configurations (size 1, or an input shorter than the window) copy
    /// the input unchanged.
    pub fn process_centric(&mut self, input: &RankedArray<T>, output: &mut RankedArray<T>) {
        let n = input.len();
        if self.size <= 1 || n < self.size {
            output.assign_from(input);
            return;
        }
        output.resize(n);

        // Priming: first `half` samples enter the window, nothing emitted.
        for pos in 0..self.half {
            let ring_pos = pos % self.size;
            debug_assert_eq!(ring_pos, pos, "ring buffer shorter than priming span");
            let (value, rank) = input.get(pos);
            self.ring.set(ring_pos, value, rank);
        }

        // Steady state: emit for the centered position `pos - half`.
        for pos in self.half..n {
            let (value, rank) = input.get(pos);
            self.ring.set(pos % self.size, value, rank);
            let out = pos - self.half;
            self.emit(input, output, out);
        }

        // Draining: feed bad filler for the final `half` positions.
        for pos in n..n + self.half {
            self.ring.set(pos % self.size, T::zero(), RANK_MIN);
            let out = pos - self.half;
            self.emit(input, output, out);
        }

        self.ring.reinitialize();
    }

    /// Aggregate the current window into `output[out]`, applying the
    /// pass-through override.
    fn emit(&mut self, input: &RankedArray<T>, output: &mut RankedArray<T>, out: usize) {
        let (v, r) = self.aggregator.aggregate(self.ring.as_array());
        if self.pass_through_bad_rank && input.ranks()[out] == RANK_MIN {
            output.set(out, T::zero(), RANK_MIN);
        } else {
            output.set(out, v, r);
        }
    }
}
