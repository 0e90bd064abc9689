//! Fixed-capacity circular sample window.
//!
//! ## Purpose
//!
//! This module provides the literal window storage used by the reference
//! filter: a `RankedArray` of fixed capacity that callers write with
//! index-modulo-capacity addressing, plus the two reset operations the
//! window engines need between calls.
//!
//! ## Design notes
//!
//! * **Thin wrapper**: The buffer is a `RankedArray` whose length never
//!   changes after construction; wrap-around is the caller's `pos % capacity`.
//! * **Filler**: Fresh and reinitialized buffers hold `(T::zero(), RANK_MIN)`
//!   in every slot, so rank-aware aggregators see unwritten slots as absent.
//!
//! ## Invariants
//!
//! * Logical length equals `capacity` from construction onward.
//!
//! ## Non-goals
//!
//! * No occupancy tracking; overwritten slots are simply replaced.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::array::{Rank, RankedArray, RANK_MIN};

/// Fixed-capacity circular window of `(value, rank)` samples.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: RankedArray<T>,
    capacity: usize,
}

impl<T: Float> RingBuffer<T> {
    /// Create a buffer of `capacity` slots, all filled with
    /// `(T::zero(), RANK_MIN)`.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: RankedArray::with_len(capacity),
            capacity,
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Overwrite the slot at `index` (already reduced modulo capacity by
    /// the caller).
    #[inline]
    pub fn set(&mut self, index: usize, value: T, rank: Rank) {
        self.slots.set(index, value, rank);
    }

    /// View the window contents as a `RankedArray` for aggregation.
    #[inline]
    pub fn as_array(&self) -> &RankedArray<T> {
        &self.slots
    }

    /// Fill every slot with one sample.
    pub fn assign(&mut self, value: T, rank: Rank) {
        self.slots.assign(self.capacity, value, rank);
    }

    /// Fill every slot with `(T::zero(), RANK_MIN)`.
    pub fn reinitialize(&mut self) {
        self.assign(T::zero(), RANK_MIN);
    }
}
