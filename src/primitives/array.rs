//! Rank-annotated sequence storage.
//!
//! ## Purpose
//!
//! This module provides the shared data model for the crate: an ordered
//! sequence of numeric values, each paired with an integer quality rank.
//! Filters consume one `RankedArray` and produce one of equal length.
//!
//! ## Design notes
//!
//! * **Parallel storage**: Values and ranks live in two parallel vectors,
//!   matching the layout the surrounding pipeline exchanges. Accessors hand
//!   out plain slices so aggregators can iterate without indirection.
//! * **Filler convention**: Positions created by `resize`/`with_len` carry
//!   `(T::zero(), RANK_MIN)` — the same filler the window engines feed at
//!   sequence boundaries.
//!
//! ## Key concepts
//!
//! * **Rank**: Integer quality score in `[RANK_MIN, RANK_MAX]`. `RANK_MIN`
//!   marks a sample as invalid; rank-aware aggregators skip it, but it still
//!   occupies its sequence position.
//!
//! ## Invariants
//!
//! * `values.len() == ranks.len()` at all times.
//!
//! ## Non-goals
//!
//! * No rank-range validation on insertion (the producing filter is trusted,
//!   as in the surrounding pipeline).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Integer quality rank attached to every sample.
pub type Rank = i32;

/// Worst rank. Marks a sample as invalid ("bad").
pub const RANK_MIN: Rank = 0;

/// Best rank.
pub const RANK_MAX: Rank = 255;

/// Ordered sequence of `(value, rank)` samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedArray<T> {
    values: Vec<T>,
    ranks: Vec<Rank>,
}

impl<T: Float> RankedArray<T> {
    /// Create an empty array.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            ranks: Vec::new(),
        }
    }

    /// Create an array of `len` samples, all `(T::zero(), RANK_MIN)`.
    pub fn with_len(len: usize) -> Self {
        Self {
            values: vec![T::zero(); len],
            ranks: vec![RANK_MIN; len],
        }
    }

    /// Create an array from parallel value and rank vectors.
    ///
    /// The two vectors must have equal length.
    pub fn from_parts(values: Vec<T>, ranks: Vec<Rank>) -> Self {
        assert_eq!(
            values.len(),
            ranks.len(),
            "value and rank vectors must have equal length"
        );
        Self { values, ranks }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append one sample.
    #[inline]
    pub fn push(&mut self, value: T, rank: Rank) {
        self.values.push(value);
        self.ranks.push(rank);
    }

    /// Read the sample at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> (T, Rank) {
        (self.values[index], self.ranks[index])
    }

    /// Overwrite the sample at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T, rank: Rank) {
        self.values[index] = value;
        self.ranks[index] = rank;
    }

    /// Value slice.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Rank slice.
    #[inline]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Resize to `len` samples; new positions are `(T::zero(), RANK_MIN)`.
    pub fn resize(&mut self, len: usize) {
        self.values.resize(len, T::zero());
        self.ranks.resize(len, RANK_MIN);
    }

    /// Fill with `len` copies of one sample, discarding previous contents.
    pub fn assign(&mut self, len: usize, value: T, rank: Rank) {
        self.values.clear();
        self.values.resize(len, value);
        self.ranks.clear();
        self.ranks.resize(len, rank);
    }

    /// Become a copy of `other`, reusing existing allocations.
    pub fn assign_from(&mut self, other: &Self) {
        self.values.clear();
        self.values.extend_from_slice(&other.values);
        self.ranks.clear();
        self.ranks.extend_from_slice(&other.ranks);
    }
}
