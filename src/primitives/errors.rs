//! Error types for window filter configuration.
//!
//! ## Purpose
//!
//! This module defines the typed error returned when a filter is constructed
//! with an invalid configuration.
//!
//! ## Design notes
//!
//! * **Configuration only**: Oversized windows relative to the input are
//!   defined degenerate behavior handled by the filters themselves, not
//!   errors. Internal-consistency violations panic instead of surfacing
//!   here — recovering from them would mask corrupted output.
//! * **no_std**: `Display` is hand-rolled and `std::error::Error` is gated
//!   on the `std` feature.

// External dependencies
use core::fmt;

/// Error raised for invalid filter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The window length must be greater than zero.
    InvalidFilterSize(usize),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidFilterSize(got) => {
                write!(f, "Invalid filter size: {} (must be greater than zero)", got)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}
