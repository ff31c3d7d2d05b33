//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated,
//! either by a caller (a stale list handle, an out-of-range index) or by the
//! data itself (a corrupted link structure).
//!
//! # Examples
//!
//! Handling a stale handle:
//!
//! ```
//! use basin::domain::error::DomainError;
//! use basin::domain::OrderedList;
//!
//! let mut list = OrderedList::new();
//! let handle = list.append("rinse");
//! list.remove(handle).unwrap();
//!
//! assert!(matches!(list.remove(handle), Err(DomainError::InvalidHandle { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The handle does not address a live node of this list.
    #[error("handle {index}:{generation} does not refer to a live node")]
    InvalidHandle {
        /// Slot index carried by the handle.
        index: usize,
        /// Generation carried by the handle.
        generation: u32,
    },

    /// A positional index fell outside the list.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The list length at the time of the request.
        len: usize,
    },

    /// A structural invariant of a container no longer holds.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A quantity fell outside the allowed range.
    #[error("quantity {value} outside 0..={max}")]
    QuantityOutOfRange {
        /// The rejected quantity.
        value: u32,
        /// The inclusive upper bound.
        max: u32,
    },

    /// A price computation exceeded the representable range.
    #[error("price overflow while computing {0}")]
    PriceOverflow(&'static str),
}
