//! Monetary and quantity types for prices and line counts.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Number of units of a line, bounded to `0..=Quantity::MAX`.
///
/// The inner u32 is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Largest quantity a single line may carry.
    pub const MAX: u32 = 100;

    /// Zero units.
    pub const ZERO: Self = Self(0);

    /// One unit.
    pub const ONE: Self = Self(1);

    /// Create a quantity, rejecting values above [`Quantity::MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::QuantityOutOfRange`] when `value` exceeds the bound.
    pub const fn try_new(value: u32) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::QuantityOutOfRange {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Create a quantity, clamping to `0..=max` (and never above [`Quantity::MAX`]).
    #[must_use]
    pub fn clamped(value: u32, max: u32) -> Self {
        Self(value.min(max).min(Self::MAX))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns true for zero units.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add `other`, clamping the result to `max`.
    #[must_use]
    pub fn saturating_add(self, other: Self, max: u32) -> Self {
        Self::clamped(self.0.saturating_add(other.0), max)
    }

    /// The quantity as a Decimal multiplier.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
