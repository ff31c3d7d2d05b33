//! Selectable modifiers on catalog items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Price;

/// One selectable modifier for a catalog item (a size, an add-on, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChoice {
    name: String,
    #[serde(default)]
    price: Price,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    selected: bool,
}

impl ItemChoice {
    /// Create an optional, unselected choice with no add-on price.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: Decimal::ZERO,
            required: false,
            selected: false,
        }
    }

    /// Set the add-on price charged when the choice is selected.
    #[must_use]
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    /// Mark the choice as required before purchase.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the choice as selected.
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the add-on price.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns true if the choice must be selected before purchase.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns true if the customer selected this choice.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Returns true unless the choice is required and unselected.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !self.required || self.selected
    }
}
