//! Catalog entries as they appear in a cart.
//!
//! An [`OrderItem`] combines an immutable catalog definition (identity,
//! display fields, base price, the available choices) with the mutable
//! per-cart overlay: the requested [`Quantity`] and which choices are
//! selected.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::choice::ItemChoice;
use super::error::DomainError;
use super::id::{ItemId, MenuId};
use super::money::{Price, Quantity};

/// Identity of a cart line: two items with equal keys are the same line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// Catalog item ID.
    pub id: ItemId,
    /// Catalog category (e.g. "wash", "dry").
    pub category: String,
    /// Owning menu ID.
    pub menu_id: MenuId,
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.menu_id, self.category, self.id)
    }
}

/// A catalog item together with its requested count and choice selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    key: LineKey,
    name: String,
    price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    photo: Option<String>,
    #[serde(default)]
    count: Quantity,
    #[serde(default)]
    choices: Vec<ItemChoice>,
}

impl OrderItem {
    /// Create an item with a count of one and no choices.
    pub fn new(
        id: ItemId,
        category: impl Into<String>,
        menu_id: MenuId,
        name: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            key: LineKey {
                id,
                category: category.into(),
                menu_id,
            },
            name: name.into(),
            price,
            photo: None,
            count: Quantity::ONE,
            choices: Vec::new(),
        }
    }

    /// Set the requested count.
    #[must_use]
    pub fn with_count(mut self, count: Quantity) -> Self {
        self.count = count;
        self
    }

    /// Attach the catalog's choices, in catalog order.
    #[must_use]
    pub fn with_choices(mut self, choices: Vec<ItemChoice>) -> Self {
        self.choices = choices;
        self
    }

    /// Attach a photo reference.
    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Get the line identity.
    #[must_use]
    pub fn key(&self) -> &LineKey {
        &self.key
    }

    /// Get the catalog item ID.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.key.id
    }

    /// Get the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.key.category
    }

    /// Get the owning menu ID.
    #[must_use]
    pub fn menu_id(&self) -> MenuId {
        self.key.menu_id
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the base price, before choice add-ons.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Get the photo reference.
    #[must_use]
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// Get the requested count.
    #[must_use]
    pub fn count(&self) -> Quantity {
        self.count
    }

    /// Set the requested count.
    pub fn set_count(&mut self, count: Quantity) {
        self.count = count;
    }

    /// Get all choices in catalog order.
    #[must_use]
    pub fn choices(&self) -> &[ItemChoice] {
        &self.choices
    }

    /// Returns true if `other` describes the same line.
    #[must_use]
    pub fn same_line(&self, other: &OrderItem) -> bool {
        self.key == other.key
    }

    /// Returns true if at least one choice is selected.
    #[must_use]
    pub fn has_selections(&self) -> bool {
        self.choices.iter().any(ItemChoice::is_selected)
    }

    /// Selected choices, preserving catalog order.
    #[must_use]
    pub fn selected_choices(&self) -> Vec<&ItemChoice> {
        self.choices.iter().filter(|c| c.is_selected()).collect()
    }

    /// Required choices that are not selected yet.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&ItemChoice> {
        self.choices.iter().filter(|c| !c.is_satisfied()).collect()
    }

    /// Returns true when every required choice is selected.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.choices.iter().all(ItemChoice::is_satisfied)
    }

    /// Select the choice named `name`. Returns false if there is none.
    pub fn select_choice(&mut self, name: &str) -> bool {
        self.set_choice(name, true)
    }

    /// Deselect the choice named `name`. Returns false if there is none.
    pub fn deselect_choice(&mut self, name: &str) -> bool {
        self.set_choice(name, false)
    }

    /// Base price plus the add-on price of every selected choice.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PriceOverflow`] if the sum leaves the decimal range.
    pub fn unit_price(&self) -> Result<Price, DomainError> {
        self.choices
            .iter()
            .filter(|c| c.is_selected())
            .try_fold(self.price, |acc, c| acc.checked_add(c.price()))
            .ok_or(DomainError::PriceOverflow("unit price"))
    }

    /// Unit price times count.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PriceOverflow`] if the product leaves the decimal range.
    pub fn line_total(&self) -> Result<Price, DomainError> {
        self.unit_price()?
            .checked_mul(self.count.as_decimal())
            .ok_or(DomainError::PriceOverflow("line total"))
    }

    /// Copy count and choice selections from `other`, keeping the catalog fields.
    pub(crate) fn apply_overlay(&mut self, other: &OrderItem, max: u32) {
        self.count = Quantity::clamped(other.count.value(), max);
        for choice in &mut self.choices {
            if let Some(theirs) = other.choices.iter().find(|c| c.name() == choice.name()) {
                choice.set_selected(theirs.is_selected());
            }
        }
    }

    fn set_choice(&mut self, name: &str, selected: bool) -> bool {
        match self.choices.iter_mut().find(|c| c.name() == name) {
            Some(choice) => {
                choice.set_selected(selected);
                true
            }
            None => false,
        }
    }
}
