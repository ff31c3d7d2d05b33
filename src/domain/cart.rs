//! Shopping cart for a single business location.
//!
//! A [`Cart`] holds one line per [`LineKey`]. Adding an item whose key is
//! already present merges into the existing line, a line whose count drops
//! to zero is removed, and the subtotal is derived from the lines on every
//! read. Operations on a line that is not in the cart are no-ops: the cart
//! is a client-side convenience, not a source of truth.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::DomainError;
use super::id::StoreId;
use super::money::{Price, Quantity};
use super::observer::{CartEvent, CartObserver, ObserverId, ObserverRegistry};
use super::order_item::{LineKey, OrderItem};

/// A customer's cart at one location.
#[derive(Debug)]
pub struct Cart {
    store_id: StoreId,
    store_name: String,
    max_quantity: u32,
    lines: Vec<OrderItem>,
    observers: ObserverRegistry,
}

/// Plain data form of a [`Cart`], used for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRecord {
    /// Location the cart belongs to.
    pub store_id: StoreId,
    /// Display name of the location.
    pub store_name: String,
    /// Per-line quantity cap.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
    /// Cart lines.
    #[serde(default)]
    pub lines: Vec<OrderItem>,
}

fn default_max_quantity() -> u32 {
    Quantity::MAX
}

impl Cart {
    /// Create an empty cart for a location.
    pub fn new(store_id: StoreId, store_name: impl Into<String>) -> Self {
        Self {
            store_id,
            store_name: store_name.into(),
            max_quantity: Quantity::MAX,
            lines: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Set the per-line quantity cap. Values are kept within `1..=Quantity::MAX`.
    ///
    /// Existing lines above the new cap are clamped to it.
    #[must_use]
    pub fn with_max_quantity(mut self, max: u32) -> Self {
        self.max_quantity = max.clamp(1, Quantity::MAX);
        for line in &mut self.lines {
            if line.count().value() > self.max_quantity {
                warn!(line = %line.key(), cap = self.max_quantity, "Line count clamped to cap");
                line.set_count(Quantity::clamped(line.count().value(), self.max_quantity));
            }
        }
        self
    }

    /// Rebuild a cart from its persisted form.
    ///
    /// Lines go through [`Cart::add_item`], so duplicates merge, zero-count
    /// lines are dropped and counts are clamped.
    #[must_use]
    pub fn from_record(record: CartRecord) -> Self {
        let mut cart = Self::new(record.store_id, record.store_name)
            .with_max_quantity(record.max_quantity);
        for line in record.lines {
            cart.add_item(line);
        }
        cart
    }

    /// Snapshot the cart's data.
    #[must_use]
    pub fn to_record(&self) -> CartRecord {
        CartRecord {
            store_id: self.store_id.clone(),
            store_name: self.store_name.clone(),
            max_quantity: self.max_quantity,
            lines: self.lines.clone(),
        }
    }

    /// Get the location ID.
    #[must_use]
    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Get the location display name.
    #[must_use]
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Get the per-line quantity cap.
    #[must_use]
    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// Subscribe an observer to cart changes.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) -> ObserverId {
        self.observers.register(observer)
    }

    /// Remove a subscription. Returns false if the ID was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    /// Add `item.count()` units of `item`.
    ///
    /// Merges into the matching line if there is one, otherwise inserts the
    /// item as a new line. The resulting count is clamped to the cart's cap.
    /// Adding zero units does nothing.
    pub fn add_item(&mut self, item: OrderItem) {
        if item.count().is_zero() {
            debug!(line = %item.key(), "Ignoring add of zero units");
            return;
        }

        let max = self.max_quantity;
        let added = match self.lines.iter_mut().find(|line| line.same_line(&item)) {
            Some(line) => {
                let requested = line.count().value().saturating_add(item.count().value());
                let merged = line.count().saturating_add(item.count(), max);
                if merged.value() < requested {
                    warn!(line = %item.key(), requested, max, "Line count clamped");
                }
                line.set_count(merged);
                line.clone()
            }
            None => {
                let mut item = item;
                if item.count().value() > max {
                    warn!(line = %item.key(), requested = item.count().value(), max, "Line count clamped");
                    item.set_count(Quantity::clamped(item.count().value(), max));
                }
                self.lines.push(item.clone());
                item
            }
        };

        debug!(line = %added.key(), count = %added.count(), "Item added");
        self.observers.notify_all(&CartEvent::ItemAdded(added));
    }

    /// Remove the line matching `item`, whatever its count.
    ///
    /// Returns the removed line, or `None` if the item was not in the cart.
    pub fn remove_item(&mut self, item: &OrderItem) -> Option<OrderItem> {
        self.remove_line(item.key())
    }

    /// Remove the line matching `item` unconditionally.
    ///
    /// Backs "reset to zero" affordances; behaves like [`Cart::remove_item`].
    pub fn clear_all_instances_of(&mut self, item: &OrderItem) -> Option<OrderItem> {
        self.remove_line(item.key())
    }

    /// Replace the matching line's count and choice selections with `item`'s.
    ///
    /// A count of zero removes the line. Returns false if no line matched.
    pub fn update_item(&mut self, item: &OrderItem) -> bool {
        let Some(index) = self.index_of(item.key()) else {
            debug!(line = %item.key(), "Update for item not in cart");
            return false;
        };

        if item.count().is_zero() {
            self.remove_at(index);
            return true;
        }

        let max = self.max_quantity;
        let line = &mut self.lines[index];
        line.apply_overlay(item, max);
        let updated = line.clone();

        debug!(line = %updated.key(), count = %updated.count(), "Item updated");
        self.observers.notify_all(&CartEvent::ItemUpdated(updated));
        true
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        debug!(store_id = %self.store_id, "Cart cleared");
        self.observers.notify_all(&CartEvent::Cleared);
    }

    /// Current count of the line matching `item`, or 0 if absent.
    #[must_use]
    pub fn total_count_for(&self, item: &OrderItem) -> u32 {
        self.line(item.key())
            .map_or(0, |line| line.count().value())
    }

    /// Sum of unit price times count over all lines.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PriceOverflow`] if any line total or the sum
    /// leaves the decimal range.
    pub fn subtotal(&self) -> Result<Price, DomainError> {
        self.lines.iter().try_fold(Decimal::ZERO, |acc, line| {
            acc.checked_add(line.line_total()?)
                .ok_or(DomainError::PriceOverflow("subtotal"))
        })
    }

    /// Sum of counts over all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.count().value()).sum()
    }

    /// Get the line with `key`.
    #[must_use]
    pub fn line(&self, key: &LineKey) -> Option<&OrderItem> {
        self.lines.iter().find(|line| line.key() == key)
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[OrderItem] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true when every line has its required choices selected.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.lines.iter().all(OrderItem::is_purchasable)
    }

    fn index_of(&self, key: &LineKey) -> Option<usize> {
        self.lines.iter().position(|line| line.key() == key)
    }

    fn remove_line(&mut self, key: &LineKey) -> Option<OrderItem> {
        match self.index_of(key) {
            Some(index) => Some(self.remove_at(index)),
            None => {
                debug!(line = %key, "Remove for item not in cart");
                None
            }
        }
    }

    fn remove_at(&mut self, index: usize) -> OrderItem {
        let removed = self.lines.remove(index);
        debug!(line = %removed.key(), "Item removed");
        self.observers
            .notify_all(&CartEvent::ItemRemoved(removed.clone()));
        removed
    }
}
