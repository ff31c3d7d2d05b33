//! Logging cart observer.

use tracing::info;

use crate::domain::{CartObserver, OrderItem};

/// An observer that logs cart changes via tracing.
pub struct LogObserver;

impl CartObserver for LogObserver {
    fn on_item_added(&self, item: &OrderItem) {
        info!(line = %item.key(), name = item.name(), count = %item.count(), "Item added");
    }

    fn on_item_removed(&self, item: &OrderItem) {
        info!(line = %item.key(), name = item.name(), "Item removed");
    }

    fn on_item_updated(&self, item: &OrderItem) {
        info!(line = %item.key(), count = %item.count(), "Item updated");
    }

    fn on_cleared(&self) {
        info!("Cart cleared");
    }
}
