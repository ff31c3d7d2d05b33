//! Recording cart observer.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{CartEvent, CartObserver, OrderItem};

/// Thread-safe event collector for cart notification assertions.
///
/// Clones share the same event log, so keep one clone in the test and
/// subscribe the other.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<CartEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far, oldest first.
    pub fn events(&self) -> Vec<CartEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, event: CartEvent) {
        self.events.lock().push(event);
    }
}

impl CartObserver for RecordingObserver {
    fn on_item_added(&self, item: &OrderItem) {
        self.push(CartEvent::ItemAdded(item.clone()));
    }

    fn on_item_removed(&self, item: &OrderItem) {
        self.push(CartEvent::ItemRemoved(item.clone()));
    }

    fn on_item_updated(&self, item: &OrderItem) {
        self.push(CartEvent::ItemUpdated(item.clone()));
    }

    fn on_cleared(&self) {
        self.push(CartEvent::Cleared);
    }
}
