//! Cart change notification.
//!
//! A [`Cart`](super::Cart) broadcasts every mutation to the observers in its
//! [`ObserverRegistry`]. Any number of observers can subscribe; each one is
//! identified by the [`ObserverId`] returned at subscription so it can be
//! removed again.

use std::fmt;

use super::order_item::OrderItem;

/// A change applied to a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// A line was inserted, or merged into an existing line.
    ItemAdded(OrderItem),
    /// A line was removed.
    ItemRemoved(OrderItem),
    /// A line's count or choice selections changed.
    ItemUpdated(OrderItem),
    /// Every line was removed at once.
    Cleared,
}

impl CartEvent {
    /// The line the event concerns, if any.
    #[must_use]
    pub fn item(&self) -> Option<&OrderItem> {
        match self {
            Self::ItemAdded(item) | Self::ItemRemoved(item) | Self::ItemUpdated(item) => {
                Some(item)
            }
            Self::Cleared => None,
        }
    }
}

/// Receiver of cart changes.
///
/// Every method has an empty default so implementors only override what
/// they care about. Callbacks run synchronously inside the cart mutation and
/// should return quickly.
pub trait CartObserver: Send + Sync {
    /// A line was inserted or merged. `item` is the line after the change.
    fn on_item_added(&self, _item: &OrderItem) {}

    /// A line was removed. `item` is the line as it was.
    fn on_item_removed(&self, _item: &OrderItem) {}

    /// A line changed. `item` is the line after the change.
    fn on_item_updated(&self, _item: &OrderItem) {}

    /// The cart was emptied.
    fn on_cleared(&self) {}
}

/// Token identifying a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registry of observers (composite pattern).
///
/// Broadcasts events to all registered observers in subscription order.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn CartObserver>)>,
    next_id: u64,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn register(&mut self, observer: Box<dyn CartObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if the ID was unknown.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Notify all registered observers.
    pub fn notify_all(&self, event: &CartEvent) {
        for (_, observer) in &self.observers {
            match event {
                CartEvent::ItemAdded(item) => observer.on_item_added(item),
                CartEvent::ItemRemoved(item) => observer.on_item_removed(item),
                CartEvent::ItemUpdated(item) => observer.on_item_updated(item),
                CartEvent::Cleared => observer.on_cleared(),
            }
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A no-op observer.
pub struct NullObserver;

impl CartObserver for NullObserver {}
