//! Cart session service.
//!
//! A [`CartSession`] owns the cart for one location and keeps its persisted
//! record in step: every mutation is applied to the in-memory cart first and
//! then saved, or the record is deleted once the cart is empty. Checkout is
//! two-phase: [`CartSession::begin_checkout`] obtains a payment intent and
//! [`CartSession::complete_checkout`] empties the cart after the payment has
//! been confirmed.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{Cart, CartObserver, ObserverId, OrderItem, Quantity, StoreId};
use crate::error::{CheckoutError, Result};
use crate::port::{CartStore, CheckoutRequest, PaymentGateway, PaymentIntent};

/// Settings applied to carts opened by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Per-line quantity cap for newly created carts.
    pub max_quantity: u32,
    /// ISO currency code sent with payment requests.
    pub currency: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_quantity: Quantity::MAX,
            currency: "usd".into(),
        }
    }
}

/// The cart a customer is building at one location, plus its persistence.
pub struct CartSession<S> {
    cart: Cart,
    store: Arc<S>,
    options: SessionOptions,
}

impl<S: CartStore> CartSession<S> {
    /// Restore the persisted cart for `store_id`, or start an empty one.
    ///
    /// A restored cart keeps its own cap unless `options.max_quantity` is
    /// lower, in which case lines are clamped to the session's cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn open(
        store: Arc<S>,
        store_id: StoreId,
        store_name: impl Into<String>,
        options: SessionOptions,
    ) -> Result<Self> {
        let cart = match store.load(&store_id).await? {
            Some(cart) => {
                info!(store_id = %store_id, lines = cart.len(), "Restored cart");
                let cap = options.max_quantity.min(cart.max_quantity());
                cart.with_max_quantity(cap)
            }
            None => Cart::new(store_id, store_name).with_max_quantity(options.max_quantity),
        };

        Ok(Self {
            cart,
            store,
            options,
        })
    }

    /// Get the cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get the session options.
    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Subscribe an observer to cart changes.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) -> ObserverId {
        self.cart.subscribe(observer)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.cart.unsubscribe(id)
    }

    /// Add `item.count()` units of `item`, then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails. The cart keeps the change.
    pub async fn add_item(&mut self, item: OrderItem) -> Result<()> {
        self.cart.add_item(item);
        self.persist().await
    }

    /// Remove the line matching `item`, then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails. The cart keeps the change.
    pub async fn remove_item(&mut self, item: &OrderItem) -> Result<()> {
        if self.cart.remove_item(item).is_some() {
            self.persist().await?;
        }
        Ok(())
    }

    /// Replace the matching line's count and selections, then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails. The cart keeps the change.
    pub async fn update_item(&mut self, item: &OrderItem) -> Result<()> {
        if self.cart.update_item(item) {
            self.persist().await?;
        }
        Ok(())
    }

    /// Remove the matching line unconditionally, then persist.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails. The cart keeps the change.
    pub async fn clear_all_instances_of(&mut self, item: &OrderItem) -> Result<()> {
        if self.cart.clear_all_instances_of(item).is_some() {
            self.persist().await?;
        }
        Ok(())
    }

    /// Empty the cart and delete its record.
    ///
    /// # Errors
    ///
    /// Returns an error if deleting the record fails.
    pub async fn clear(&mut self) -> Result<()> {
        self.cart.clear();
        self.persist().await
    }

    /// Validate the cart and ask `gateway` for a payment intent.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart,
    /// [`CheckoutError::RequiredChoiceMissing`] if a line lacks a required
    /// selection, or the gateway's error.
    pub async fn begin_checkout<G>(&self, gateway: &G) -> Result<PaymentIntent>
    where
        G: PaymentGateway + ?Sized,
    {
        let request = self.checkout_request()?;
        let intent = gateway.create_intent(&request).await?;
        info!(
            store_id = %request.store_id,
            amount = %request.amount,
            gateway = gateway.name(),
            "Checkout started"
        );
        Ok(intent)
    }

    /// Empty the cart after `intent` was confirmed with the processor.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::StaleIntent`] if the cart changed since the
    /// intent was created, or a storage error.
    pub async fn complete_checkout(&mut self, intent: &PaymentIntent) -> Result<()> {
        let request = &intent.request;
        if request.store_id != *self.cart.store_id()
            || request.amount != self.cart.subtotal()?
            || request.line_count != self.cart.len()
        {
            warn!(store_id = %request.store_id, "Payment intent does not match cart");
            return Err(CheckoutError::StaleIntent.into());
        }

        self.cart.clear();
        self.persist().await?;
        info!(store_id = %request.store_id, amount = %request.amount, "Checkout completed");
        Ok(())
    }

    fn checkout_request(&self) -> Result<CheckoutRequest> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }
        for line in self.cart.lines() {
            if let Some(choice) = line.missing_required().first() {
                return Err(CheckoutError::RequiredChoiceMissing {
                    item: line.name().to_string(),
                    choice: choice.name().to_string(),
                }
                .into());
            }
        }

        Ok(CheckoutRequest {
            store_id: self.cart.store_id().clone(),
            amount: self.cart.subtotal()?,
            currency: self.options.currency.clone(),
            line_count: self.cart.len(),
        })
    }

    async fn persist(&self) -> Result<()> {
        let result = if self.cart.is_empty() {
            self.store.delete(self.cart.store_id()).await.map(|_| ())
        } else {
            self.store.save(&self.cart).await
        };
        if let Err(e) = &result {
            warn!(store_id = %self.cart.store_id(), error = %e, "Failed to persist cart");
        }
        result
    }
}
