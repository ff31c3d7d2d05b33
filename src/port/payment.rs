//! Payment port for checkout.
//!
//! Given a cart's amount, a payment gateway returns a client secret the
//! caller hands to the payment processor's confirmation flow. The core does
//! not implement any payment protocol details.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Price, StoreId};
use crate::error::Result;

/// What the gateway is asked to charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Location being paid.
    pub store_id: StoreId,
    /// Amount to charge.
    pub amount: Price,
    /// ISO currency code, lowercase.
    pub currency: String,
    /// Number of cart lines covered by the payment.
    pub line_count: usize,
}

/// Opaque client secret issued by a payment gateway.
///
/// `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Wrap a secret string.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Expose the secret for handing to the payment processor.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(***)")
    }
}

/// A payment prepared for confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Secret to confirm the payment with.
    pub client_secret: ClientSecret,
    /// The request the intent was created for.
    pub request: CheckoutRequest,
}

/// Gateway to a card payment processor.
///
/// # Errors
///
/// [`create_intent`](Self::create_intent) returns an error when the
/// processor rejects the request or cannot be reached.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Create a payment intent for `request`.
    async fn create_intent(&self, request: &CheckoutRequest) -> Result<PaymentIntent>;
}
