//! Offline payment gateway.
//!
//! Issues locally generated client secrets without contacting a processor.
//! Useful for development builds and for exercising the checkout flow.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::error::{PaymentError, Result};
use crate::port::{CheckoutRequest, ClientSecret, PaymentGateway, PaymentIntent};

/// Gateway that approves every positive amount with a random secret.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGateway;

impl OfflineGateway {
    /// Create a new offline gateway.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for OfflineGateway {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn create_intent(&self, request: &CheckoutRequest) -> Result<PaymentIntent> {
        if request.amount <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount {
                amount: request.amount,
            }
            .into());
        }

        let intent_id = Uuid::new_v4().simple();
        let secret = format!("pi_{intent_id}_secret_{}", Uuid::new_v4().simple());
        info!(
            store_id = %request.store_id,
            amount = %request.amount,
            currency = %request.currency,
            intent = %intent_id,
            "Payment intent created"
        );

        Ok(PaymentIntent {
            client_secret: ClientSecret::new(secret),
            request: request.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreId;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    fn request(amount: Decimal) -> CheckoutRequest {
        CheckoutRequest {
            store_id: StoreId::new("stuy"),
            amount,
            currency: "usd".into(),
            line_count: 1,
        }
    }

    #[tokio::test]
    async fn issues_unique_secrets() {
        let gateway = OfflineGateway::new();
        let a = gateway.create_intent(&request(dec!(5.00))).await.unwrap();
        let b = gateway.create_intent(&request(dec!(5.00))).await.unwrap();

        assert!(a.client_secret.expose().starts_with("pi_"));
        assert!(a.client_secret.expose().contains("_secret_"));
        assert_ne!(a.client_secret, b.client_secret);
        assert_eq!(a.request.amount, dec!(5.00));
    }

    #[tokio::test]
    async fn rejects_non_positive_amounts() {
        let gateway = OfflineGateway::new();
        let result = gateway.create_intent(&request(dec!(0))).await;
        assert!(matches!(
            result,
            Err(Error::Payment(PaymentError::InvalidAmount { .. }))
        ));
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = ClientSecret::new("pi_1_secret_2");
        assert_eq!(format!("{secret:?}"), "ClientSecret(***)");
    }
}
