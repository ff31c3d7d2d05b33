//! Scripted payment gateway.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{PaymentError, Result};
use crate::port::{CheckoutRequest, ClientSecret, PaymentGateway, PaymentIntent};

/// Scripted outcome for one `create_intent` call.
#[derive(Debug, Clone)]
pub enum GatewayReply {
    /// Approve with this client secret.
    Approve(String),
    /// Decline with this reason.
    Decline(String),
}

/// Gateway returning pre-scripted replies in order and recording requests.
///
/// Once the script is exhausted every request is approved with
/// `pi_test_secret`.
#[derive(Default)]
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<GatewayReply>>,
    requests: Mutex<Vec<CheckoutRequest>>,
}

impl ScriptedGateway {
    pub fn new(replies: impl IntoIterator<Item = GatewayReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CheckoutRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn create_intent(&self, request: &CheckoutRequest) -> Result<PaymentIntent> {
        self.requests.lock().push(request.clone());

        let reply = self
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| GatewayReply::Approve("pi_test_secret".into()));

        match reply {
            GatewayReply::Approve(secret) => Ok(PaymentIntent {
                client_secret: ClientSecret::new(secret),
                request: request.clone(),
            }),
            GatewayReply::Decline(reason) => Err(PaymentError::Declined(reason).into()),
        }
    }
}
