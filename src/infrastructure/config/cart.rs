//! Cart configuration.

use serde::Deserialize;

use crate::application::SessionOptions;
use crate::domain::Quantity;

/// Cart behavior settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CartConfig {
    /// Per-line quantity cap, at most 100.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,

    /// ISO currency code sent to the payment gateway.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_max_quantity() -> u32 {
    Quantity::MAX
}

fn default_currency() -> String {
    "usd".into()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            max_quantity: default_max_quantity(),
            currency: default_currency(),
        }
    }
}

impl From<&CartConfig> for SessionOptions {
    fn from(config: &CartConfig) -> Self {
        Self {
            max_quantity: config.max_quantity,
            currency: config.currency.to_lowercase(),
        }
    }
}
