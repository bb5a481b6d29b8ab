//! Data types shared by all rate providers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The exchange rate for a single currency pair, as quoted by a provider.
///
/// This value is transient: it lives for the duration of one conversion or
/// rate lookup and is never persisted on its own. The rate is kept exactly
/// as the provider returned it, without rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub source_currency: String,
    pub target_currency: String,
    #[serde(rename = "exchangeRate")]
    pub rate: Decimal,
}

impl ExchangeRate {
    pub fn new(source_currency: &str, target_currency: &str, rate: Decimal) -> Self {
        Self {
            source_currency: source_currency.to_string(),
            target_currency: target_currency.to_string(),
            rate,
        }
    }
}
