//! Mock provider returning predefined rates for common currencies and
//! pseudo-random rates for everything else.
//!
//! Useful for development and tests: it never fails, performs no I/O, and
//! accepts any source currency. The EUR-only restriction of the live
//! provider is a Fixer.io tier limit, not a domain rule, so it is not
//! enforced here.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::RateProviderError;
use crate::models::ExchangeRate;
use crate::provider::ExchangeRateProvider;

const PROVIDER_ID: &str = "MOCK";

/// Mock exchange-rate provider with a fixed EUR-relative rate table.
pub struct MockProvider {
    eur_rates: HashMap<&'static str, Decimal>,
}

impl MockProvider {
    pub fn new() -> Self {
        let eur_rates = HashMap::from([
            ("USD", dec!(1.09)),
            ("GBP", dec!(0.85)),
            ("JPY", dec!(157.50)),
            ("CHF", dec!(0.96)),
            ("CAD", dec!(1.47)),
            ("AUD", dec!(1.63)),
        ]);
        Self { eur_rates }
    }

    /// A rate in [0.5, 2.5) with four fractional digits, freshly drawn on
    /// every call. Not reproducible across calls.
    fn random_rate() -> Decimal {
        Decimal::new(rand::thread_rng().gen_range(5_000..25_000), 4)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExchangeRateProvider for MockProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_rate(
        &self,
        source_currency: &str,
        target_currency: &str,
    ) -> Result<ExchangeRate, RateProviderError> {
        let rate = self
            .eur_rates
            .get(target_currency)
            .copied()
            .unwrap_or_else(Self::random_rate);

        debug!("Returning mock rate for {source_currency}/{target_currency}: {rate}");
        Ok(ExchangeRate::new(source_currency, target_currency, rate))
    }
}
