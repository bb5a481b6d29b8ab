//! Fixer.io provider for live exchange rates.
//!
//! Calls the `/latest` endpoint with a single-symbol filter. The free tier
//! of Fixer.io only quotes rates against an EUR base, so any other source
//! currency is rejected up front without touching the network.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::RateProviderError;
use crate::models::ExchangeRate;
use crate::provider::ExchangeRateProvider;

const PROVIDER_ID: &str = "FIXER";

/// The only base currency available on the Fixer.io free tier.
const FIXED_BASE_CURRENCY: &str = "EUR";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API response from Fixer.io `/latest`.
#[derive(Debug, Deserialize)]
struct FixerResponse {
    /// Whether the request was successful
    success: bool,
    /// Unix timestamp of the quoted rates
    #[allow(dead_code)]
    timestamp: Option<i64>,
    /// Base currency used in the request
    #[allow(dead_code)]
    base: Option<String>,
    /// Quote date as reported upstream
    #[allow(dead_code)]
    date: Option<String>,
    /// Rates for the requested symbols
    rates: Option<HashMap<String, Decimal>>,
    /// Error details, present when `success` is false
    error: Option<FixerApiError>,
}

#[derive(Debug, Deserialize)]
struct FixerApiError {
    code: i64,
    info: Option<String>,
}

/// Live exchange-rate provider backed by Fixer.io.
pub struct FixerProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FixerProvider {
    /// Create a new Fixer.io provider with the given API key and base URL.
    pub fn new(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl ExchangeRateProvider for FixerProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_rate(
        &self,
        source_currency: &str,
        target_currency: &str,
    ) -> Result<ExchangeRate, RateProviderError> {
        // Tier restriction, checked before any network call.
        if source_currency != FIXED_BASE_CURRENCY {
            error!(
                "Only {} is supported as source currency with the free tier of Fixer.io, got {}",
                FIXED_BASE_CURRENCY, source_currency
            );
            return Err(RateProviderError::UnsupportedCurrency(
                source_currency.to_string(),
            ));
        }

        let url = format!(
            "{}/latest?access_key={}&base={}&symbols={}",
            self.base_url, self.api_key, FIXED_BASE_CURRENCY, target_currency
        );
        debug!("Requesting exchange rate for {source_currency}/{target_currency} from Fixer.io");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RateProviderError::unavailable(PROVIDER_ID, e.to_string()))?;

        let fixer_resp: FixerResponse = response
            .json()
            .await
            .map_err(|e| RateProviderError::unavailable(PROVIDER_ID, e.to_string()))?;

        if !fixer_resp.success {
            let message = match fixer_resp.error {
                Some(api_error) => format!(
                    "{}: {}",
                    api_error.code,
                    api_error.info.unwrap_or_else(|| "Unknown error".to_string())
                ),
                None => "Unknown error".to_string(),
            };
            error!("Fixer API error: {message}");
            return Err(RateProviderError::unavailable(PROVIDER_ID, message));
        }

        let rate = fixer_resp
            .rates
            .as_ref()
            .and_then(|rates| rates.get(target_currency))
            .copied()
            .ok_or_else(|| {
                RateProviderError::unavailable(
                    PROVIDER_ID,
                    format!("Target currency {target_currency} not found in response rates"),
                )
            })?;

        debug!("Fixer.io rate for {source_currency}/{target_currency}: {rate}");
        Ok(ExchangeRate::new(source_currency, target_currency, rate))
    }
}
