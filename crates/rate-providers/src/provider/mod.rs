//! Rate provider trait and provider selection.

pub mod fixer;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::RateProviderError;
use crate::models::ExchangeRate;

/// Trait for exchange-rate providers.
///
/// Implement this trait to add support for a new rate source. Input
/// currencies are assumed to be format-validated by the caller (three
/// uppercase letters); providers only apply their own business rules on
/// top of that.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the current exchange rate for a currency pair.
    ///
    /// One outbound request per call for live providers; no retry and no
    /// caching at this layer.
    async fn get_rate(
        &self,
        source_currency: &str,
        target_currency: &str,
    ) -> Result<ExchangeRate, RateProviderError>;
}

/// Deployment-time provider selection.
///
/// Which variant is active is a configuration choice made once at process
/// start; there is no runtime switching.
#[derive(Debug, Clone)]
pub enum ProviderSettings {
    /// Fixed-table mock provider, for development and tests.
    Mock,
    /// Live Fixer.io provider.
    Fixer { api_key: String, base_url: String },
}

pub struct ProviderFactory;

impl ProviderFactory {
    /// Builds the single active provider for this process.
    pub fn create(settings: &ProviderSettings) -> Arc<dyn ExchangeRateProvider> {
        match settings {
            ProviderSettings::Mock => {
                log::info!("Using mock exchange rate provider");
                Arc::new(mock::MockProvider::new())
            }
            ProviderSettings::Fixer { api_key, base_url } => {
                log::info!("Using Fixer.io exchange rate provider with base URL: {base_url}");
                Arc::new(fixer::FixerProvider::new(api_key.clone(), base_url.clone()))
            }
        }
    }
}
