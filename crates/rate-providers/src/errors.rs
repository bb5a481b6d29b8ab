//! Error types for the rate provider crate.

use thiserror::Error;

/// Errors that can occur while fetching an exchange rate.
#[derive(Error, Debug)]
pub enum RateProviderError {
    /// The source currency is rejected by the active provider's tier rules.
    /// This is a business-rule rejection, not a shape error; it is raised
    /// before any network I/O.
    #[error("Currency '{0}' is not supported as a source currency by this provider")]
    UnsupportedCurrency(String),

    /// The provider could not produce a rate: network failure, timeout,
    /// malformed or unsuccessful upstream payload, or the target symbol
    /// missing from the response. Recoverable only by the caller retrying
    /// later; never retried inside the provider.
    #[error("Exchange rate unavailable: {provider} - {message}")]
    RateUnavailable {
        /// The provider that failed to produce a rate
        provider: String,
        /// Description of the failure
        message: String,
    },
}

impl RateProviderError {
    /// Shorthand for building a [`RateProviderError::RateUnavailable`].
    pub fn unavailable(provider: &str, message: impl Into<String>) -> Self {
        Self::RateUnavailable {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}
