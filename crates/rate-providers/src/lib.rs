//! Forex Rate Providers
//!
//! This crate provides the exchange-rate provider abstraction for the forex
//! converter service, together with its two concrete implementations.
//!
//! # Overview
//!
//! A provider answers exactly one question: the current exchange rate for a
//! currency pair. Two implementations exist:
//!
//! - [`FixerProvider`] - fetches live rates from the Fixer.io `/latest`
//!   endpoint. The free tier only quotes EUR-based pairs, so any other
//!   source currency is rejected before a request is made.
//! - [`MockProvider`] - returns a fixed table of EUR-relative rates for
//!   well-known currencies and a pseudo-random rate for anything else.
//!   Intended for development and tests; it never fails.
//!
//! Exactly one provider is active per running instance, chosen at startup
//! by [`ProviderFactory`] from deployment configuration.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::RateProviderError;
pub use models::ExchangeRate;
pub use provider::fixer::FixerProvider;
pub use provider::mock::MockProvider;
pub use provider::{ExchangeRateProvider, ProviderFactory, ProviderSettings};
