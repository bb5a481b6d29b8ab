//! The conversion engine.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use forex_rate_providers::{ExchangeRate, ExchangeRateProvider};
use log::{debug, info};
use uuid::Uuid;

use super::conversions_model::{
    round_half_up, Conversion, ConversionRequest, HistoryFilter, Page, PageRequest,
};
use super::conversions_traits::{ConversionRepositoryTrait, ConversionServiceTrait};
use crate::currency::validate_currency_code;
use crate::errors::{Error, Result};

/// Service for converting amounts and querying the conversion ledger.
///
/// Stateless between calls: each conversion fetches a fresh rate, assigns
/// its own identity and timestamp, and appends one immutable record. A
/// single provider or persistence failure fails the whole operation; there
/// are no retries at this layer.
pub struct ConversionService {
    rate_provider: Arc<dyn ExchangeRateProvider>,
    repository: Arc<dyn ConversionRepositoryTrait>,
}

impl ConversionService {
    pub fn new(
        rate_provider: Arc<dyn ExchangeRateProvider>,
        repository: Arc<dyn ConversionRepositoryTrait>,
    ) -> Self {
        Self {
            rate_provider,
            repository,
        }
    }
}

#[async_trait]
impl ConversionServiceTrait for ConversionService {
    async fn convert(&self, request: ConversionRequest) -> Result<Conversion> {
        request.validate()?;

        info!(
            "Converting {} {} to {}",
            request.source_amount, request.source_currency, request.target_currency
        );

        let rate = self
            .rate_provider
            .get_rate(&request.source_currency, &request.target_currency)
            .await
            .map_err(Error::conversion_failed)?;

        let target_amount = round_half_up(request.source_amount * rate.rate);

        let conversion = Conversion {
            transaction_id: Uuid::new_v4().to_string(),
            source_amount: request.source_amount,
            source_currency: request.source_currency,
            target_amount,
            target_currency: request.target_currency,
            exchange_rate: rate.rate,
            timestamp: Utc::now().naive_utc(),
        };

        self.repository
            .append(conversion)
            .await
            .map_err(Error::conversion_failed)
    }

    fn get_conversions(
        &self,
        filter: &HistoryFilter,
        page: &PageRequest,
    ) -> Result<Page<Conversion>> {
        match filter {
            HistoryFilter::TransactionId(transaction_id) => {
                debug!("Finding conversions by transaction ID: {transaction_id}");
                self.repository.find_by_transaction_id(transaction_id, page)
            }
            HistoryFilter::TimestampRange { start, end } => {
                debug!("Finding conversions between {start} and {end}");
                self.repository.find_by_timestamp_range(*start, *end, page)
            }
        }
    }

    async fn get_exchange_rate(
        &self,
        source_currency: &str,
        target_currency: &str,
    ) -> Result<ExchangeRate> {
        validate_currency_code(source_currency)?;
        validate_currency_code(target_currency)?;

        let rate = self
            .rate_provider
            .get_rate(source_currency, target_currency)
            .await?;
        Ok(rate)
    }
}
