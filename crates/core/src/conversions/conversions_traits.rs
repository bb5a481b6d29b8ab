//! Conversion repository and service traits.
//!
//! These traits define the contract for the conversion ledger and engine
//! without any database-specific types, allowing for different storage
//! implementations.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use forex_rate_providers::ExchangeRate;

use super::conversions_model::{Conversion, ConversionRequest, HistoryFilter, Page, PageRequest};
use crate::errors::Result;

/// Trait defining the contract for the conversion ledger.
///
/// The ledger is append-only: records are never mutated after `append`.
#[async_trait]
pub trait ConversionRepositoryTrait: Send + Sync {
    /// Durably stores one conversion record.
    ///
    /// The insert is atomic: either the record exists with all fields set,
    /// or it does not exist at all.
    async fn append(&self, conversion: Conversion) -> Result<Conversion>;

    /// Exact-match lookup by transaction identifier.
    ///
    /// Typically zero or one result; the page shape is kept uniform with
    /// the range query.
    fn find_by_transaction_id(
        &self,
        transaction_id: &str,
        page: &PageRequest,
    ) -> Result<Page<Conversion>>;

    /// Range scan over the record timestamp, inclusive on both bounds.
    fn find_by_timestamp_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        page: &PageRequest,
    ) -> Result<Page<Conversion>>;
}

/// Trait defining the contract for conversion engine operations.
#[async_trait]
pub trait ConversionServiceTrait: Send + Sync {
    /// Converts an amount, persists the resulting record, and returns it.
    async fn convert(&self, request: ConversionRequest) -> Result<Conversion>;

    /// Paginated history lookup by a validated filter.
    fn get_conversions(&self, filter: &HistoryFilter, page: &PageRequest)
        -> Result<Page<Conversion>>;

    /// Fetches the current rate for a currency pair from the active
    /// provider, after validating the pair's shape.
    async fn get_exchange_rate(
        &self,
        source_currency: &str,
        target_currency: &str,
    ) -> Result<ExchangeRate>;
}
