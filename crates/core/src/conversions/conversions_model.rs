//! Conversion domain models.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, TARGET_AMOUNT_SCALE};
use crate::currency::{validate_currency_code, validate_positive_amount};
use crate::errors::ValidationError;

/// One persisted currency conversion.
///
/// Records are immutable once appended to the ledger: `target_amount` is
/// fixed at persist time and never recomputed, and `timestamp` reflects the
/// engine clock at conversion time, which is also the ledger's sort and
/// filter key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub transaction_id: String,
    pub source_amount: Decimal,
    pub source_currency: String,
    pub target_amount: Decimal,
    pub target_currency: String,
    /// Rate used at conversion time, stored verbatim without rounding.
    pub exchange_rate: Decimal,
    pub timestamp: NaiveDateTime,
}

/// Input for one conversion operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub source_amount: Decimal,
    pub source_currency: String,
    pub target_currency: String,
}

impl ConversionRequest {
    /// Shape checks that run before any provider call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_positive_amount(self.source_amount)?;
        validate_currency_code(&self.source_currency)?;
        validate_currency_code(&self.target_currency)?;
        Ok(())
    }
}

/// Rounds a monetary amount to two fractional digits, half-up.
///
/// Midpoints round away from zero (33.335 -> 33.34), not to even.
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(TARGET_AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Ordering of history results by timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Caller-supplied pagination parameters.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: i64,
    pub page_size: i64,
    pub sort: SortOrder,
}

impl PageRequest {
    /// Builds a page request, clamping out-of-range values to sane bounds.
    pub fn new(page: Option<i64>, page_size: Option<i64>, sort: Option<SortOrder>) -> Self {
        Self {
            page: page.unwrap_or(0).max(0),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            sort: sort.unwrap_or_default(),
        }
    }

    pub fn offset(&self) -> i64 {
        self.page * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// One page of query results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + request.page_size - 1) / request.page_size
        };
        Self {
            content,
            page: request.page,
            page_size: request.page_size,
            total_elements,
            total_pages,
        }
    }
}

/// A validated history query: exactly one of the two supported shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryFilter {
    /// Exact transaction-identifier match.
    TransactionId(String),
    /// Inclusive timestamp range; both bounds are required.
    TimestampRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl HistoryFilter {
    /// Builds a filter from raw optional parameters.
    ///
    /// The caller must supply either a transaction identifier or a complete
    /// date pair; anything else is rejected. A supplied identifier takes
    /// precedence, mirroring the inbound query contract.
    pub fn from_params(
        transaction_id: Option<String>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Self, ValidationError> {
        if let Some(id) = transaction_id {
            let id = id.trim().to_string();
            if id.is_empty() {
                return Err(ValidationError::InvalidHistoryQuery(
                    "transactionId must not be blank".to_string(),
                ));
            }
            return Ok(HistoryFilter::TransactionId(id));
        }

        match (start, end) {
            (Some(start), Some(end)) => Ok(HistoryFilter::TimestampRange { start, end }),
            _ => Err(ValidationError::InvalidHistoryQuery(
                "either transactionId or both startDate and endDate must be provided".to_string(),
            )),
        }
    }
}
