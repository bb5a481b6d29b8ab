//! Pure currency and amount validation helpers.
//!
//! These checks gate every conversion and rate lookup. They are shape
//! checks only: codes are not verified against a live currency registry,
//! and provider tier rules (such as the live provider's EUR-only source)
//! are enforced by the provider itself, not here.

use rust_decimal::Decimal;

use crate::constants::CURRENCY_CODE_LENGTH;
use crate::errors::ValidationError;

/// Checks that a currency code is exactly 3 uppercase ASCII letters.
pub fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == CURRENCY_CODE_LENGTH && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrencyCode(code.to_string()))
    }
}

/// Checks that an amount is strictly positive.
pub fn validate_positive_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveAmount(amount))
    }
}
