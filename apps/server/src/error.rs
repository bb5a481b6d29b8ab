//! HTTP error mapping.
//!
//! Core errors cross the transport boundary as a `{code, message, timestamp}`
//! JSON body. `ConversionFailed` is mapped by its root cause where that cause
//! is distinguishable (unsupported currency, rate unavailable), so the error
//! taxonomy stays visible to API clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDateTime;
use forex_core::Error;
use forex_rate_providers::RateProviderError;
use serde::Serialize;

pub type ApiResult<T> = Result<T, ApiError>;

pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: &'static str,
    message: String,
    timestamp: NaiveDateTime,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let in_conversion = matches!(err, Error::ConversionFailed(_));
        let (status, code) = match err.root_cause() {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT"),
            Error::RateProvider(RateProviderError::UnsupportedCurrency(_)) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_CURRENCY_ERROR")
            }
            Error::RateProvider(RateProviderError::RateUnavailable { .. }) => {
                (StatusCode::SERVICE_UNAVAILABLE, "EXCHANGE_RATE_ERROR")
            }
            _ if in_conversion => (StatusCode::INTERNAL_SERVER_ERROR, "CONVERSION_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
        };

        Self {
            status,
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}: {}", self.code, self.message);
        } else {
            tracing::debug!("{}: {}", self.code, self.message);
        }

        let body = ErrorBody {
            code: self.code,
            message: self.message,
            timestamp: chrono::Utc::now().naive_utc(),
        };
        (self.status, Json(body)).into_response()
    }
}
