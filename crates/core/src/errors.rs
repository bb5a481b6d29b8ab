//! Core error types for the forex converter service.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors (from Diesel, SQLite, etc.) are converted to these types by the
//! storage layer; provider errors cross into the core as
//! [`RateProviderError`].

use forex_rate_providers::RateProviderError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the forex converter.
///
/// Every lower-level failure is mapped to exactly one variant at the
/// boundary where it crosses into the core, preserving the original cause
/// for diagnostics. Nothing is retried automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage fault on read or write.
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    /// Malformed input: bad currency shape, non-positive amount, or an
    /// ambiguous history query. Always caller-fixable.
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A rate provider rejected the request or could not produce a rate.
    #[error("Rate provider error: {0}")]
    RateProvider(#[from] RateProviderError),

    /// The outward-facing failure of the convert-and-persist pipeline.
    /// Wraps the provider or storage error that caused it.
    #[error("Currency conversion failed: {0}")]
    ConversionFailed(#[source] Box<Error>),
}

impl Error {
    /// Wraps a failure that occurred inside the conversion pipeline.
    pub fn conversion_failed(cause: impl Into<Error>) -> Self {
        Error::ConversionFailed(Box::new(cause.into()))
    }

    /// The innermost error, unwrapping any `ConversionFailed` layers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::ConversionFailed(source) => source.root_cause(),
            other => other,
        }
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage
/// layer to convert storage-specific errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Currency code '{0}' must be exactly 3 uppercase letters")]
    InvalidCurrencyCode(String),

    #[error("Amount must be strictly positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Invalid history query: {0}")]
    InvalidHistoryQuery(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
