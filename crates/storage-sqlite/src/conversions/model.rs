//! Database models for conversion records.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use forex_core::conversions::Conversion;
use rust_decimal::Decimal;

use crate::errors::StorageError;

/// Database row for one conversion record.
///
/// Monetary values and rates are stored as TEXT and re-parsed on load so the
/// exact decimal representation survives the round trip.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::conversions)]
#[diesel(primary_key(transaction_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ConversionDB {
    pub transaction_id: String,
    pub source_amount: String,
    pub source_currency: String,
    pub target_amount: String,
    pub target_currency: String,
    pub exchange_rate: String,
    pub timestamp: NaiveDateTime,
}

impl From<&Conversion> for ConversionDB {
    fn from(conversion: &Conversion) -> Self {
        Self {
            transaction_id: conversion.transaction_id.clone(),
            source_amount: conversion.source_amount.to_string(),
            source_currency: conversion.source_currency.clone(),
            target_amount: conversion.target_amount.to_string(),
            target_currency: conversion.target_currency.clone(),
            exchange_rate: conversion.exchange_rate.to_string(),
            timestamp: conversion.timestamp,
        }
    }
}

impl TryFrom<ConversionDB> for Conversion {
    type Error = StorageError;

    fn try_from(db: ConversionDB) -> Result<Self, Self::Error> {
        let parse = |field: &str, value: &str| {
            Decimal::from_str(value).map_err(|e| {
                StorageError::Decode(format!(
                    "conversion {}: invalid decimal in {field}: {e}",
                    db.transaction_id
                ))
            })
        };

        Ok(Self {
            source_amount: parse("source_amount", &db.source_amount)?,
            target_amount: parse("target_amount", &db.target_amount)?,
            exchange_rate: parse("exchange_rate", &db.exchange_rate)?,
            transaction_id: db.transaction_id,
            source_currency: db.source_currency,
            target_currency: db.target_currency,
            timestamp: db.timestamp,
        })
    }
}
