//! Text encodings for values SQLite has no native type for.
//!
//! Decimals are stored as their exact string form, timestamps as fixed-width
//! RFC 3339 UTC strings (so text order is time order) and dates as
//! `YYYY-MM-DD`.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;

use crate::errors::StorageError;

pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(value: &str, field: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::SerializationError(format!("invalid {} '{}': {}", field, value, e))
        })
}

pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, StorageError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        StorageError::SerializationError(format!("invalid {} '{}': {}", field, value, e))
    })
}

pub fn parse_decimal(value: &str, field: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| {
            log::error!("Failed to parse {} '{}': {}", field, value, e);
            StorageError::SerializationError(format!("invalid {} '{}': {}", field, value, e))
        })
}

pub fn parse_optional_decimal(
    value: Option<&str>,
    field: &str,
) -> Result<Option<Decimal>, StorageError> {
    value.map(|v| parse_decimal(v, field)).transpose()
}
