use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest price observation for a symbol
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol as requested by the caller (without provider suffixes)
    pub symbol: String,

    /// Timestamp of the quote
    pub timestamp: DateTime<Utc>,

    /// Closing/current price
    pub close: Decimal,

    /// Quote currency, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Source of the quote (QUOTE_API, YAHOO, ...)
    pub source: String,
}

impl Quote {
    pub fn new(symbol: &str, timestamp: DateTime<Utc>, close: Decimal, source: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            timestamp,
            close,
            currency: None,
            source: source.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }
}
