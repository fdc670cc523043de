//! Yahoo Finance price provider.
//!
//! Uses the Yahoo Finance chart API (through `yahoo_finance_api`) to read the
//! latest daily close of equities and ETFs, e.g. `ITSA4.SA` or `AAPL`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::warn;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::{PriceProvider, RateLimit};

const PROVIDER_ID: &str = "YAHOO";

/// Decimal places kept from Yahoo's floating point closes.
const PRICE_SCALE: u32 = 6;

/// Yahoo Finance price provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    symbol_suffix: String,
    min_delay: Duration,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    ///
    /// `symbol_suffix` is appended to every symbol (".SA" for B3 listings,
    /// empty for US listings).
    pub fn new(symbol_suffix: &str, min_delay: Duration) -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self {
            connector,
            symbol_suffix: symbol_suffix.to_string(),
            min_delay,
        })
    }

    fn provider_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.symbol_suffix)
    }

    /// Convert a Yahoo quote to our Quote model.
    fn yahoo_quote_to_quote(
        symbol: &str,
        yahoo_quote: yahoo::Quote,
    ) -> Result<Quote, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        let close = close_to_decimal(yahoo_quote.close)?;
        Ok(Quote::new(symbol, timestamp, close, PROVIDER_ID))
    }
}

fn close_to_decimal(close: f64) -> Result<Decimal, MarketDataError> {
    Decimal::from_f64(close)
        .map(|price| price.round_dp(PRICE_SCALE).normalize())
        .ok_or_else(|| MarketDataError::ValidationFailed {
            message: format!("Failed to convert close price {} to Decimal", close),
        })
}

#[async_trait]
impl PriceProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn rate_limit(&self) -> RateLimit {
        RateLimit {
            requests_per_minute: 60,
            min_delay: self.min_delay,
        }
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let provider_symbol = self.provider_symbol(symbol);

        let response = self
            .connector
            .get_latest_quotes(&provider_symbol, "1d")
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        let yahoo_quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", provider_symbol, e);
            MarketDataError::SymbolNotFound(symbol.to_string())
        })?;

        Self::yahoo_quote_to_quote(symbol, yahoo_quote)
    }
}
