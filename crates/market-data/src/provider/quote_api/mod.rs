//! Quote API provider.
//!
//! Fetches the latest price of a symbol from a JSON quote service exposing
//! `GET {base_url}/{symbol}{suffix}`. Services differ in where they put the
//! price, so the first of these fields that is present wins:
//! - `price`
//! - `regularMarketPrice`
//! - `currentPrice`
//! - `results[0].regularMarketPrice`

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client, StatusCode};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::{PriceProvider, RateLimit};

/// Provider ID constant
const PROVIDER_ID: &str = "QUOTE_API";

/// Default quote service endpoint
pub const DEFAULT_QUOTE_API_URL: &str = "http://localhost:3001/quotes";

/// Default suffix appended to symbols (B3 listings)
pub const DEFAULT_SYMBOL_SUFFIX: &str = ".SA";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Connection settings for [`QuoteApiProvider`].
#[derive(Clone, Debug)]
pub struct QuoteApiConfig {
    /// Base URL, without the trailing symbol segment
    pub base_url: String,
    /// Suffix appended to every symbol before the request
    pub symbol_suffix: String,
    /// Connect and read timeout
    pub timeout: Duration,
    /// Courtesy delay between two consecutive requests
    pub min_delay: Duration,
}

impl Default for QuoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_QUOTE_API_URL.to_string(),
            symbol_suffix: DEFAULT_SYMBOL_SUFFIX.to_string(),
            timeout: Duration::from_secs(10),
            min_delay: Duration::from_secs(1),
        }
    }
}

/// JSON quote API provider.
///
/// # Example
///
/// ```ignore
/// use stockfolio_market_data::{QuoteApiConfig, QuoteApiProvider};
///
/// let provider = QuoteApiProvider::new(QuoteApiConfig::default());
/// ```
pub struct QuoteApiProvider {
    client: Client,
    config: QuoteApiConfig,
}

impl QuoteApiProvider {
    /// Create a new provider with the given connection settings.
    pub fn new(config: QuoteApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Builds the request URL for a symbol.
    fn quote_url(&self, symbol: &str) -> String {
        format!(
            "{}/{}{}",
            self.config.base_url.trim_end_matches('/'),
            encode(symbol),
            self.config.symbol_suffix
        )
    }
}

/// Reads a decimal out of a JSON number or numeric string.
fn value_to_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Extracts the price from a quote service response.
///
/// The first non-null candidate field decides: a present but unparsable
/// price is treated as missing rather than falling through to later fields.
pub(crate) fn extract_price(data: &Value) -> Option<Decimal> {
    let candidate = [
        data.get("price"),
        data.get("regularMarketPrice"),
        data.get("currentPrice"),
        data.pointer("/results/0/regularMarketPrice"),
    ]
    .into_iter()
    .flatten()
    .find(|v| !v.is_null())?;

    value_to_decimal(candidate)
}

/// Extracts the quote currency, when the response carries one.
fn extract_currency(data: &Value) -> Option<String> {
    data.get("currency")
        .or_else(|| data.pointer("/results/0/currency"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl PriceProvider for QuoteApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn rate_limit(&self) -> RateLimit {
        RateLimit {
            requests_per_minute: 60,
            min_delay: self.config.min_delay,
        }
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let url = self.quote_url(symbol);
        debug!("Fetching price for {} from {}", symbol, url);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::Network(e)
                }
            })?;

        let status = response.status();
        debug!("Response for {}: {}", symbol, status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                "HTTP error for {}: {} {}",
                symbol,
                status,
                body.chars().take(200).collect::<String>()
            );
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        if body.trim().is_empty() {
            warn!("Empty response body for {}", symbol);
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let data: Value =
            serde_json::from_str(&body).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Invalid JSON response: {}", e),
            })?;

        let price = extract_price(&data).ok_or_else(|| {
            warn!("Could not find price field for {}. Response: {}", symbol, data);
            MarketDataError::SymbolNotFound(symbol.to_string())
        })?;

        debug!("Successfully fetched price for {}: {}", symbol, price);

        Ok(Quote::new(symbol, Utc::now(), price, PROVIDER_ID).with_currency(extract_currency(&data)))
    }
}
