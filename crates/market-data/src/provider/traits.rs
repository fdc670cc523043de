//! Price provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

use super::capabilities::RateLimit;

/// Trait for latest-price sources.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockfolio_market_data::{MarketDataError, PriceProvider, Quote, RateLimit};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl PriceProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn rate_limit(&self) -> RateLimit {
///         RateLimit::default()
///     }
///
///     async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
///         Err(MarketDataError::SymbolNotFound(symbol.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, used for logging.
    fn id(&self) -> &'static str;

    /// Rate limiting configuration.
    fn rate_limit(&self) -> RateLimit;

    /// Fetch the latest quote for a symbol.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the provider has no
    /// usable price, and another variant when the call itself failed.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
