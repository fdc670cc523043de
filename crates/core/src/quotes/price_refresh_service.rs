use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use rust_decimal::Decimal;
use stockfolio_market_data::PriceProvider;

use super::price_refresh_model::{PriceFetchOutcome, PriceRefreshReport};
use crate::portfolio::holdings::{Holding, HoldingRepositoryTrait};
use crate::utils::Clock;

#[async_trait]
pub trait PriceRefreshServiceTrait: Send + Sync {
    /// Refreshes every holding's price, one symbol at a time.
    ///
    /// Per-symbol failures end up in the report; this never fails as a whole.
    async fn refresh_all_prices(&self) -> PriceRefreshReport;
}

pub struct PriceRefreshService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    provider: Arc<dyn PriceProvider>,
    clock: Arc<dyn Clock>,
    delay: Duration,
}

impl PriceRefreshService {
    /// Paces calls by the provider's minimum delay.
    pub fn new(
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        provider: Arc<dyn PriceProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let delay = provider.rate_limit().min_delay;
        Self {
            holding_repository,
            provider,
            clock,
            delay,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn refresh_holding(&self, holding: &Holding) -> PriceFetchOutcome {
        let symbol = holding.symbol.clone();

        let quote = match self.provider.get_latest_quote(&symbol).await {
            Ok(quote) => quote,
            Err(e) if e.is_not_found() => {
                warn!("No price for {} from {}", symbol, self.provider.id());
                return PriceFetchOutcome::NotFound { symbol };
            }
            Err(e) => {
                error!("Price refresh error for {}: {}", symbol, e);
                return PriceFetchOutcome::Failed {
                    symbol,
                    reason: e.to_string(),
                };
            }
        };

        if quote.close <= Decimal::ZERO {
            warn!("Ignoring non-positive price {} for {}", quote.close, symbol);
            return PriceFetchOutcome::NotFound { symbol };
        }

        match self
            .holding_repository
            .update_holding_price(&symbol, quote.close, self.clock.now())
            .await
        {
            Ok(Some(updated)) => {
                debug!(
                    "{} priced at {} (market value {})",
                    symbol, quote.close, updated.market_value
                );
                PriceFetchOutcome::Updated {
                    symbol,
                    price: quote.close,
                }
            }
            Ok(None) => {
                error!("Price refresh error for {}: holding was removed", symbol);
                PriceFetchOutcome::Failed {
                    symbol,
                    reason: "holding no longer exists".to_string(),
                }
            }
            Err(e) => {
                error!("Price refresh error for {}: {}", symbol, e);
                PriceFetchOutcome::Failed {
                    symbol,
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl PriceRefreshServiceTrait for PriceRefreshService {
    async fn refresh_all_prices(&self) -> PriceRefreshReport {
        let holdings = match self.holding_repository.get_holdings() {
            Ok(holdings) => holdings,
            Err(e) => {
                error!("Failed to load holdings for price refresh: {}", e);
                return PriceRefreshReport {
                    errors: vec![format!("Failed to load holdings: {}", e)],
                    ..Default::default()
                };
            }
        };

        info!(
            "Refreshing prices for {} holdings via {}",
            holdings.len(),
            self.provider.id()
        );

        let mut outcomes = Vec::with_capacity(holdings.len());
        for (index, holding) in holdings.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            outcomes.push(self.refresh_holding(holding).await);
        }

        let report = PriceRefreshReport::from_outcomes(&outcomes);
        info!(
            "Price refresh finished: {}/{} updated",
            report.succeeded, report.total
        );
        report
    }
}
