use std::sync::Arc;

use stockfolio_core::{
    incomes::{IncomeService, IncomeServiceTrait},
    portfolio::{
        analytics::{PortfolioAnalyticsService, PortfolioAnalyticsServiceTrait},
        holdings::{HoldingsService, HoldingsServiceTrait},
        income::{IncomeAnalyticsService, IncomeAnalyticsServiceTrait},
    },
    quotes::{PriceRefreshService, PriceRefreshServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    utils::{Clock, SystemClock},
};
use stockfolio_market_data::{PriceProvider, QuoteApiConfig, QuoteApiProvider, YahooProvider};
use stockfolio_storage_sqlite::{
    db, HoldingRepository, IncomeRepository, TransactionRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat, QuoteProviderKind};

pub struct AppState {
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub income_service: Arc<dyn IncomeServiceTrait>,
    pub holdings_service: Arc<dyn HoldingsServiceTrait>,
    pub portfolio_analytics_service: Arc<dyn PortfolioAnalyticsServiceTrait>,
    pub income_analytics_service: Arc<dyn IncomeAnalyticsServiceTrait>,
    pub price_refresh_service: Arc<dyn PriceRefreshServiceTrait>,
}

/// Logs go to stderr so stdout stays clean JSON.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn build_price_provider(config: &Config) -> anyhow::Result<Arc<dyn PriceProvider>> {
    let defaults = QuoteApiConfig::default();
    let min_delay = config.quote_delay.unwrap_or(defaults.min_delay);

    let provider: Arc<dyn PriceProvider> = match config.quote_provider {
        QuoteProviderKind::QuoteApi => Arc::new(QuoteApiProvider::new(QuoteApiConfig {
            base_url: config.quotes_url.clone(),
            symbol_suffix: config.quote_suffix.clone(),
            min_delay,
            ..defaults
        })),
        QuoteProviderKind::Yahoo => Arc::new(YahooProvider::new(&config.quote_suffix, min_delay)?),
    };
    tracing::info!("Using price provider {}", provider.id());
    Ok(provider)
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::init(&config.db_path)?;
    tracing::debug!("Database path in use: {}", config.db_path);
    let writer = db::spawn_writer((*pool).clone());

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let holding_repository = Arc::new(HoldingRepository::new(pool.clone(), writer.clone()));
    let income_repository = Arc::new(IncomeRepository::new(pool.clone(), writer.clone()));

    let holdings_service: Arc<dyn HoldingsServiceTrait> =
        Arc::new(HoldingsService::new(holding_repository.clone(), clock.clone()));

    let transaction_service: Arc<dyn TransactionServiceTrait> = Arc::new(TransactionService::new(
        transaction_repository.clone(),
        holdings_service.clone(),
        clock.clone(),
    ));

    let income_service: Arc<dyn IncomeServiceTrait> =
        Arc::new(IncomeService::new(income_repository.clone(), clock.clone()));

    let portfolio_analytics_service: Arc<dyn PortfolioAnalyticsServiceTrait> = Arc::new(
        PortfolioAnalyticsService::new(holding_repository.clone(), transaction_repository.clone()),
    );

    let income_analytics_service: Arc<dyn IncomeAnalyticsServiceTrait> =
        Arc::new(IncomeAnalyticsService::new(
            income_repository.clone(),
            holding_repository.clone(),
            clock.clone(),
        ));

    let mut price_refresh =
        PriceRefreshService::new(holding_repository.clone(), build_price_provider(config)?, clock);
    if let Some(delay) = config.quote_delay {
        price_refresh = price_refresh.with_delay(delay);
    }
    let price_refresh_service: Arc<dyn PriceRefreshServiceTrait> = Arc::new(price_refresh);

    Ok(Arc::new(AppState {
        transaction_service,
        income_service,
        holdings_service,
        portfolio_analytics_service,
        income_analytics_service,
        price_refresh_service,
    }))
}
