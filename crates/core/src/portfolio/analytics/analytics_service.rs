use std::sync::Arc;

use log::debug;

use super::analytics_calculator::calculate_portfolio_summary;
use super::analytics_model::PortfolioSummary;
use crate::portfolio::holdings::HoldingRepositoryTrait;
use crate::transactions::TransactionRepositoryTrait;
use crate::Result;

pub trait PortfolioAnalyticsServiceTrait: Send + Sync {
    fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;
}

pub struct PortfolioAnalyticsService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl PortfolioAnalyticsService {
    pub fn new(
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            holding_repository,
            transaction_repository,
        }
    }
}

impl PortfolioAnalyticsServiceTrait for PortfolioAnalyticsService {
    fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let holdings = self.holding_repository.get_holdings()?;
        let transactions = self.transaction_repository.get_transactions(None)?;
        debug!(
            "Computing portfolio summary over {} holdings and {} transactions",
            holdings.len(),
            transactions.len()
        );
        Ok(calculate_portfolio_summary(&holdings, &transactions))
    }
}
