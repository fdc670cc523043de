use std::sync::Arc;

use log::{debug, error};

use super::income_calculator::{calculate_dividend_yields, calculate_income_summary};
use super::income_model::{DividendYield, IncomeSummary};
use crate::incomes::IncomeRepositoryTrait;
use crate::portfolio::holdings::HoldingRepositoryTrait;
use crate::utils::Clock;
use crate::Result;

pub trait IncomeAnalyticsServiceTrait: Send + Sync {
    fn get_income_summary(&self) -> Result<IncomeSummary>;
    fn get_dividend_yield_by_asset(&self) -> Result<Vec<DividendYield>>;
}

pub struct IncomeAnalyticsService {
    income_repository: Arc<dyn IncomeRepositoryTrait>,
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl IncomeAnalyticsService {
    pub fn new(
        income_repository: Arc<dyn IncomeRepositoryTrait>,
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        IncomeAnalyticsService {
            income_repository,
            holding_repository,
            clock,
        }
    }
}

impl IncomeAnalyticsServiceTrait for IncomeAnalyticsService {
    fn get_income_summary(&self) -> Result<IncomeSummary> {
        debug!("Getting income summary...");
        let incomes = self.income_repository.get_incomes(None).map_err(|e| {
            error!("Error loading income records: {}", e);
            e
        })?;
        Ok(calculate_income_summary(&incomes, self.clock.today()))
    }

    fn get_dividend_yield_by_asset(&self) -> Result<Vec<DividendYield>> {
        debug!("Getting dividend yield by asset...");
        let holdings = self.holding_repository.get_holdings()?;
        let incomes = self.income_repository.get_incomes(None)?;
        Ok(calculate_dividend_yields(
            &holdings,
            &incomes,
            self.clock.today(),
        ))
    }
}
