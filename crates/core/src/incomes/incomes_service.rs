use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use super::incomes_model::{Income, IncomeUpdate, NewIncome};
use super::incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::utils::Clock;
use crate::Result;

/// Income records are independent of holdings; no recompute follows a change.
pub struct IncomeService {
    income_repository: Arc<dyn IncomeRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl IncomeService {
    pub fn new(income_repository: Arc<dyn IncomeRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        Self {
            income_repository,
            clock,
        }
    }
}

#[async_trait]
impl IncomeServiceTrait for IncomeService {
    fn get_income(&self, income_id: &str) -> Result<Income> {
        self.income_repository.get_income(income_id)
    }

    fn get_incomes(&self, symbol: Option<&str>) -> Result<Vec<Income>> {
        self.income_repository.get_incomes(symbol)
    }

    async fn create_income(&self, new_income: NewIncome) -> Result<Income> {
        let valid = new_income.validate()?;
        let now = self.clock.now();
        debug!(
            "Recording {} of {} for {}",
            valid.income_type, valid.amount, valid.symbol
        );

        let income = Income {
            id: Uuid::now_v7().to_string(),
            symbol: valid.symbol,
            income_type: valid.income_type,
            amount: valid.amount,
            payment_date: valid.payment_date,
            quantity: valid.quantity,
            tax_withheld: valid.tax_withheld,
            notes: valid.notes,
            created_at: now,
            updated_at: now,
        };
        self.income_repository.create_income(income).await
    }

    async fn update_income(&self, update: IncomeUpdate) -> Result<Income> {
        let existing = self.income_repository.get_income(&update.id)?;
        let valid = update.merge_into(&existing).validate()?;

        let income = Income {
            symbol: valid.symbol,
            income_type: valid.income_type,
            amount: valid.amount,
            payment_date: valid.payment_date,
            quantity: valid.quantity,
            tax_withheld: valid.tax_withheld,
            notes: valid.notes,
            updated_at: self.clock.now(),
            ..existing
        };
        self.income_repository.update_income(income).await
    }

    async fn delete_income(&self, income_id: &str) -> Result<Income> {
        self.income_repository.delete_income(income_id).await
    }
}
